/// Builds a line into a buffer, converting each argument with `Arg::from`.
///
/// ```
/// let mut buffer = [0u8; 64];
/// let len = kvline::kv_line!(&mut buffer, "user=s id=d login", "alice", 42).unwrap();
/// assert_eq!(&buffer[..len], b"user=alice id=42 msg=login\n");
/// ```
#[macro_export]
macro_rules! kv_line {
    ($dst:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::build_line($dst, $fmt, &[$($crate::Arg::from($arg)),*])
    };
}

/// Logs a line through a `Logger`, converting each argument with `Arg::from`.
#[macro_export]
macro_rules! kv_log {
    ($logger:expr, $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, $fmt, &[$($crate::Arg::from($arg)),*])
    };
}
