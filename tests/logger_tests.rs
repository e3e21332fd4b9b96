use embedded_io::{ErrorKind, ErrorType, Write};
use kvline::{kv_log, Arg, EncodeError, Level, LogError, Logger, Options};

#[derive(Debug, Default)]
struct RecordingSink {
    data: Vec<u8>,
    flushes: usize,
    fail: Option<ErrorKind>,
}

impl ErrorType for RecordingSink {
    type Error = ErrorKind;
}

impl Write for RecordingSink {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if let Some(kind) = self.fail {
            return Err(kind);
        }
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

fn without_level() -> Options {
    Options {
        level_field: false,
        ..Options::default()
    }
}

#[test]
fn test_info_line_is_written_and_flushed() {
    let mut logger = Logger::new(RecordingSink::default());
    let len = logger
        .info("user=s login", &[Arg::Str("alice")])
        .unwrap();
    let sink = logger.into_inner();
    assert_eq!(sink.data, b"level=info user=alice msg=login\n");
    assert_eq!(len, sink.data.len());
    assert_eq!(sink.flushes, 1);
}

#[test]
fn test_each_level_has_its_name() {
    let mut logger = Logger::new(RecordingSink::default());
    logger.debug("a", &[]).unwrap();
    logger.warn("b", &[]).unwrap();
    logger.error("c", &[]).unwrap();
    assert_eq!(
        logger.into_inner().data,
        b"level=debug msg=a\nlevel=warn msg=b\nlevel=error msg=c\n"
    );
}

#[test]
fn test_lines_below_min_level_are_dropped() {
    let options = Options {
        min_level: Level::Warn,
        ..Options::default()
    };
    let mut logger = Logger::with_options(RecordingSink::default(), options);
    assert!(!logger.enabled(Level::Info));
    assert_eq!(logger.info("n=d", &[Arg::Int(1)]), Ok(0));
    assert_eq!(logger.debug("n=d", &[Arg::Int(1)]), Ok(0));
    assert!(logger.error("n=d", &[Arg::Int(2)]).is_ok());

    let sink = logger.into_inner();
    assert_eq!(sink.data, b"level=error n=2 \n");
    assert_eq!(sink.flushes, 1);
}

#[test]
fn test_level_field_can_be_disabled() {
    let mut logger = Logger::with_options(RecordingSink::default(), without_level());
    logger.info("n=d", &[Arg::Int(3)]).unwrap();
    assert_eq!(logger.into_inner().data, b"n=3 \n");
}

#[test]
fn test_truncated_line_is_still_written() {
    let mut logger = Logger::<_, 32>::bounded(RecordingSink::default(), without_level());
    let result = logger.info("key=s hello world", &[Arg::Str("some_value")]);
    assert_eq!(
        result,
        Err(LogError::Encode(EncodeError::OutOfSpace { written: 31 }))
    );
    let sink = logger.into_inner();
    assert_eq!(sink.data, b"key=some_value msg=\"hello worl\n");
    assert_eq!(sink.flushes, 1);
}

#[test]
fn test_sink_failure() {
    let sink = RecordingSink {
        fail: Some(ErrorKind::Other),
        ..RecordingSink::default()
    };
    let mut logger = Logger::new(sink);
    assert_eq!(
        logger.info("n=d", &[Arg::Int(1)]),
        Err(LogError::Sink(ErrorKind::Other))
    );
    assert_eq!(logger.into_inner().flushes, 0);
}

#[test]
fn test_line_capacity_too_small() {
    let mut logger = Logger::<_, 2>::bounded(RecordingSink::default(), Options::default());
    assert_eq!(
        logger.info("n=d", &[Arg::Int(1)]),
        Err(LogError::Encode(EncodeError::BufferTooSmall {
            required: 3,
            provided: 2
        }))
    );
    assert!(logger.into_inner().data.is_empty());
}

#[test]
fn test_emit_with_builder() {
    let mut logger = Logger::new(RecordingSink::default());
    logger
        .emit(Level::Warn, |line| {
            line.field_int("retries", 3).message(b"giving up");
        })
        .unwrap();
    assert_eq!(
        logger.into_inner().data,
        b"level=warn retries=3 msg=\"giving up\"\n"
    );
}

#[test]
fn test_kv_log_macro() {
    let mut logger = Logger::new(RecordingSink::default());
    kv_log!(logger, Level::Info, "host=s port=d ready", "db 1", 5432).unwrap();
    assert_eq!(
        logger.writer_mut().data,
        b"level=info host=\"db 1\" port=5432 msg=ready\n"
    );
}

#[test]
fn test_sink_never_sees_terminator() {
    let mut logger = Logger::<_, 16>::bounded(RecordingSink::default(), without_level());
    let _ = logger.info("a=s", &[Arg::Str("x y z w v u t s r")]);
    let sink = logger.into_inner();
    assert!(!sink.data.contains(&0));
    assert_eq!(sink.data.last(), Some(&b'\n'));
}
