use crate::format::ValueType;

/// A single value consumed by a `key=tag` token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    /// Text, consumed by `s`
    Str(&'a str),
    /// Signed integer, consumed by `d`
    Int(i64),
    /// Address, consumed by `p`
    Pointer(usize),
    /// Raw bytes, consumed by `*s`; the length travels with the slice
    Bytes(&'a [u8]),
}

impl Arg<'_> {
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Arg::Str(_) => ValueType::Str,
            Arg::Int(_) => ValueType::Int,
            Arg::Pointer(_) => ValueType::Pointer,
            Arg::Bytes(_) => ValueType::Bytes,
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(value)
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(value: &'a [u8]) -> Self {
        Arg::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Arg::Bytes(value)
    }
}

macro_rules! int_arg_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg<'_> {
                fn from(value: $t) -> Self {
                    Arg::Int(i64::from(value))
                }
            }
        )*
    };
}

int_arg_from!(i8, i16, i32, i64, u8, u16, u32);

impl<T> From<*const T> for Arg<'_> {
    fn from(value: *const T) -> Self {
        Arg::Pointer(value as usize)
    }
}

impl<T> From<*mut T> for Arg<'_> {
    fn from(value: *mut T) -> Self {
        Arg::Pointer(value as usize)
    }
}
