use core::fmt;

/// Stack buffer for `core::fmt` output. Text beyond `N` bytes is cut off
/// and the write reports `fmt::Error`.
#[derive(Debug)]
pub(crate) struct ScratchBuf<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> ScratchBuf<N> {
    pub(crate) fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl<const N: usize> fmt::Write for ScratchBuf<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let free = &mut self.buf[self.len..];
        let n = s.len().min(free.len());
        free[..n].copy_from_slice(&s.as_bytes()[..n]);
        self.len += n;
        if n < s.len() {
            Err(fmt::Error)
        } else {
            Ok(())
        }
    }
}
