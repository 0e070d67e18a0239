// crates/spiadc-core/src/acquire/source.rs

use std::io::Read;

/// Anything that can clock out one frame's worth of bytes.
///
/// `fill` is called with a buffer of exactly the frame length and returns how many
/// bytes it wrote. A count below `buf.len()` is reported by the sequencer as a
/// short read; it is never retried here.
pub trait ByteSource {
    fn fill(&mut self, buf: &mut [u8]) -> std::io::Result<usize>;
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    fn fill(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        (**self).fill(buf)
    }
}

impl<T: ByteSource + ?Sized> ByteSource for Box<T> {
    fn fill(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        (**self).fill(buf)
    }
}

/// Adapter for `std::io::Read`: one `read` call per frame.
///
/// Works for a spidev character device opened for `read(2)`, a plain file, or an
/// in-memory cursor.
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
}

impl<R: Read> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn fill(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}
