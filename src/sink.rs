/// Trait for destinations that accept the bytes produced by a [`crate::VgaTerminal`].
///
/// On the original hardware this is a serial line running at 115200 baud,
/// 8 data bits and no parity. Any transport works as long as it keeps the
/// bytes in order and delivers all of them.
pub trait VgaSink {
    /// Error reported when the transport cannot take the bytes.
    type Error;

    /// Writes all of `bytes`, or fails.
    ///
    /// A single control sequence may be split across several calls, so an
    /// implementation must not assume one call carries one whole command.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl<S: VgaSink + ?Sized> VgaSink for &mut S {
    type Error = S::Error;

    #[inline(always)]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_bytes(bytes)
    }
}

#[cfg(feature = "alloc")]
impl VgaSink for alloc::vec::Vec<u8> {
    type Error = core::convert::Infallible;

    #[inline(always)]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Adapts any [`std::io::Write`] implementation, such as a serial port
/// handle or standard output, into a [`VgaSink`].
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W> {
    writer: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    /// Wraps `writer`.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flushes the wrapped writer.
    ///
    /// The terminal never flushes on its own, so buffered writers must be
    /// flushed by the caller once a batch of commands is complete.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    /// The wrapped writer.
    #[inline(always)]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// The wrapped writer, mutably.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Unwraps the writer without flushing it.
    #[inline(always)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> VgaSink for IoSink<W> {
    type Error = std::io::Error;

    #[inline(always)]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.writer.write_all(bytes)
    }
}

/// Returns a [`VgaSink`] that passes each chunk of output to the given
/// function.
///
/// This is the simplest way to connect a terminal to a transport that has
/// no [`VgaSink`] implementation of its own, such as a HAL serial driver:
///
/// ```rust
/// # use vgaterm::{sink_fn, VgaTerminal};
/// # let mut sent: Vec<u8> = Vec::new();
/// let sink = sink_fn(|bytes: &[u8]| -> Result<(), core::convert::Infallible> {
///     sent.extend_from_slice(bytes);
///     Ok(())
/// });
/// let mut term = VgaTerminal::init(sink).unwrap();
/// term.clear_screen().unwrap();
/// # drop(term);
/// # assert_eq!(sent, b"\x1b[2J\x1b[2J");
/// ```
pub fn sink_fn<E>(f: impl FnMut(&[u8]) -> Result<(), E>) -> impl VgaSink<Error = E> {
    VgaSinkFn { f }
}

struct VgaSinkFn<F> {
    f: F,
}

impl<E, F: FnMut(&[u8]) -> Result<(), E>> VgaSink for VgaSinkFn<F> {
    type Error = E;

    #[inline(always)]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), E> {
        (self.f)(bytes)
    }
}
