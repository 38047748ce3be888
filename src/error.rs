/// Errors returned by [`crate::VgaTerminal`] operations.
///
/// `E` is the error type of the [`crate::VgaSink`] the terminal writes to.
/// Nothing is retried; whether a failed write can be repeated is up to the
/// transport behind the sink.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum VgaError<E> {
    /// The sink refused some or all of the bytes for a command.
    #[error("terminal sink rejected write: {0}")]
    SinkWriteFailure(E),
}

impl<E> VgaError<E> {
    /// Returns the underlying sink error.
    pub fn into_sink_error(self) -> E {
        match self {
            Self::SinkWriteFailure(err) => err,
        }
    }
}
