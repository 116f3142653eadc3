//! Error returned by [`Lcd`](crate::lcd::Lcd) operations

use core::fmt;

/// The only way an operation fails: the transport didn't deliver a write
///
/// `E` is the error type of the [`ByteTransport`](crate::sender::ByteTransport) in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus write failed (NACK, arbitration loss, timeout, ...)
    Transport(E),
}

impl<E> Error<E> {
    /// The underlying transport error
    pub fn into_inner(self) -> E {
        match self {
            Error::Transport(e) => e,
        }
    }
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Transport(e)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "transport write failed: {:?}", e),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
