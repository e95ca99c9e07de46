use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("failed to append to booking log: {0}")]
    LogWrite(#[source] io::Error),

    #[error("failed to read booking log: {0}")]
    LogRead(#[source] io::Error),
}
