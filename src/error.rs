use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("element {0} doesn't exist")]
    NotFound(i32),

    #[error("iterator reached the end")]
    OutOfRange,

    #[error("operation on {0}")]
    InvalidOperation(Mismatch),
}

/// Why two iterators can't be compared or assigned to each other
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    #[error("different iteration orders")]
    Order,

    #[error("different containers")]
    Container,
}

impl From<Mismatch> for Error {
    fn from(value: Mismatch) -> Self {
        Error::InvalidOperation(value)
    }
}
