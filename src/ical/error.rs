use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IcalError {
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),
}
