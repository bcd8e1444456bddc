use thiserror::Error;

use super::Type;

/// Error building or parsing a DNS message
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("cannot encode domain name: {0}")]
    Encoding(#[from] EncodingError),
    #[error("message truncated: {needed} bytes needed at offset {offset}")]
    Truncated { offset: usize, needed: usize },
    #[error("malformed message: {0}")]
    Malformed(#[from] Malformed),
}

impl Error {
    pub(crate) fn truncated(offset: usize, needed: usize) -> Error {
        Error::Truncated { offset, needed }
    }
}

/// Why a domain name was rejected by the encoder
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("domain name is empty")]
    EmptyName,
    #[error("domain name has an empty label")]
    EmptyLabel,
    #[error("label is {0} bytes long, at most 63 allowed")]
    LabelTooLong(usize),
    #[error("encoded name is {0} bytes long, at most 255 allowed")]
    NameTooLong(usize),
}

/// Structurally invalid message content
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Malformed {
    #[error("compression pointer at {offset} refers to {target}, which is not an earlier offset")]
    ForwardPointer { offset: usize, target: usize },
    #[error("more than {0} compression pointers followed")]
    TooManyPointers(usize),
    #[error("name at {0} runs past the end of the message")]
    NameOutOfBounds(usize),
    #[error("label at {offset} has unknown label format 0x{byte:02x}")]
    UnknownLabelFormat { offset: usize, byte: u8 },
    #[error("invalid characters encountered while reading label at {0}")]
    LabelIsNotUtf8(usize),
    #[error("decoded name exceeds 255 bytes")]
    NameTooLong,
    #[error("{len} bytes of RDATA is wrong for a {typ} record")]
    WrongRdataLength { typ: Type, len: usize },
    #[error("expected exactly one question, header declares {0}")]
    UnexpectedQuestionCount(u16),
}
