//! DNS message codec
//!
//! Encodes single-question queries and decodes the responses to them,
//! following compression pointers in names.

mod builder;
mod enums;
mod error;
mod header;
mod name;
mod parser;
mod rrdata;
mod structs;

pub use self::builder::{Answers, Builder, MoveTo, Questions};
pub use self::enums::{Class, Opcode, ResponseCode, Type};
pub use self::error::{EncodingError, Error, Malformed};
pub use self::header::{Header, HEADER_SIZE};
pub use self::name::{Name, MAX_LABEL_LEN, MAX_NAME_LEN, MAX_POINTER_HOPS};
pub use self::rrdata::RRData;
pub use self::structs::{Question, ResourceRecord, Response};
