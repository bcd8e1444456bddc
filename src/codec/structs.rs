use super::{Class, Header, Name, RRData, Type};

/// Parsed DNS response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub header: Header,
    /// the question echoed back by the server
    pub question: Question,
    pub answers: Vec<ResourceRecord>,
}

/// A parsed chunk of data in the Query section of the packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub qname: Name,
    pub qtype: Type,
    pub qclass: Class,
}

/// A single DNS record
///
/// Everything is copied out of the packet, the record does not borrow
/// from the buffer it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Name,
    pub cls: Class,
    pub ttl: u32,
    pub data: RRData,
}

impl ResourceRecord {
    pub fn typ(&self) -> Type {
        self.data.typ()
    }

    /// The RDLENGTH of the record
    pub fn rdlength(&self) -> u16 {
        self.data.len() as u16
    }
}
