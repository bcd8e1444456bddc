use byteorder::{BigEndian, ByteOrder};

use super::{Error, Opcode, ResponseCode};

mod flag {
    pub const QUERY: u16 = 0b1000_0000_0000_0000;
    pub const OPCODE_MASK: u16 = 0b0111_1000_0000_0000;
    pub const AUTHORITATIVE: u16 = 0b0000_0100_0000_0000;
    pub const TRUNCATED: u16 = 0b0000_0010_0000_0000;
    pub const RECURSION_DESIRED: u16 = 0b0000_0001_0000_0000;
    pub const RECURSION_AVAILABLE: u16 = 0b0000_0000_1000_0000;
    pub const RESERVED_MASK: u16 = 0b0000_0000_0111_0000;
    pub const RESPONSE_CODE_MASK: u16 = 0b0000_0000_0000_1111;
}

/// Size of the fixed message header
pub const HEADER_SIZE: usize = 12;

/// Represents parsed header of the packet
///
/// `query` is true for questions and false for responses, the inverse of
/// the QR bit on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub query: bool,
    pub opcode: Opcode,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    /// the three Z bits, carried but not interpreted
    pub reserved: u8,
    pub response_code: ResponseCode,
    pub questions: u16,
    pub answers: u16,
    pub nameservers: u16,
    pub additional: u16,
}

impl Header {
    /// Decodes the header found at `offset`, returning it with the offset
    /// of the first byte after it
    pub fn parse(data: &[u8], offset: usize) -> Result<(Header, usize), Error> {
        let end = offset + HEADER_SIZE;
        if data.len() < end {
            return Err(Error::truncated(offset, HEADER_SIZE));
        }
        let data = &data[offset..end];
        let mut header = Header::from_flags(BigEndian::read_u16(&data[2..4]));
        header.id = BigEndian::read_u16(&data[..2]);
        header.questions = BigEndian::read_u16(&data[4..6]);
        header.answers = BigEndian::read_u16(&data[6..8]);
        header.nameservers = BigEndian::read_u16(&data[8..10]);
        header.additional = BigEndian::read_u16(&data[10..12]);
        Ok((header, end))
    }

    fn from_flags(flags: u16) -> Header {
        Header {
            id: 0,
            query: flags & flag::QUERY == 0,
            opcode: Opcode::from(((flags & flag::OPCODE_MASK) >> 11) as u8),
            authoritative: flags & flag::AUTHORITATIVE != 0,
            truncated: flags & flag::TRUNCATED != 0,
            recursion_desired: flags & flag::RECURSION_DESIRED != 0,
            recursion_available: flags & flag::RECURSION_AVAILABLE != 0,
            reserved: ((flags & flag::RESERVED_MASK) >> 4) as u8,
            response_code: ResponseCode::from((flags & flag::RESPONSE_CODE_MASK) as u8),
            questions: 0,
            answers: 0,
            nameservers: 0,
            additional: 0,
        }
    }

    /// The packed 16-bit flags word
    pub fn flags(&self) -> u16 {
        let mut flags = 0u16;
        if !self.query {
            flags |= flag::QUERY;
        }
        flags |= (u16::from(u8::from(self.opcode)) << 11) & flag::OPCODE_MASK;
        if self.authoritative {
            flags |= flag::AUTHORITATIVE;
        }
        if self.truncated {
            flags |= flag::TRUNCATED;
        }
        if self.recursion_desired {
            flags |= flag::RECURSION_DESIRED;
        }
        if self.recursion_available {
            flags |= flag::RECURSION_AVAILABLE;
        }
        flags |= (u16::from(self.reserved) << 4) & flag::RESERVED_MASK;
        flags |= u16::from(u8::from(self.response_code)) & flag::RESPONSE_CODE_MASK;
        flags
    }

    /// Write a header to a buffer slice
    ///
    /// # Panics
    ///
    /// When buffer size is not exactly 12 bytes
    pub fn write(&self, data: &mut [u8]) {
        assert_eq!(data.len(), HEADER_SIZE);

        BigEndian::write_u16(&mut data[..2], self.id);
        BigEndian::write_u16(&mut data[2..4], self.flags());
        BigEndian::write_u16(&mut data[4..6], self.questions);
        BigEndian::write_u16(&mut data[6..8], self.answers);
        BigEndian::write_u16(&mut data[8..10], self.nameservers);
        BigEndian::write_u16(&mut data[10..12], self.additional);
    }

    /// The QDCOUNT of an encoded header
    ///
    /// # Panics
    ///
    /// When `data` is shorter than a header
    pub(crate) fn question_count(data: &[u8]) -> u16 {
        BigEndian::read_u16(&data[4..6])
    }

    pub(crate) fn answer_count(data: &[u8]) -> u16 {
        BigEndian::read_u16(&data[6..8])
    }

    /// Increment the number of questions, returning `None` on overflow
    ///
    /// # Panics
    ///
    /// When `data` is shorter than a header
    pub(crate) fn inc_questions(data: &mut [u8]) -> Option<u16> {
        Header::inc_count(&mut data[4..6])
    }

    /// Increment the number of answers, returning `None` on overflow
    pub(crate) fn inc_answers(data: &mut [u8]) -> Option<u16> {
        Header::inc_count(&mut data[6..8])
    }

    fn inc_count(field: &mut [u8]) -> Option<u16> {
        let count = BigEndian::read_u16(field).checked_add(1)?;
        BigEndian::write_u16(field, count);
        Some(count)
    }
}
