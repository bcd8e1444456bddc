use byteorder::{BigEndian, ByteOrder};
use log::trace;

use super::{
    Class, Error, Header, Malformed, Name, Question, RRData, ResourceRecord, Response, Type,
};

fn read_u16(data: &[u8], offset: usize) -> Result<u16, Error> {
    if data.len() < offset + 2 {
        return Err(Error::truncated(offset, 2));
    }
    Ok(BigEndian::read_u16(&data[offset..offset + 2]))
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32, Error> {
    if data.len() < offset + 4 {
        return Err(Error::truncated(offset, 4));
    }
    Ok(BigEndian::read_u32(&data[offset..offset + 4]))
}

impl Response {
    /// Parse a full response to a single-question query
    ///
    /// Every answer the header announces is decoded. Authority and
    /// additional sections are left alone.
    pub fn parse(data: &[u8]) -> Result<Response, Error> {
        let (header, offset) = Header::parse(data, 0)?;
        if header.questions != 1 {
            return Err(Malformed::UnexpectedQuestionCount(header.questions).into());
        }
        let (question, mut offset) = Question::parse(data, offset)?;
        trace!(
            "question: {} {} {}",
            question.qname,
            question.qtype,
            question.qclass
        );

        let mut answers = Vec::new();
        for _ in 0..header.answers {
            let (record, next) = ResourceRecord::parse(data, offset)?;
            answers.push(record);
            offset = next;
        }

        Ok(Response {
            header,
            question,
            answers,
        })
    }
}

impl Question {
    /// Decodes the question at `offset`, returning it with the offset
    /// that follows it
    pub fn parse(data: &[u8], offset: usize) -> Result<(Question, usize), Error> {
        let (qname, offset) = Name::scan(data, offset)?;
        let qtype = read_u16(data, offset)?.into();
        let qclass = read_u16(data, offset + 2)?.into();
        Ok((
            Question {
                qname,
                qtype,
                qclass,
            },
            offset + 4,
        ))
    }
}

impl ResourceRecord {
    /// Decodes the record at `offset`, returning it with the offset that
    /// follows its RDATA
    pub fn parse(data: &[u8], offset: usize) -> Result<(ResourceRecord, usize), Error> {
        let (name, mut offset) = Name::scan(data, offset)?;
        let typ = Type::from(read_u16(data, offset)?);
        let cls = Class::from(read_u16(data, offset + 2)?);
        let ttl = read_u32(data, offset + 4)?;
        let rdlength = read_u16(data, offset + 8)? as usize;
        offset += 10;
        if data.len() < offset + rdlength {
            return Err(Error::truncated(offset, rdlength));
        }
        let data = RRData::parse(typ, &data[offset..offset + rdlength])?;
        trace!("answer: {} {} {} {} {}", name, typ, cls, ttl, data);
        Ok((
            ResourceRecord {
                name,
                cls,
                ttl,
                data,
            },
            offset + rdlength,
        ))
    }
}
