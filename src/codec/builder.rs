use std::marker::PhantomData;

use byteorder::{BigEndian, ByteOrder};

use super::header::HEADER_SIZE;
use super::{Class, Header, Name, Opcode, RRData, ResponseCode, Type};

pub enum Questions {}
pub enum Answers {}

pub trait MoveTo<T> {}
impl<T> MoveTo<T> for T {}

impl MoveTo<Answers> for Questions {}

/// Allows to build a DNS packet
///
/// Sections have to be filled in order: questions first, then answers.
/// Names are always written uncompressed.
pub struct Builder<S> {
    buf: Vec<u8>,
    _state: PhantomData<S>,
}

fn put_u16(buf: &mut Vec<u8>, value: u16) {
    let at = buf.len();
    buf.resize(at + 2, 0);
    BigEndian::write_u16(&mut buf[at..], value);
}

fn put_u32(buf: &mut Vec<u8>, value: u32) {
    let at = buf.len();
    buf.resize(at + 4, 0);
    BigEndian::write_u32(&mut buf[at..], value);
}

impl Builder<Questions> {
    /// Creates a new query
    ///
    /// Initially all sections are empty. You're expected to fill
    /// the questions section with `add_question`
    pub fn new_query(id: u16, recursion: bool) -> Builder<Questions> {
        Builder::with_header(Header {
            id,
            query: true,
            opcode: Opcode::StandardQuery,
            authoritative: false,
            truncated: false,
            recursion_desired: recursion,
            recursion_available: false,
            reserved: 0,
            response_code: ResponseCode::NoError,
            questions: 0,
            answers: 0,
            nameservers: 0,
            additional: 0,
        })
    }

    /// Creates the response a recursive resolver would send
    pub fn new_response(id: u16, response_code: ResponseCode) -> Builder<Questions> {
        Builder::with_header(Header {
            id,
            query: false,
            opcode: Opcode::StandardQuery,
            authoritative: false,
            truncated: false,
            recursion_desired: true,
            recursion_available: true,
            reserved: 0,
            response_code,
            questions: 0,
            answers: 0,
            nameservers: 0,
            additional: 0,
        })
    }

    fn with_header(head: Header) -> Builder<Questions> {
        let mut buf = Vec::with_capacity(512);
        buf.resize(HEADER_SIZE, 0);
        head.write(&mut buf[..HEADER_SIZE]);
        Builder {
            buf,
            _state: PhantomData,
        }
    }
}

impl<T> Builder<T> {
    /// Returns the final packet
    pub fn build(self) -> Vec<u8> {
        self.buf
    }

    pub fn move_to<U>(self) -> Builder<U>
    where
        T: MoveTo<U>,
    {
        Builder {
            buf: self.buf,
            _state: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        Header::question_count(&self.buf) == 0 && Header::answer_count(&self.buf) == 0
    }
}

impl<T: MoveTo<Questions>> Builder<T> {
    /// Adds a question to the packet
    ///
    /// # Panics
    ///
    /// * There are already 65535 questions in the buffer.
    pub fn add_question(self, qname: &Name, qtype: Type, qclass: Class) -> Builder<Questions> {
        let mut builder = self.move_to::<Questions>();

        qname.write_to(&mut builder.buf);
        put_u16(&mut builder.buf, qtype.into());
        put_u16(&mut builder.buf, qclass.into());
        Header::inc_questions(&mut builder.buf).expect("Too many questions");
        builder
    }
}

impl<T: MoveTo<Answers>> Builder<T> {
    /// Adds an answer record to the packet
    ///
    /// # Panics
    ///
    /// * There are already 65535 answers in the buffer.
    pub fn add_answer(self, name: &Name, cls: Class, ttl: u32, data: &RRData) -> Builder<Answers> {
        let mut builder = self.move_to::<Answers>();

        name.write_to(&mut builder.buf);
        put_u16(&mut builder.buf, data.typ().into());
        put_u16(&mut builder.buf, cls.into());
        put_u32(&mut builder.buf, ttl);
        put_u16(&mut builder.buf, data.len() as u16);
        data.write_to(&mut builder.buf);
        Header::inc_answers(&mut builder.buf).expect("Too many answers");

        builder
    }
}
