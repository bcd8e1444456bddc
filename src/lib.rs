//! A DNS stub client
//!
//! The [`codec`] module builds A/IN queries and parses the responses,
//! [`Client`] carries them over UDP to a recursive resolver.
//!
//! ```
//! use rand::rngs::mock::StepRng;
//!
//! let query = dnsq::build_query("example.com", &mut StepRng::new(1573, 0)).unwrap();
//! assert_eq!(&query[12..], b"\x07example\x03com\x00\x00\x01\x00\x01");
//! ```

use log::debug;
use rand::Rng;

mod address_family;
mod client;
pub mod codec;

pub use crate::client::{Client, LookupError, MAX_UDP_PAYLOAD};
pub use crate::codec::{Error, Name, Question, RRData, ResourceRecord, Response};

use crate::codec::{Builder, Class, Type};

/// The port resolvers listen on
pub const DNS_PORT: u16 = 53;

/// Builds a recursion-desired A/IN query for `domain`
///
/// The transaction id is drawn from `rng`.
pub fn build_query<R: Rng>(domain: &str, rng: &mut R) -> Result<Vec<u8>, Error> {
    let name = domain.parse::<Name>()?;
    let id = rng.gen::<u16>();
    debug!("building query {} for {}", id, name);
    Ok(Builder::new_query(id, true)
        .add_question(&name, Type::A, Class::IN)
        .build())
}

/// Parses the response to a query made with [`build_query`]
pub fn parse_response(data: &[u8]) -> Result<Response, Error> {
    Response::parse(data)
}

#[cfg(test)]
mod test {
    use rand::rngs::mock::StepRng;

    use super::codec::{Builder, Class, EncodingError, Header, ResponseCode, Type};
    use super::{build_query, parse_response, Error, Name, RRData};

    #[test]
    fn query_for_example() {
        let query = build_query("example.com", &mut StepRng::new(0xbeef, 0)).unwrap();
        assert_eq!(
            &query[..],
            &b"\xbe\xef\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
               \x07example\x03com\x00\x00\x01\x00\x01"[..]
        );
        let (header, _) = Header::parse(&query, 0).unwrap();
        assert!(header.query);
        assert!(header.recursion_desired);
        assert_eq!(header.questions, 1);
        assert_eq!(
            (header.answers, header.nameservers, header.additional),
            (0, 0, 0)
        );
    }

    #[test]
    fn ids_come_from_the_rng() {
        let mut rng = StepRng::new(1, 1);
        let first = build_query("example.com", &mut rng).unwrap();
        let second = build_query("example.com", &mut rng).unwrap();
        assert_eq!(&first[..2], b"\x00\x01");
        assert_eq!(&second[..2], b"\x00\x02");
    }

    #[test]
    fn query_for_invalid_domain() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(
            build_query("", &mut rng),
            Err(Error::Encoding(EncodingError::EmptyName))
        );
        let long = format!("{}.com", "x".repeat(64));
        assert_eq!(
            build_query(&long, &mut rng),
            Err(Error::Encoding(EncodingError::LabelTooLong(64)))
        );
    }

    #[test]
    fn answer_to_query() {
        let query = build_query("example.com", &mut StepRng::new(42, 0)).unwrap();
        let (header, _) = Header::parse(&query, 0).unwrap();

        let name = "example.com".parse::<Name>().unwrap();
        let mut response = Builder::new_response(header.id, ResponseCode::NoError)
            .add_question(&name, Type::A, Class::IN)
            .build();
        // a single answer pointing back at the question name
        response[7] = 1;
        response.extend_from_slice(b"\xc0\x0c\x00\x01\x00\x01\x00\x00\x01\x2c\x00\x04]\xb8\xd8\x22");

        let parsed = parse_response(&response).unwrap();
        assert_eq!(parsed.header.id, 42);
        assert_eq!(parsed.question.qname, name);
        assert_eq!(parsed.answers.len(), 1);
        let answer = &parsed.answers[0];
        assert_eq!(answer.name, name);
        assert_eq!(answer.typ().to_string(), "A");
        assert_eq!(answer.ttl, 300);
        assert_eq!(answer.data, RRData::A([93, 184, 216, 34].into()));
        assert_eq!(answer.data.to_string(), "93.184.216.34");
    }
}
