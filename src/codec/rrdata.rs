use std::fmt;
use std::net::Ipv4Addr;

use super::{Malformed, Type};

/// The data of a resource record
///
/// Only address records are interpreted, anything else is kept as the raw
/// RDATA bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RRData {
    A(Ipv4Addr),
    Unknown { typ: Type, data: Vec<u8> },
}

impl RRData {
    pub fn typ(&self) -> Type {
        match *self {
            RRData::A(..) => Type::A,
            RRData::Unknown { typ, .. } => typ,
        }
    }

    /// Length of the data on the wire
    pub fn len(&self) -> usize {
        match *self {
            RRData::A(..) => 4,
            RRData::Unknown { ref data, .. } => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn write_to(&self, buf: &mut Vec<u8>) {
        match *self {
            RRData::A(ip) => buf.extend_from_slice(&ip.octets()),
            RRData::Unknown { ref data, .. } => buf.extend_from_slice(data),
        }
    }

    pub fn parse(typ: Type, rdata: &[u8]) -> Result<RRData, Malformed> {
        match typ {
            Type::A => {
                if rdata.len() != 4 {
                    return Err(Malformed::WrongRdataLength {
                        typ,
                        len: rdata.len(),
                    });
                }
                Ok(RRData::A(Ipv4Addr::new(
                    rdata[0], rdata[1], rdata[2], rdata[3],
                )))
            }
            typ => Ok(RRData::Unknown {
                typ,
                data: rdata.to_vec(),
            }),
        }
    }
}

/// Dotted quad for addresses, the RFC 3597 generic form otherwise
impl fmt::Display for RRData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RRData::A(ip) => write!(f, "{}", ip),
            RRData::Unknown { ref data, .. } => {
                write!(f, "\\# {}", data.len())?;
                if !data.is_empty() {
                    f.write_str(" ")?;
                    for byte in data {
                        write!(f, "{:02x}", byte)?;
                    }
                }
                Ok(())
            }
        }
    }
}
