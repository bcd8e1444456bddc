use std::fmt;
use std::str::{from_utf8, FromStr};

use byteorder::{BigEndian, ByteOrder};

use super::{EncodingError, Error, Malformed};

pub const MAX_LABEL_LEN: usize = 63;
/// Upper bound on the encoded size of a name, terminating zero included
pub const MAX_NAME_LEN: usize = 255;
/// Compression pointers followed before a name is declared malformed
pub const MAX_POINTER_HOPS: usize = 128;

const POINTER_MASK: u8 = 0b1100_0000;

/// A domain name as a sequence of labels
///
/// Names decoded from a packet own their labels, so they stay valid after
/// the packet buffer is gone. Use `.to_string()` for the dotted form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    labels: Vec<String>,
}

impl Name {
    /// Decodes the name starting at `offset` of `data`, the whole message
    ///
    /// Compression pointers are resolved against `data`. The returned
    /// offset is the first byte after the name where it was found, so a
    /// name ending in a pointer advances by exactly two bytes past the
    /// last label before it.
    pub fn scan(data: &[u8], offset: usize) -> Result<(Name, usize), Error> {
        let mut labels = Vec::new();
        let mut wire_len = 1;
        let mut hops = 0;
        let mut end = None;
        let mut pos = offset;
        loop {
            let byte = *data.get(pos).ok_or(Malformed::NameOutOfBounds(pos))?;
            if byte == 0 {
                return Ok((Name { labels }, end.unwrap_or(pos + 1)));
            }
            match byte & POINTER_MASK {
                POINTER_MASK => {
                    if data.len() < pos + 2 {
                        return Err(Malformed::NameOutOfBounds(pos).into());
                    }
                    let target = (BigEndian::read_u16(&data[pos..pos + 2])
                        & !0b1100_0000_0000_0000) as usize;
                    if target >= pos {
                        return Err(Malformed::ForwardPointer {
                            offset: pos,
                            target,
                        }
                        .into());
                    }
                    hops += 1;
                    if hops > MAX_POINTER_HOPS {
                        return Err(Malformed::TooManyPointers(MAX_POINTER_HOPS).into());
                    }
                    if end.is_none() {
                        end = Some(pos + 2);
                    }
                    pos = target;
                }
                0 => {
                    let start = pos + 1;
                    let label_end = start + byte as usize;
                    if data.len() < label_end {
                        return Err(Malformed::NameOutOfBounds(pos).into());
                    }
                    wire_len += 1 + byte as usize;
                    if wire_len > MAX_NAME_LEN {
                        return Err(Malformed::NameTooLong.into());
                    }
                    let label = from_utf8(&data[start..label_end])
                        .map_err(|_| Malformed::LabelIsNotUtf8(pos))?;
                    labels.push(label.to_owned());
                    pos = label_end;
                }
                _ => return Err(Malformed::UnknownLabelFormat { offset: pos, byte }.into()),
            }
        }
    }

    /// Compares names the way DNS does, ignoring ASCII case
    pub fn matches(&self, other: &Name) -> bool {
        self.labels.len() == other.labels.len()
            && self
                .labels
                .iter()
                .zip(&other.labels)
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }

    /// True for the root name, which has no labels
    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Size of the uncompressed wire form
    pub fn wire_len(&self) -> usize {
        self.labels.iter().map(|label| label.len() + 1).sum::<usize>() + 1
    }

    /// Appends the uncompressed wire form to `buf`
    pub fn write_to(&self, buf: &mut Vec<u8>) {
        for label in &self.labels {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0);
    }
}

impl FromStr for Name {
    type Err = Error;

    /// Validates a dotted name, one trailing dot allowed
    fn from_str(name: &str) -> Result<Name, Error> {
        let name = name.strip_suffix('.').unwrap_or(name);
        if name.is_empty() {
            return Err(EncodingError::EmptyName.into());
        }
        let mut labels = Vec::new();
        for label in name.split('.') {
            if label.is_empty() {
                return Err(EncodingError::EmptyLabel.into());
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(EncodingError::LabelTooLong(label.len()).into());
            }
            labels.push(label.to_owned());
        }
        let name = Name { labels };
        if name.wire_len() > MAX_NAME_LEN {
            return Err(EncodingError::NameTooLong(name.wire_len()).into());
        }
        Ok(name)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if self.labels.is_empty() {
            return fmt.write_str(".");
        }
        for (i, label) in self.labels.iter().enumerate() {
            if i != 0 {
                fmt.write_str(".")?;
            }
            fmt.write_str(label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::super::{EncodingError, Error, Malformed};
    use super::{Name, MAX_POINTER_HOPS};

    fn encode(name: &str) -> Vec<u8> {
        let mut buf = Vec::new();
        name.parse::<Name>().unwrap().write_to(&mut buf);
        buf
    }

    #[test]
    fn encode_example() {
        assert_eq!(&encode("example.com")[..], &b"\x07example\x03com\x00"[..]);
        assert_eq!(encode("example.com."), encode("example.com"));
    }

    #[test]
    fn scan_what_was_written() {
        let long = "a".repeat(63);
        for name in &["example.com", "a.b.c.d.e", "_xmpp-server._tcp.gmail.com", long.as_str()] {
            let buf = encode(name);
            let (parsed, end) = Name::scan(&buf, 0).unwrap();
            assert_eq!(parsed.to_string(), *name);
            assert_eq!(end, buf.len());
        }
    }

    #[test]
    fn reject_bad_names() {
        let long = "a".repeat(64);
        assert_eq!(
            "".parse::<Name>(),
            Err(Error::Encoding(EncodingError::EmptyName))
        );
        assert_eq!(
            "example..com".parse::<Name>(),
            Err(Error::Encoding(EncodingError::EmptyLabel))
        );
        assert_eq!(
            format!("{}.com", long).parse::<Name>(),
            Err(Error::Encoding(EncodingError::LabelTooLong(64)))
        );
        let huge = vec!["a".repeat(63); 4].join(".");
        assert_eq!(
            huge.parse::<Name>(),
            Err(Error::Encoding(EncodingError::NameTooLong(257)))
        );
    }

    #[test]
    fn case_insensitive_match() {
        let name = "Example.COM".parse::<Name>().unwrap();
        assert!(name.matches(&"example.com".parse().unwrap()));
        assert!(!name.matches(&"www.example.com".parse().unwrap()));
        assert!(!name.matches(&"example.org".parse().unwrap()));
        assert_ne!(name, "example.com".parse().unwrap());
    }

    #[test]
    fn follow_pointers() {
        let data = b"\x07example\x03com\x00\x03www\xc0\x00\xc0\x0d";
        let (direct, end) = Name::scan(data, 0).unwrap();
        assert_eq!(direct.to_string(), "example.com");
        assert_eq!(end, 13);

        let (www, end) = Name::scan(data, 13).unwrap();
        assert_eq!(www.to_string(), "www.example.com");
        assert_eq!(end, 19);

        let (whole, end) = Name::scan(data, 19).unwrap();
        assert_eq!(whole.to_string(), "www.example.com");
        assert_eq!(end, 21);
    }

    #[test]
    fn pointer_to_same_name() {
        let data = b"\x07example\x03com\x00\xc0\x00";
        assert_eq!(Name::scan(data, 0).unwrap().0, Name::scan(data, 13).unwrap().0);
    }

    #[test]
    fn self_pointer() {
        let data = b"\x00\x00\xc0\x02";
        assert_eq!(
            Name::scan(data, 2),
            Err(Error::Malformed(Malformed::ForwardPointer {
                offset: 2,
                target: 2
            }))
        );
    }

    #[test]
    fn forward_pointer() {
        let data = b"\xc0\x02\x01a\x00";
        assert_eq!(
            Name::scan(data, 0),
            Err(Error::Malformed(Malformed::ForwardPointer {
                offset: 0,
                target: 2
            }))
        );
    }

    #[test]
    fn label_loop_through_pointer() {
        // "a" followed by a pointer back to itself
        let data = b"\x01a\xc0\x00";
        match Name::scan(data, 0) {
            Err(Error::Malformed(_)) => (),
            other => panic!("expected malformed name, got {:?}", other),
        }
    }

    #[test]
    fn pointer_chain_limit() {
        let mut data = vec![0u8, 0];
        for i in 1..=MAX_POINTER_HOPS + 2 {
            let target = 2 * (i - 1);
            data.push(0xc0 | (target >> 8) as u8);
            data.push(target as u8);
        }
        let (root, end) = Name::scan(&data, 2 * MAX_POINTER_HOPS).unwrap();
        assert!(root.is_root());
        assert_eq!(end, 2 * MAX_POINTER_HOPS + 2);

        let last = 2 * (MAX_POINTER_HOPS + 2);
        assert_eq!(
            Name::scan(&data, last),
            Err(Error::Malformed(Malformed::TooManyPointers(MAX_POINTER_HOPS)))
        );
    }

    #[test]
    fn out_of_bounds() {
        assert_eq!(
            Name::scan(b"\x07exam", 0),
            Err(Error::Malformed(Malformed::NameOutOfBounds(0)))
        );
        assert_eq!(
            Name::scan(b"\x03com", 0),
            Err(Error::Malformed(Malformed::NameOutOfBounds(4)))
        );
        assert_eq!(
            Name::scan(b"\x00\xc0", 1),
            Err(Error::Malformed(Malformed::NameOutOfBounds(1)))
        );
    }

    #[test]
    fn unknown_label_format() {
        assert_eq!(
            Name::scan(b"\x41abc", 0),
            Err(Error::Malformed(Malformed::UnknownLabelFormat {
                offset: 0,
                byte: 0x41
            }))
        );
    }

    #[test]
    fn non_utf8_label() {
        assert_eq!(
            Name::scan(b"\x02\xff\xfe\x00", 0),
            Err(Error::Malformed(Malformed::LabelIsNotUtf8(0)))
        );
    }
}
