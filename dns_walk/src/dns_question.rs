use std::io::Cursor;

use crate::{
    class::Class,
    error::Error,
    name::{decode_labels, decode_name, encode_labels},
    record_type::RecordType,
    wire::{self, Reader},
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DNSQuestion {
    /// Label sequence as it goes on the wire, uncompressed.
    name: Vec<u8>,
    type_: RecordType,
    class: Class,
}

impl DNSQuestion {
    pub fn new(name: Vec<u8>, type_: RecordType, class: Class) -> Self {
        Self { name, type_, class }
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }
    pub fn type_(&self) -> RecordType {
        self.type_
    }
    pub fn class(&self) -> Class {
        self.class
    }

    /// The question's name as a dotted string.
    pub fn domain(&self) -> Result<String, Error> {
        decode_name(&mut Cursor::new(&self.name[..]))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        [
            self.name.clone(),
            u16::from(self.type_).to_be_bytes().to_vec(),
            u16::from(self.class).to_be_bytes().to_vec(),
        ]
        .concat()
    }

    pub fn parse(reader: &mut Reader) -> Result<Self, Error> {
        let labels = decode_labels(reader)?;
        Ok(DNSQuestion {
            name: encode_labels(&labels),
            type_: wire::read_u16(reader)?.into(),
            class: wire::read_u16(reader)?.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::encode_dns_name;

    #[test]
    fn test_to_bytes() {
        let question =
            DNSQuestion::new(encode_dns_name("www.google.com"), RecordType::A, Class::In);

        let mut expected = b"\x03www\x06google\x03com\x00".to_vec();
        expected.extend_from_slice(&[0, 1, 0, 1]);
        assert_eq!(question.to_bytes(), expected);
    }

    #[test]
    fn test_parse_compressed_question() {
        // header-sized padding, "example.com", then a question naming it by pointer
        let mut data = vec![0u8; 12];
        data.extend(encode_dns_name("example.com"));
        data.extend_from_slice(b"\xc0\x0c\x00\x1c\x00\x01");

        let mut reader = Cursor::new(&data[..]);
        reader.set_position(25);
        let question = DNSQuestion::parse(&mut reader).unwrap();

        assert_eq!(question.domain().unwrap(), "example.com");
        assert_eq!(question.name(), &encode_dns_name("example.com")[..]);
        assert_eq!(question.type_(), RecordType::AAAA);
        assert_eq!(question.class(), Class::In);
        assert_eq!(reader.position(), data.len() as u64);
    }

    #[test]
    fn test_parse_truncated_question() {
        let mut data = encode_dns_name("example.com");
        data.push(0);

        assert!(matches!(
            DNSQuestion::parse(&mut Cursor::new(&data[..])),
            Err(Error::UnexpectedEof)
        ));
    }

    #[test]
    fn test_parse_root_question() {
        // ". NS IN", as sent when priming from a root server
        let data = [0, 0, 2, 0, 1];
        let mut reader = Cursor::new(&data[..]);

        let question = DNSQuestion::parse(&mut reader).unwrap();
        assert_eq!(question.name(), &[0u8][..]);
        assert_eq!(question.domain().unwrap(), "");
        assert_eq!(question.type_(), RecordType::NS);
        assert_eq!(question.to_bytes(), data.to_vec());
    }

    #[test]
    fn test_parse_keeps_label_bytes() {
        let data = b"\x03a.b\x02\xfe\xff\x00\x00\x01\x00\x01";
        let mut reader = Cursor::new(&data[..]);

        let question = DNSQuestion::parse(&mut reader).unwrap();
        assert_eq!(question.name(), &data[..8]);
        assert_eq!(question.to_bytes(), data.to_vec());
    }
}
