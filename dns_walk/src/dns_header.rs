use crate::{
    constants,
    error::Error,
    wire::{self, Reader},
};

// https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1
const QR_BIT: u16 = 15;
const OPCODE_BIT: u16 = 11;
const AA_BIT: u16 = 10;
const TC_BIT: u16 = 9;
const RD_BIT: u16 = 8;
const RA_BIT: u16 = 7;
const Z_BIT: u16 = 4;

/// Named view of the 16-bit flags word.
///
/// Converting to `u16` and back is lossless; `opcode` and `rcode` keep
/// four bits, `z` three.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub response: bool,
    pub opcode: u8,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub z: u8,
    pub rcode: u8,
}

impl Flags {
    pub fn query(recursion_desired: bool) -> Self {
        Self {
            recursion_desired,
            ..Default::default()
        }
    }
}

impl From<Flags> for u16 {
    fn from(flags: Flags) -> Self {
        (flags.response as u16) << QR_BIT
            | (flags.opcode as u16 & 0b1111) << OPCODE_BIT
            | (flags.authoritative as u16) << AA_BIT
            | (flags.truncated as u16) << TC_BIT
            | (flags.recursion_desired as u16) << RD_BIT
            | (flags.recursion_available as u16) << RA_BIT
            | (flags.z as u16 & 0b111) << Z_BIT
            | (flags.rcode as u16 & 0b1111)
    }
}

impl From<u16> for Flags {
    fn from(value: u16) -> Self {
        let bit = |shift: u16| value >> shift & 1 == 1;
        Flags {
            response: bit(QR_BIT),
            opcode: (value >> OPCODE_BIT & 0b1111) as u8,
            authoritative: bit(AA_BIT),
            truncated: bit(TC_BIT),
            recursion_desired: bit(RD_BIT),
            recursion_available: bit(RA_BIT),
            z: (value >> Z_BIT & 0b111) as u8,
            rcode: (value & 0b1111) as u8,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DNSHeader {
    id: u16,
    flags: u16,
    num_questions: u16,
    num_answers: u16,
    num_authorities: u16,
    num_additionals: u16,
}

impl DNSHeader {
    /// Header of a query carrying a single question.
    pub fn new(id: u16, flags: Flags) -> Self {
        Self {
            id,
            flags: flags.into(),
            num_questions: 1,
            ..Default::default()
        }
    }

    pub fn id(&self) -> u16 {
        self.id
    }
    pub fn flags(&self) -> Flags {
        self.flags.into()
    }
    pub fn raw_flags(&self) -> u16 {
        self.flags
    }
    pub fn num_questions(&self) -> u16 {
        self.num_questions
    }
    pub fn num_answers(&self) -> u16 {
        self.num_answers
    }
    pub fn num_authorities(&self) -> u16 {
        self.num_authorities
    }
    pub fn num_additionals(&self) -> u16 {
        self.num_additionals
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags.into();
    }

    pub fn set_counts(
        &mut self,
        questions: u16,
        answers: u16,
        authorities: u16,
        additionals: u16,
    ) {
        self.num_questions = questions;
        self.num_answers = answers;
        self.num_authorities = authorities;
        self.num_additionals = additionals;
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        [
            self.id.to_be_bytes(),
            self.flags.to_be_bytes(),
            self.num_questions.to_be_bytes(),
            self.num_answers.to_be_bytes(),
            self.num_authorities.to_be_bytes(),
            self.num_additionals.to_be_bytes(),
        ]
        .concat()
    }

    pub fn parse(reader: &mut Reader) -> Result<Self, Error> {
        if wire::remaining(reader) < constants::DNS_HEADER_SIZE {
            return Err(Error::HeaderTooShort);
        }
        // Each of the 6 fields is a 2-byte integer, so there are 12 bytes in all to read.
        Ok(DNSHeader {
            id: wire::read_u16(reader)?,
            flags: wire::read_u16(reader)?,
            num_questions: wire::read_u16(reader)?,
            num_answers: wire::read_u16(reader)?,
            num_authorities: wire::read_u16(reader)?,
            num_additionals: wire::read_u16(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_to_bytes() {
        let header = DNSHeader::new(0x1314, Flags::default());

        assert_eq!(
            header.to_bytes(),
            vec![0x13, 0x14, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_round_trip() {
        let mut header = DNSHeader::new(0xbeef, Flags::from(0b1010_1101_1010_0011_u16));
        header.set_counts(1, 2, 3, 4);

        let bytes = header.to_bytes();
        let parsed = DNSHeader::parse(&mut Cursor::new(&bytes[..])).unwrap();

        assert_eq!(parsed, header);
        assert_eq!(parsed.raw_flags(), 0b1010_1101_1010_0011);
        assert_eq!(parsed.num_additionals(), 4);
    }

    #[test]
    fn test_flags_round_trip() {
        for value in [0u16, 0x0100, 0x8180, 0x8583, 0xffff, 0x7a5c] {
            assert_eq!(u16::from(Flags::from(value)), value);
        }

        let flags = Flags {
            response: true,
            opcode: 2,
            authoritative: true,
            truncated: false,
            recursion_desired: true,
            recursion_available: true,
            z: 5,
            rcode: 3,
        };
        assert_eq!(Flags::from(u16::from(flags)), flags);
    }

    #[test]
    fn test_recursion_desired_bit() {
        assert_eq!(u16::from(Flags::query(true)), 0b1_0000_0000);
        assert_eq!(u16::from(Flags::query(false)), 0);
    }

    #[test]
    fn test_response_bit() {
        let flags = Flags {
            response: true,
            ..Default::default()
        };
        assert_eq!(u16::from(flags), 1 << 15);
    }

    #[test]
    fn test_parse_short_header() {
        let bytes = [0u8; 11];
        assert!(matches!(
            DNSHeader::parse(&mut Cursor::new(&bytes[..])),
            Err(Error::HeaderTooShort)
        ));
    }
}
