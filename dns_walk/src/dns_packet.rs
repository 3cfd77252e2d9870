use std::io::Cursor;

use crate::{
    dns_header::DNSHeader,
    dns_question::DNSQuestion,
    dns_record::DNSRecord,
    error::Error,
    wire::Reader,
};

/// A parsed DNS message.
///
/// Each section holds exactly as many entries as the header announced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DNSPacket {
    header: DNSHeader,
    questions: Vec<DNSQuestion>,
    answers: Vec<DNSRecord>,
    authorities: Vec<DNSRecord>,
    additionals: Vec<DNSRecord>,
}

impl DNSPacket {
    pub fn header(&self) -> &DNSHeader {
        &self.header
    }
    pub fn questions(&self) -> &[DNSQuestion] {
        &self.questions
    }
    pub fn answers(&self) -> &[DNSRecord] {
        &self.answers
    }
    pub fn authorities(&self) -> &[DNSRecord] {
        &self.authorities
    }
    pub fn additionals(&self) -> &[DNSRecord] {
        &self.additionals
    }

    pub fn parse(data: &[u8]) -> Result<Self, Error> {
        DNSPacket::try_from(data)
    }
}

fn parse_records(reader: &mut Reader, count: u16) -> Result<Vec<DNSRecord>, Error> {
    (0..count).map(|_| DNSRecord::parse(reader)).collect()
}

impl TryFrom<&[u8]> for DNSPacket {
    type Error = Error;

    fn try_from(packet: &[u8]) -> Result<Self, Self::Error> {
        // One cursor for the whole message: compression pointers may refer
        // to any earlier section.
        let mut reader = Cursor::new(packet);
        let header = DNSHeader::parse(&mut reader)?;

        let questions = (0..header.num_questions())
            .map(|_| DNSQuestion::parse(&mut reader))
            .collect::<Result<Vec<_>, _>>()?;
        let answers = parse_records(&mut reader, header.num_answers())?;
        let authorities = parse_records(&mut reader, header.num_authorities())?;
        let additionals = parse_records(&mut reader, header.num_additionals())?;

        Ok(DNSPacket {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }
}
