//! Response builders and a scripted transport for unit tests.

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    io,
    net::{Ipv4Addr, SocketAddrV4},
};

use byteorder::{BigEndian, WriteBytesExt};

use crate::{
    class::Class,
    dns_header::{DNSHeader, Flags},
    dns_packet::DNSPacket,
    dns_question::DNSQuestion,
    error::Error,
    name::encode_dns_name,
    record_type::RecordType,
    transport::Transport,
};

pub(crate) struct TestRecord {
    name: String,
    type_: RecordType,
    rdata: Vec<u8>,
}

pub(crate) fn a_record(name: &str, ip: [u8; 4]) -> TestRecord {
    TestRecord {
        name: name.to_string(),
        type_: RecordType::A,
        rdata: ip.to_vec(),
    }
}

pub(crate) fn ns_record(name: &str, name_server: &str) -> TestRecord {
    TestRecord {
        name: name.to_string(),
        type_: RecordType::NS,
        rdata: encode_dns_name(name_server),
    }
}

fn write_record(buf: &mut Vec<u8>, record: &TestRecord) {
    buf.extend(encode_dns_name(&record.name));
    buf.write_u16::<BigEndian>(record.type_.into()).unwrap();
    buf.write_u16::<BigEndian>(Class::In.into()).unwrap();
    buf.write_u32::<BigEndian>(300).unwrap();
    buf.write_u16::<BigEndian>(record.rdata.len() as u16).unwrap();
    buf.extend_from_slice(&record.rdata);
}

/// Serializes a response to a single question, without compression.
pub(crate) fn response(
    id: u16,
    domain: &str,
    type_: RecordType,
    answers: &[TestRecord],
    authorities: &[TestRecord],
    additionals: &[TestRecord],
) -> Vec<u8> {
    let mut header = DNSHeader::new(
        id,
        Flags {
            response: true,
            ..Default::default()
        },
    );
    header.set_counts(
        1,
        answers.len() as u16,
        authorities.len() as u16,
        additionals.len() as u16,
    );

    let mut buf = header.to_bytes();
    buf.extend(DNSQuestion::new(encode_dns_name(domain), type_, Class::In).to_bytes());
    for record in answers.iter().chain(authorities).chain(additionals) {
        write_record(&mut buf, record);
    }
    buf
}

/// Answers from a per-server script and remembers every question asked.
///
/// Responses take the id of the query they answer.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: RefCell<HashMap<Ipv4Addr, VecDeque<Vec<u8>>>>,
    queries: RefCell<Vec<(Ipv4Addr, String, bool)>>,
}

impl ScriptedTransport {
    pub(crate) fn reply(self, server: [u8; 4], response: Vec<u8>) -> Self {
        self.replies
            .borrow_mut()
            .entry(Ipv4Addr::from(server))
            .or_default()
            .push_back(response);
        self
    }

    /// `(server, domain, recursion desired)` for every query sent so far.
    pub(crate) fn queries(&self) -> Vec<(Ipv4Addr, String, bool)> {
        self.queries.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn exchange(&self, server: SocketAddrV4, query: &[u8]) -> Result<Vec<u8>, Error> {
        let packet = DNSPacket::parse(query)?;
        let domain = packet.questions()[0].domain()?;
        self.queries.borrow_mut().push((
            *server.ip(),
            domain,
            packet.header().flags().recursion_desired,
        ));

        let mut reply = self
            .replies
            .borrow_mut()
            .get_mut(server.ip())
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| io::Error::new(io::ErrorKind::ConnectionRefused, "no scripted reply"))?;
        reply[..2].copy_from_slice(&query[..2]);
        Ok(reply)
    }
}
