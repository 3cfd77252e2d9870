//! A small DNS client: a wire-format codec for queries and responses, plus an
//! iterative resolver that follows referrals from a root server.
//!
//! ```no_run
//! use dns_walk::{resolve, RecordType};
//!
//! let ip = resolve("example.com", RecordType::A).unwrap();
//! println!("{}", ip);
//! ```

use std::net::{IpAddr, Ipv4Addr};

use rand::Rng;

pub mod class;
pub mod constants;
pub mod dns_header;
pub mod dns_packet;
pub mod dns_question;
pub mod dns_record;
pub mod error;
pub mod name;
pub mod record_data;
pub mod record_type;
pub mod resolver;
pub mod transport;
mod wire;

#[cfg(test)]
mod testing;

pub use class::Class;
pub use dns_header::{DNSHeader, Flags};
pub use dns_packet::DNSPacket;
pub use dns_question::DNSQuestion;
pub use dns_record::DNSRecord;
pub use error::Error;
pub use name::{decode_labels, decode_name, encode_dns_name, encode_labels};
pub use record_data::RecordData;
pub use record_type::RecordType;
pub use resolver::{Resolver, ResolverConfig};
pub use transport::{Transport, UdpTransport};
pub use wire::Reader;

/// Serializes a single-question query with a fresh random id.
///
/// Only the RD flag may be set; the question class is always `IN`.
pub fn build_query(domain_name: &str, recursion_desired: bool, record_type: RecordType) -> Vec<u8> {
    let id = rand::thread_rng().gen::<u16>();
    let header = DNSHeader::new(id, Flags::query(recursion_desired));

    let question = DNSQuestion::new(encode_dns_name(domain_name), record_type, Class::In);

    let mut bytes = header.to_bytes();
    bytes.extend(question.to_bytes());

    bytes
}

/// Non-recursive query to `name_server` over UDP port 53.
pub fn send_query(
    name_server: Ipv4Addr,
    domain_name: &str,
    record_type: RecordType,
) -> Result<DNSPacket, Error> {
    Resolver::new().send_query(name_server, domain_name, record_type)
}

/// Iterative resolution from `a.root-servers.net` over UDP.
pub fn resolve(domain_name: &str, record_type: RecordType) -> Result<IpAddr, Error> {
    Resolver::new().resolve(domain_name, record_type)
}
