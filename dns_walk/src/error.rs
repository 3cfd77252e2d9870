use std::net::Ipv4Addr;

use thiserror::Error;

use crate::record_type::RecordType;

/// Error encoding, exchanging or resolving a DNS message
#[derive(Debug, Error)]
pub enum Error {
    #[error("transport failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("packet is smaller than header size")]
    HeaderTooShort,
    #[error("packet has incomplete data")]
    UnexpectedEof,
    #[error("label in domain name has unknown label format (length byte {0:#04x})")]
    UnknownLabelFormat(u8),
    #[error("compression pointer to offset {0} is outside the message")]
    PointerOutOfBounds(u16),
    #[error("too many compression pointers while reading a name")]
    PointerLoop,
    #[error("wrong size of RDATA for {record_type} record: {length} bytes")]
    WrongRdataLength { record_type: RecordType, length: u16 },
    #[error("no nameserver to ask next while resolving {domain}")]
    NoNameserver { domain: String },
    #[error("resolving {domain} needs more than {max_depth} nested nameserver lookups")]
    DepthExceeded { domain: String, max_depth: usize },
    #[error("referral for {domain} points back to already queried nameserver {nameserver}")]
    ReferralLoop { domain: String, nameserver: Ipv4Addr },
    #[error("{server} returned no {record_type} address for {domain}")]
    NoAnswer {
        server: Ipv4Addr,
        domain: String,
        record_type: RecordType,
    },
}
