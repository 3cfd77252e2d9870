use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
};

use crate::{
    error::Error,
    name::decode_name,
    record_type::RecordType,
    wire::{self, Reader},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    NS(String),
    CNAME(String),
    Other(Vec<u8>),
}

impl RecordData {
    /// Reads `length` bytes of RDATA for a record of type `type_`.
    ///
    /// Name payloads may point anywhere in the message; the reader always
    /// ends up `length` bytes past where the payload started.
    pub fn parse(reader: &mut Reader, type_: RecordType, length: u16) -> Result<Self, Error> {
        let start = reader.position();
        if wire::remaining(reader) < length as usize {
            return Err(Error::UnexpectedEof);
        }

        let wrong_length = || Error::WrongRdataLength {
            record_type: type_,
            length,
        };

        let data = match type_ {
            RecordType::A => {
                let bytes: [u8; 4] = wire::read_bytes(reader, length as usize)?
                    .try_into()
                    .map_err(|_| wrong_length())?;
                RecordData::A(Ipv4Addr::from(bytes))
            }
            RecordType::AAAA => {
                let bytes: [u8; 16] = wire::read_bytes(reader, length as usize)?
                    .try_into()
                    .map_err(|_| wrong_length())?;
                RecordData::AAAA(Ipv6Addr::from(bytes))
            }
            RecordType::NS => RecordData::NS(decode_name(reader)?),
            RecordType::CNAME => RecordData::CNAME(decode_name(reader)?),
            RecordType::Other(_) => RecordData::Other(wire::read_bytes(reader, length as usize)?),
        };

        let end = start + length as u64;
        if reader.position() > end {
            return Err(wrong_length());
        }
        reader.set_position(end);

        Ok(data)
    }

    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            RecordData::A(ip) => Some(IpAddr::V4(*ip)),
            RecordData::AAAA(ip) => Some(IpAddr::V6(*ip)),
            _ => None,
        }
    }
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self {
            RecordData::A(ip) => Some(*ip),
            _ => None,
        }
    }
    pub fn name_server(&self) -> Option<&str> {
        match self {
            RecordData::NS(name) => Some(name),
            _ => None,
        }
    }
    pub fn other(&self) -> Option<&[u8]> {
        match self {
            RecordData::Other(data) => Some(data),
            _ => None,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(ip) => write!(f, "{}", ip),
            RecordData::AAAA(ip) => write!(f, "{}", ip),
            RecordData::NS(name) | RecordData::CNAME(name) => write!(f, "{}.", name),
            RecordData::Other(data) => {
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
