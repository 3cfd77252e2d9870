use std::fmt;

use crate::{
    class::Class,
    error::Error,
    name::decode_name,
    record_data::RecordData,
    record_type::RecordType,
    wire::{self, Reader},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DNSRecord {
    name: String,
    type_: RecordType,
    class: Class,
    ttl: u32,
    data: RecordData,
}

impl DNSRecord {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn type_(&self) -> RecordType {
        self.type_
    }
    pub fn class(&self) -> Class {
        self.class
    }
    pub fn ttl(&self) -> u32 {
        self.ttl
    }
    pub fn data(&self) -> &RecordData {
        &self.data
    }

    pub fn parse(reader: &mut Reader) -> Result<Self, Error> {
        let name = decode_name(reader)?;
        let type_ = RecordType::from(wire::read_u16(reader)?);
        let class = Class::from(wire::read_u16(reader)?);
        let ttl = wire::read_u32(reader)?;
        let data_length = wire::read_u16(reader)?;
        let data = RecordData::parse(reader, type_, data_length)?;

        Ok(DNSRecord {
            name,
            type_,
            class,
            ttl,
            data,
        })
    }
}

impl fmt::Display for DNSRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.\t{}\t{}\t{}\t{}",
            self.name, self.ttl, self.class, self.type_, self.data
        )
    }
}
