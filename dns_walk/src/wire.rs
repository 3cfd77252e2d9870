//! Bounds-checked big-endian reads over the shared message cursor.

use std::io::{Cursor, Read};

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::Error;

/// Cursor over a whole DNS message. Compression pointers are absolute
/// offsets into the same buffer, so every decode step shares one of these.
pub type Reader<'a> = Cursor<&'a [u8]>;

pub(crate) fn read_u8(reader: &mut Reader) -> Result<u8, Error> {
    reader.read_u8().map_err(|_| Error::UnexpectedEof)
}

pub(crate) fn read_u16(reader: &mut Reader) -> Result<u16, Error> {
    reader
        .read_u16::<BigEndian>()
        .map_err(|_| Error::UnexpectedEof)
}

pub(crate) fn read_u32(reader: &mut Reader) -> Result<u32, Error> {
    reader
        .read_u32::<BigEndian>()
        .map_err(|_| Error::UnexpectedEof)
}

pub(crate) fn read_bytes(reader: &mut Reader, length: usize) -> Result<Vec<u8>, Error> {
    if remaining(reader) < length {
        return Err(Error::UnexpectedEof);
    }
    let mut bytes = vec![0; length];
    reader
        .read_exact(&mut bytes)
        .map_err(|_| Error::UnexpectedEof)?;
    Ok(bytes)
}

pub(crate) fn remaining(reader: &Reader) -> usize {
    (reader.get_ref().len() as u64).saturating_sub(reader.position()) as usize
}
