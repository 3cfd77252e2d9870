use crate::{
    constants,
    error::Error,
    wire::{self, Reader},
};

/// Encodes a dotted domain name as length-prefixed labels.
///
/// `www.google.com` becomes `3www6google3com0`. Labels longer than 63 bytes
/// are not rejected and produce invalid wire data.
pub fn encode_dns_name(domain_name: &str) -> Vec<u8> {
    let mut bytes = domain_name
        // Split domain name on .
        .split('.')
        // Map each label to a length-prefixed byte array
        .fold(vec![], |mut acc, label| {
            acc.push(label.len() as u8);
            acc.extend_from_slice(label.as_bytes());
            acc
        });
    // Add a 0 byte to terminate the name
    bytes.push(0);

    bytes
}

/// Writes raw labels back out length-prefixed, with the terminating zero.
pub fn encode_labels(labels: &[Vec<u8>]) -> Vec<u8> {
    let mut bytes = labels.iter().fold(vec![], |mut acc, label| {
        acc.push(label.len() as u8);
        acc.extend_from_slice(label);
        acc
    });
    bytes.push(0);

    bytes
}

/// Decodes a possibly compressed name starting at the reader's position.
///
/// Labels may hold any byte values; bytes that are not UTF-8 are replaced
/// with U+FFFD. Use [`decode_labels`] to keep them as they are.
pub fn decode_name(reader: &mut Reader) -> Result<String, Error> {
    let labels = decode_labels(reader)?;
    Ok(labels
        .iter()
        .map(|label| String::from_utf8_lossy(label))
        .collect::<Vec<_>>()
        .join("."))
}

/// Reads the raw labels of a possibly compressed name, root name included
/// as an empty list.
///
/// Compression pointers jump to absolute offsets in the message the reader
/// wraps. Once the name is complete the reader sits right after the first
/// pointer followed, or after the terminating zero if there was none.
pub fn decode_labels(reader: &mut Reader) -> Result<Vec<Vec<u8>>, Error> {
    let mut labels = vec![];
    // Where to continue once the name is read, saved on the first jump only.
    let mut resume_at = None;
    let mut jumps = 0;

    loop {
        let length = wire::read_u8(reader)?;
        match length & 0b1100_0000 {
            0b0000_0000 if length == 0 => break,
            0b0000_0000 => labels.push(wire::read_bytes(reader, length as usize)?),
            0b1100_0000 => {
                // bottom 6 bits of the length byte plus the next byte
                let low = wire::read_u8(reader)?;
                let pointer = u16::from_be_bytes([length & 0b0011_1111, low]);
                if pointer as usize >= reader.get_ref().len() {
                    return Err(Error::PointerOutOfBounds(pointer));
                }
                jumps += 1;
                if jumps > constants::MAX_POINTER_JUMPS {
                    return Err(Error::PointerLoop);
                }
                if resume_at.is_none() {
                    resume_at = Some(reader.position());
                }
                reader.set_position(pointer as u64);
            }
            _ => return Err(Error::UnknownLabelFormat(length)),
        }
    }

    if let Some(position) = resume_at {
        reader.set_position(position);
    }

    Ok(labels)
}
