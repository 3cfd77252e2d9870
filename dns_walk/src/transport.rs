use std::net::{Ipv4Addr, SocketAddrV4, UdpSocket};

use log::trace;

use crate::{constants, error::Error};

/// Sends one query to a nameserver and hands back its reply.
pub trait Transport {
    fn exchange(&self, server: SocketAddrV4, query: &[u8]) -> Result<Vec<u8>, Error>;
}

/// One UDP socket per exchange: bind, send, a single receive, close.
///
/// There is no timeout; a silent server blocks the caller.
#[derive(Debug, Clone)]
pub struct UdpTransport {
    buffer_size: usize,
}

impl UdpTransport {
    pub fn new() -> Self {
        Self {
            buffer_size: constants::UDP_DNS_RESPONSE_SIZE,
        }
    }

    /// Largest response accepted; anything longer is cut off by the socket.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }
}

impl Default for UdpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UdpTransport {
    fn exchange(&self, server: SocketAddrV4, query: &[u8]) -> Result<Vec<u8>, Error> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
        socket.send_to(query, server)?;
        trace!("sent {} bytes to {}", query.len(), server);

        let mut response_buffer = vec![0; self.buffer_size];
        let (received, from) = socket.recv_from(&mut response_buffer)?;
        trace!("received {} bytes from {}", received, from);

        response_buffer.truncate(received);
        Ok(response_buffer)
    }
}
