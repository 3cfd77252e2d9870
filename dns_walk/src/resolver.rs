//! Iterative resolution: walk referrals from a root server down to an
//! authoritative answer.

use std::{
    collections::HashSet,
    net::{IpAddr, Ipv4Addr, SocketAddrV4},
};

use log::{debug, info, warn};

use crate::{
    build_query, constants,
    dns_packet::DNSPacket,
    error::Error,
    record_type::RecordType,
    transport::{Transport, UdpTransport},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Where every resolution starts, including nested nameserver lookups.
    pub root_server: Ipv4Addr,
    pub port: u16,
    /// How many nameserver names may be resolved inside one another before
    /// giving up.
    pub max_depth: usize,
}

impl ResolverConfig {
    pub fn with_root_server(mut self, root_server: Ipv4Addr) -> Self {
        self.root_server = root_server;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_server: Ipv4Addr::from(constants::ROOT_NAMESERVER),
            port: constants::DNS_PORT,
            max_depth: constants::DEFAULT_MAX_DEPTH,
        }
    }
}

pub struct Resolver<T = UdpTransport> {
    transport: T,
    config: ResolverConfig,
}

impl Resolver<UdpTransport> {
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self::with_transport(UdpTransport::new(), config)
    }
}

impl Default for Resolver<UdpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Resolver<T> {
    pub fn with_transport(transport: T, config: ResolverConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Asks `name_server` once, without recursion, and returns whatever it
    /// replied.
    pub fn send_query(
        &self,
        name_server: Ipv4Addr,
        domain_name: &str,
        record_type: RecordType,
    ) -> Result<DNSPacket, Error> {
        self.exchange(name_server, domain_name, record_type, false)
    }

    /// Asks a recursive resolver such as `8.8.8.8` to do the walking and
    /// returns the first address it answers with.
    pub fn lookup_recursive(
        &self,
        server: Ipv4Addr,
        domain_name: &str,
        record_type: RecordType,
    ) -> Result<IpAddr, Error> {
        let packet = self.exchange(server, domain_name, record_type, true)?;
        get_answer(&packet, record_type).ok_or_else(|| Error::NoAnswer {
            server,
            domain: domain_name.to_string(),
            record_type,
        })
    }

    /// Resolves `domain_name` starting from the root server.
    ///
    /// Answers win over glue, glue wins over resolving an authority's name.
    /// Only address types (`A`, `AAAA`) can produce an answer.
    pub fn resolve(&self, domain_name: &str, record_type: RecordType) -> Result<IpAddr, Error> {
        self.resolve_at_depth(domain_name, record_type, 0)
    }

    fn resolve_at_depth(
        &self,
        domain_name: &str,
        record_type: RecordType,
        depth: usize,
    ) -> Result<IpAddr, Error> {
        if depth > self.config.max_depth {
            return Err(Error::DepthExceeded {
                domain: domain_name.to_string(),
                max_depth: self.config.max_depth,
            });
        }

        let mut name_server_ip = self.config.root_server;
        let mut visited = HashSet::new();

        loop {
            if !visited.insert(name_server_ip) {
                return Err(Error::ReferralLoop {
                    domain: domain_name.to_string(),
                    nameserver: name_server_ip,
                });
            }

            info!("querying {} for {} {}", name_server_ip, domain_name, record_type);
            let packet = self.send_query(name_server_ip, domain_name, record_type)?;

            if let Some(ip) = get_answer(&packet, record_type) {
                debug!("{} answered {} {} = {}", name_server_ip, domain_name, record_type, ip);
                return Ok(ip);
            }

            if let Some(ip) = get_name_server_ip(&packet) {
                debug!("{} referred {} to glue address {}", name_server_ip, domain_name, ip);
                name_server_ip = ip;
                continue;
            }

            let Some(ns_domain) = get_name_server(&packet) else {
                return Err(Error::NoNameserver {
                    domain: domain_name.to_string(),
                });
            };
            debug!(
                "{} referred {} to {} without glue, resolving it first",
                name_server_ip, domain_name, ns_domain
            );
            name_server_ip = match self.resolve_at_depth(ns_domain, RecordType::A, depth + 1)? {
                IpAddr::V4(ip) => ip,
                IpAddr::V6(_) => {
                    return Err(Error::NoNameserver {
                        domain: domain_name.to_string(),
                    })
                }
            };
        }
    }

    fn exchange(
        &self,
        name_server: Ipv4Addr,
        domain_name: &str,
        record_type: RecordType,
        recursion_desired: bool,
    ) -> Result<DNSPacket, Error> {
        let query = build_query(domain_name, recursion_desired, record_type);
        let response = self
            .transport
            .exchange(SocketAddrV4::new(name_server, self.config.port), &query)?;
        let packet = DNSPacket::parse(&response)?;

        let query_id = u16::from_be_bytes([query[0], query[1]]);
        if packet.header().id() != query_id {
            warn!(
                "response from {} has id {}, expected {}",
                name_server,
                packet.header().id(),
                query_id
            );
        }

        Ok(packet)
    }
}

// First answer of the requested type carrying an address.
fn get_answer(packet: &DNSPacket, record_type: RecordType) -> Option<IpAddr> {
    packet
        .answers()
        .iter()
        .filter(|record| record.type_() == record_type)
        .find_map(|record| record.data().ip())
}

// First A record in the additional section.
fn get_name_server_ip(packet: &DNSPacket) -> Option<Ipv4Addr> {
    packet
        .additionals()
        .iter()
        .find_map(|record| record.data().ipv4())
}

// First NS record in the authority section.
fn get_name_server(packet: &DNSPacket) -> Option<&str> {
    packet
        .authorities()
        .iter()
        .find_map(|record| record.data().name_server())
}
