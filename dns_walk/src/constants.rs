pub const UDP_DNS_RESPONSE_SIZE: usize = 1024;
pub const DNS_HEADER_SIZE: usize = 12;
pub const DNS_PORT: u16 = 53;
// https://www.iana.org/domains/root/servers (a.root-servers.net)
pub const ROOT_NAMESERVER: [u8; 4] = [198, 41, 0, 4];
pub const DEFAULT_MAX_DEPTH: usize = 16;
// Upper bound on compression pointers followed while reading one name.
pub const MAX_POINTER_JUMPS: usize = 64;
