use std::net::Ipv4Addr;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use dns_walk::{DNSPacket, DNSRecord, RecordType, Resolver, ResolverConfig};

/// Resolve a domain name by walking DNS referrals from a root server.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Domain name to resolve, e.g. www.example.com
    domain: String,

    /// Record type to ask for (A, NS, CNAME, AAAA or a number)
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: RecordType,

    /// Root server every resolution starts from
    #[arg(long, default_value = "198.41.0.4")]
    root: Ipv4Addr,

    /// UDP port nameservers listen on
    #[arg(long, default_value_t = 53)]
    port: u16,

    /// How many nameserver names may be resolved inside one another
    #[arg(long, default_value_t = dns_walk::constants::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Send a single non-recursive query to this nameserver and print the reply
    #[arg(long, conflicts_with = "recursive")]
    nameserver: Option<Ipv4Addr>,

    /// Let this recursive resolver (e.g. 8.8.8.8) do the walking
    #[arg(long)]
    recursive: Option<Ipv4Addr>,

    /// More logging; repeat for trace output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn print_section(title: &str, records: &[DNSRecord]) {
    if records.is_empty() {
        return;
    }
    println!(";; {} SECTION:", title);
    for record in records {
        println!("{}", record);
    }
    println!();
}

fn print_packet(packet: &DNSPacket) -> Result<()> {
    let header = packet.header();
    let flags = header.flags();
    println!(
        ";; id: {}, opcode: {}, rcode: {}, aa: {}, tc: {}, rd: {}, ra: {}",
        header.id(),
        flags.opcode,
        flags.rcode,
        flags.authoritative,
        flags.truncated,
        flags.recursion_desired,
        flags.recursion_available
    );
    println!(
        ";; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
        header.num_questions(),
        header.num_answers(),
        header.num_authorities(),
        header.num_additionals()
    );
    println!();

    println!(";; QUESTION SECTION:");
    for question in packet.questions() {
        println!(
            ";{}.\t\t{}\t{}",
            question.domain()?,
            question.class(),
            question.type_()
        );
    }
    println!();

    print_section("ANSWER", packet.answers());
    print_section("AUTHORITY", packet.authorities());
    print_section("ADDITIONAL", packet.additionals());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = ResolverConfig::default()
        .with_root_server(args.root)
        .with_port(args.port)
        .with_max_depth(args.max_depth);
    let resolver = Resolver::with_config(config);

    if let Some(name_server) = args.nameserver {
        let packet = resolver
            .send_query(name_server, &args.domain, args.record_type)
            .with_context(|| format!("querying {} for {}", name_server, args.domain))?;
        return print_packet(&packet);
    }

    let ip = match args.recursive {
        Some(server) => resolver
            .lookup_recursive(server, &args.domain, args.record_type)
            .with_context(|| format!("asking {} to resolve {}", server, args.domain))?,
        None => resolver
            .resolve(&args.domain, args.record_type)
            .with_context(|| format!("resolving {}", args.domain))?,
    };
    println!("{}", ip);

    Ok(())
}
