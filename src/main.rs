use std::net::SocketAddr;
use std::process;

use clap::Parser;

use dnsq::{Client, DNS_PORT};

/// Look up the IPv4 addresses of a domain
#[derive(Debug, Parser)]
#[command(name = "dnsq", version)]
struct Args {
    /// The domain to resolve
    domain: String,

    /// Resolver to ask
    #[arg(short, long, default_value_t = SocketAddr::from(([8, 8, 8, 8], DNS_PORT)))]
    server: SocketAddr,

    /// Log debug output of the lookup
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.parse_filters("dnsq=debug");
    }
    builder.init();

    let client = match Client::connect(args.server).await {
        Ok(client) => client,
        Err(err) => {
            eprintln!("could not open socket for {}: {}", args.server, err);
            process::exit(1);
        }
    };

    let response = match client.query(&args.domain).await {
        Ok(response) => response,
        Err(err) => {
            eprintln!("lookup of {} failed: {}", args.domain, err);
            process::exit(1);
        }
    };

    let question = &response.question;
    println!(
        "Question: {} {} {}",
        question.qname, question.qtype, question.qclass
    );
    for answer in &response.answers {
        println!(
            "Answer: {} {} {} {} {}",
            answer.name,
            answer.typ(),
            answer.cls,
            answer.ttl,
            answer.data
        );
    }
}
