use crate::config::Config;
use crate::ip_source::{ip_source::IPSource, outbound::IPSourceOutbound};
use crate::resolver::{current_address, Resolver, SystemResolver};
use crate::route53::{client::Route53, ChangeRequest, DnsProvider};
use clap::Parser;
use config::{ConfigError, IPSourceName};
use ip_source::icanhazip::IPSourceIcanhazip;
use ip_source::ipify::IPSourceIpify;
use log::{debug, info};
use opts::Opts;
use std::io::{self, Write};
use std::net::IpAddr;
mod config;
mod ip_source;
mod opts;
mod resolver;
mod route53;
use die_exit::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Error occured while reading config: {0}")]
    Config(#[from] ConfigError),
    #[error("Unable to determine the outbound IP address: {0}")]
    Probe(#[source] std::io::Error),
    #[error("Error while sending request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Expected an IPv4 address, got {0:?}")]
    BadAddress(String),
    #[error("Unable to resolve {0}: {1}")]
    Resolve(String, #[source] std::io::Error),
    #[error("{fqdn} resolves to {count} addresses, only hosts with a single address are supported")]
    MultipleAddresses { fqdn: String, count: usize },
    #[error("Error while building the change request: {0}")]
    Build(#[from] aws_sdk_route53::error::BuildError),
    #[error("Error while accessing the Route 53 API: {0}")]
    Api(String),
    #[error("Error while writing output: {0}")]
    Output(#[from] std::io::Error),
}

/// How a run ended, when it did not fail.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The record already points at this machine.
    Unchanged,
    /// An upsert was sent, with the provider's response.
    Updated(String),
}

/// Progress and the provider's response go to `out`, which is stdout outside of tests.
async fn run(
    conf: &Config,
    ip_source: &dyn IPSource,
    resolver: &dyn Resolver,
    provider: &dyn DnsProvider,
    out: &mut dyn Write,
) -> Result<Outcome, ClientError> {
    let fqdn = conf.fqdn();

    debug!("Finding out the IP address...");
    let ip = ip_source.get_ipv4().await?;
    writeln!(out, "ip: {}", ip)?;

    if conf.skip_lookup {
        debug!("Skipping lookup of the current address for {}", fqdn);
    } else {
        let current = current_address(resolver, &fqdn).await?;
        match current {
            Some(current) => writeln!(out, "currentIP: {}", current)?,
            None => writeln!(out, "currentIP: {} has no address", fqdn)?,
        }
        if current == Some(IpAddr::V4(ip)) {
            info!("IP address has not changed, nothing to do");
            return Ok(Outcome::Unchanged);
        }
    }

    writeln!(out, "Updating for {} -> {}", fqdn, ip)?;
    let change = ChangeRequest::upsert_a(&conf.zone_id, &fqdn, ip);
    let response = provider.upsert(&change).await?;
    writeln!(out, "Change Response:\n{}", response)?;
    Ok(Outcome::Updated(response))
}

async fn start(opts: &Opts) -> Result<Outcome, ClientError> {
    let conf = config::load_config(opts)?;
    debug!("Loaded configuration: {:?}", conf);

    let ip_source: Box<dyn IPSource> = match conf.ip_source {
        IPSourceName::Outbound => Box::new(IPSourceOutbound::default()),
        IPSourceName::Ipify => Box::new(IPSourceIpify),
        IPSourceName::Icanhazip => Box::new(IPSourceIcanhazip),
    };
    let provider = Route53::new(conf.region.clone());
    run(
        &conf,
        ip_source.as_ref(),
        &SystemResolver,
        &provider,
        &mut io::stdout(),
    )
    .await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opts::parse_from(opts::normalize_args(std::env::args()));
    start(&opts)
        .await
        .die_with(|error| (error.to_string(), 1));
}
