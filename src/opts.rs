use crate::config::IPSourceName;
use clap::Parser;

/// Long flags that may also be written with a single dash, e.g. `-domain example.com`.
const LONG_FLAGS: &[&str] = &[
    "domain",
    "host",
    "zoneid",
    "zone-id",
    "skipLookup",
    "skip-lookup",
    "config",
    "ip-source",
    "region",
    "help",
    "version",
];

/// A tool to point an AWS Route 53 A record at this machine, using Route 53 as a dynamic DNS system.
#[derive(Parser, Debug, Default)]
#[clap(author, version, about, long_about = None, name = "route53-dyndns")]
pub struct Opts {
    /// Domain name the record lives under.
    #[clap(long)]
    pub domain: Option<String>,
    /// Host label for the A record. Defaults to this machine's host name.
    #[clap(long)]
    pub host: Option<String>,
    /// Route 53 hosted zone ID for the domain.
    #[clap(long = "zoneid", visible_alias = "zone-id")]
    pub zone_id: Option<String>,
    /// Skip the lookup of the currently published address and always update.
    #[clap(
        long = "skip-lookup",
        visible_alias = "skipLookup",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub skip_lookup: Option<bool>,
    /// The path to the configuration file.
    #[clap(long)]
    pub config: Option<String>,
    /// Where to find out the IP address.
    ///
    /// `outbound` uses the local address picked for outbound traffic, the
    /// others ask a public web service, which works behind NAT.
    #[clap(long, value_enum)]
    pub ip_source: Option<IPSourceName>,
    /// AWS region used to sign requests, if not set by the environment.
    #[clap(long)]
    pub region: Option<String>,
}

/// Rewrites `-flag` into `--flag` for the known long flags.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| match arg.strip_prefix('-') {
            Some(rest) if !rest.starts_with('-') => {
                let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                if LONG_FLAGS.contains(&name) {
                    format!("-{}", arg)
                } else {
                    arg
                }
            }
            _ => arg,
        })
        .collect()
}
