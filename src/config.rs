use crate::opts::Opts;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read the config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Config file {path} is not valid: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where the IP address that goes into the A record comes from.
#[derive(Deserialize, clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IPSourceName {
    /// The local address the OS picks for outbound traffic.
    #[default]
    Outbound,
    Ipify,
    Icanhazip,
}

/// Everything in the config file is optional, flags take precedence.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    domain: Option<String>,
    host: Option<String>,
    zone_id: Option<String>,
    skip_lookup: Option<bool>,
    ip_source: Option<IPSourceName>,
    region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub domain: String,
    pub host: String,
    pub zone_id: String,
    pub skip_lookup: bool,
    pub ip_source: IPSourceName,
    pub region: Option<String>,
}

impl Config {
    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.host, self.domain)
    }
}

fn local_hostname() -> String {
    gethostname::gethostname().to_string_lossy().into_owned()
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "route53-dyndns").map(|dir| dir.config_dir().join("config.toml"))
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_config(opts: &Opts) -> Result<Config, ConfigError> {
    let file = match &opts.config {
        Some(path) => read_config_file(Path::new(path))?,
        None => match default_config_path() {
            Some(path) if path.is_file() => read_config_file(&path)?,
            _ => ConfigFile::default(),
        },
    };
    Ok(merge(opts, file))
}

fn merge(opts: &Opts, file: ConfigFile) -> Config {
    Config {
        domain: opts.domain.clone().or(file.domain).unwrap_or_default(),
        host: opts
            .host
            .clone()
            .or(file.host)
            .unwrap_or_else(local_hostname),
        zone_id: opts.zone_id.clone().or(file.zone_id).unwrap_or_default(),
        skip_lookup: opts.skip_lookup.or(file.skip_lookup).unwrap_or(false),
        ip_source: opts.ip_source.or(file.ip_source).unwrap_or_default(),
        region: opts.region.clone().or(file.region),
    }
}
