use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "LINKWAY_GATEWAY_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "LINKWAY_GATEWAY_PUBLIC_BASE_URL";
pub const SEED_FILE_ENV: &str = "LINKWAY_GATEWAY_SEED_FILE";
pub const FALLBACK_PATH_ENV: &str = "LINKWAY_GATEWAY_FALLBACK_PATH";
pub const RESOLVE_TIMEOUT_MS_ENV: &str = "LINKWAY_GATEWAY_RESOLVE_TIMEOUT_MS";
pub const ALIAS_LENGTH_ENV: &str = "LINKWAY_GATEWAY_ALIAS_LENGTH";
pub const LOG_FORMAT_ENV: &str = "LINKWAY_GATEWAY_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_FALLBACK_PATH: &str = "/dashboard";
pub const DEFAULT_RESOLVE_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[value(name = "pretty")]
    Pretty,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "linkway-gateway")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Base URL that short links are published under.
    #[arg(long, env = PUBLIC_BASE_URL_ENV, default_value = DEFAULT_PUBLIC_BASE_URL)]
    pub public_base_url: String,

    /// JSON seed file; the built-in demo links are used when absent.
    #[arg(long, env = SEED_FILE_ENV)]
    pub seed_file: Option<PathBuf>,

    /// Where unresolvable short codes are redirected.
    #[arg(long, env = FALLBACK_PATH_ENV, default_value = DEFAULT_FALLBACK_PATH)]
    pub fallback_path: String,

    /// How long a redirect waits for the registry to finish loading.
    #[arg(long, env = RESOLVE_TIMEOUT_MS_ENV, default_value_t = DEFAULT_RESOLVE_TIMEOUT_MS)]
    pub resolve_timeout_ms: u64,

    #[arg(long, env = ALIAS_LENGTH_ENV, default_value_t = DEFAULT_ALIAS_LENGTH)]
    pub alias_length: usize,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}
