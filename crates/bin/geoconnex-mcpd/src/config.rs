use clap::{Parser, builder::BoolishValueParser};
use geoconnex_core::client::{DEFAULT_GRAPH_ENDPOINT, DEFAULT_SHACL_SHAPE_URL};
use geoconnex_core::{Endpoints, Url};
use geoconnex_mcp::server::{DEFAULT_MCP_HTTP_ADDR, McpHttpServerConfig};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_SSE_KEEP_ALIVE_SECS: u64 = 15;

#[derive(Parser, Debug)]
#[command(name = "geoconnex-mcpd", version, about = "Geoconnex MCP daemon.")]
struct CliArgs {
    #[arg(
        long = "stdio",
        env = "GEOCONNEX_ENABLE_STDIO",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "GEOCONNEX_HTTP_SERVE",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    http_serve: bool,

    #[arg(long, env = "GEOCONNEX_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    http_addr: SocketAddr,

    #[arg(
        long,
        env = "GEOCONNEX_MCP_STATEFUL",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    http_stateful: bool,

    #[arg(
        long,
        env = "GEOCONNEX_SSE_KEEP_ALIVE_SECS",
        default_value_t = DEFAULT_SSE_KEEP_ALIVE_SECS
    )]
    sse_keep_alive_secs: u64,

    #[arg(long, env = "GEOCONNEX_GRAPH_ENDPOINT", default_value = DEFAULT_GRAPH_ENDPOINT)]
    graph_endpoint: String,

    #[arg(long, env = "GEOCONNEX_SHACL_SHAPE_URL", default_value = DEFAULT_SHACL_SHAPE_URL)]
    shacl_shape_url: String,

    #[arg(long, env = "GEOCONNEX_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct GeoconnexConfig {
    pub enable_stdio: bool,
    pub http_serve: bool,
    pub http_addr: SocketAddr,
    pub http_stateful: bool,
    pub sse_keep_alive: Option<Duration>,
    pub endpoints: Endpoints,
    pub log_filter: String,
}

#[derive(Debug)]
pub enum ConfigError {
    NoTransport,
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTransport => write!(
                f,
                "no transport enabled: set GEOCONNEX_ENABLE_STDIO or GEOCONNEX_HTTP_SERVE"
            ),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl GeoconnexConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }

    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.log_filter)
    }

    pub const fn http_server_config(&self) -> McpHttpServerConfig {
        McpHttpServerConfig::new(self.http_addr)
            .with_stateful_mode(self.http_stateful)
            .with_sse_keep_alive(self.sse_keep_alive)
    }
}

impl TryFrom<CliArgs> for GeoconnexConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if !args.enable_stdio && !args.http_serve {
            return Err(ConfigError::NoTransport);
        }

        let graph = parse_url("GEOCONNEX_GRAPH_ENDPOINT", args.graph_endpoint)?;
        let shacl_shape = parse_url("GEOCONNEX_SHACL_SHAPE_URL", args.shacl_shape_url)?;

        if EnvFilter::try_new(&args.log_filter).is_err() {
            return Err(ConfigError::InvalidSetting {
                name: "GEOCONNEX_LOG",
                value: args.log_filter,
            });
        }

        let sse_keep_alive = if args.sse_keep_alive_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(args.sse_keep_alive_secs))
        };

        Ok(Self {
            enable_stdio: args.enable_stdio,
            http_serve: args.http_serve,
            http_addr: args.http_addr,
            http_stateful: args.http_stateful,
            sse_keep_alive,
            endpoints: Endpoints::new(graph, shacl_shape),
            log_filter: args.log_filter,
        })
    }
}

fn parse_url(name: &'static str, value: String) -> Result<Url, ConfigError> {
    match Url::parse(value.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url),
        _ => Err(ConfigError::InvalidSetting { name, value }),
    }
}
