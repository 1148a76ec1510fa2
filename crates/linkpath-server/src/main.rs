#![forbid(unsafe_code)]

use linkpath_server::config::split_origins;
use linkpath_server::{ConfigError, ServerConfig};
use std::path::PathBuf;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Server(linkpath_server::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Server(err) => write!(f, "{err}"),
        }
    }
}

impl From<linkpath_server::Error> for CliError {
    fn from(value: linkpath_server::Error) -> Self {
        Self::Server(value)
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Server(value.into())
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Server(value.into())
    }
}

#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    allow_origins: Vec<String>,
    timeout_ms: Option<u64>,
}

fn usage() -> &'static str {
    "linkpath-server\n\
\n\
USAGE:\n\
  linkpath-server [--config <path>] [--host <host>] [--port <port>] [--allow-origin <origin>]... [--timeout-ms <ms>]\n\
\n\
NOTES:\n\
  - Precedence: defaults < --config JSON file < LINKPATH_* environment < flags.\n\
  - Environment: LINKPATH_HOST, LINKPATH_PORT, LINKPATH_ALLOWED_ORIGINS (comma-separated),\n\
    LINKPATH_REQUEST_TIMEOUT_MS.\n\
  - --allow-origin may be repeated; '*' mirrors the request origin.\n\
  - Log verbosity follows RUST_LOG (default: info).\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(PathBuf::from(path));
            }
            "--host" => {
                let Some(host) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.host = Some(host.trim().to_string());
            }
            "--port" => {
                let Some(port) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.port = Some(port.parse::<u16>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--allow-origin" => {
                let Some(origin) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.allow_origins.extend(split_origins(origin));
            }
            "--timeout-ms" => {
                let Some(ms) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.timeout_ms = Some(ms.parse::<u64>().map_err(|_| CliError::Usage(usage()))?);
            }
            _ => return Err(CliError::Usage(usage())),
        }
    }

    Ok(args)
}

fn resolve_config(
    args: Args,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ServerConfig, CliError> {
    let mut config = ServerConfig::default();
    if let Some(path) = &args.config {
        config.merge_file(path)?;
    }
    config.merge_env(env)?;

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if !args.allow_origins.is_empty() {
        config.allowed_origins = args.allow_origins;
    }
    if let Some(ms) = args.timeout_ms {
        config.request_timeout_ms = ms;
    }
    config.validate()?;
    Ok(config)
}

fn run(args: Args) -> Result<(), CliError> {
    let config = resolve_config(args, |key| std::env::var(key).ok())?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(linkpath_server::serve(config))?;
    Ok(())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    linkpath_server::setup_logging();

    if let Err(err) = run(args) {
        tracing::error!("{err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}
