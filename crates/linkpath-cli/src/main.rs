#![forbid(unsafe_code)]

use linkpath_core::{EdgePathRequest, EdgeStyle, Point, compute_edge_path, compute_edge_paths};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Path(linkpath_core::Error),
    Json(serde_json::Error),
    Entry {
        index: usize,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Path(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Entry { index, source } => {
                write!(f, "JSON error in request #{index}: {source}")
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<linkpath_core::Error> for CliError {
    fn from(value: linkpath_core::Error) -> Self {
        Self::Path(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum Command {
    #[default]
    Path,
    Batch,
    Styles,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    from: Option<Point>,
    to: Option<Point>,
    style: Option<String>,
    json: bool,
    pretty: bool,
    input: Option<String>,
}

fn usage() -> &'static str {
    "linkpath-cli\n\
\n\
USAGE:\n\
  linkpath-cli [path] --from <x,y> --to <x,y> [--style straight|bezier|step|smoothstep] [--json] [--pretty]\n\
  linkpath-cli batch [--pretty] [<path>|-]\n\
  linkpath-cli styles\n\
\n\
NOTES:\n\
  - path prints the SVG path data; --json prints the full response with echoed anchors.\n\
  - Style names are case-insensitive; unknown names fall back to bezier.\n\
  - batch reads a JSON array of {source_x, source_y, target_x, target_y, edge_type} requests.\n\
  - If <path> is omitted or '-', batch input is read from stdin.\n\
  - Negative coordinates can be written as --from=-10,5.\n\
"
}

fn parse_point_arg(value: &str) -> Result<Point, CliError> {
    Ok(linkpath_core::parse_point(value)?)
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        // `--flag=value` keeps negative numbers from looking like flags.
        let (flag, inline) = match a.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
            _ => (a.as_str(), None),
        };
        let mut value = || -> Result<String, CliError> {
            match &inline {
                Some(v) => Ok(v.clone()),
                None => it.next().cloned().ok_or(CliError::Usage(usage())),
            }
        };

        match flag {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "path" => args.command = Command::Path,
            "batch" => args.command = Command::Batch,
            "styles" => args.command = Command::Styles,
            "--from" => args.from = Some(parse_point_arg(&value()?)?),
            "--to" => args.to = Some(parse_point_arg(&value()?)?),
            "--style" => args.style = Some(value()?),
            "--json" => args.json = true,
            "--pretty" => args.pretty = true,
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn parse_batch(text: &str) -> Result<Vec<EdgePathRequest>, CliError> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(text)?;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry).map_err(|source| CliError::Entry { index, source })
        })
        .collect()
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Styles => {
            for style in EdgeStyle::ALL {
                println!("{style}");
            }
            Ok(())
        }
        Command::Path => {
            if args.input.is_some() {
                return Err(CliError::Usage(usage()));
            }
            let (Some(from), Some(to)) = (args.from, args.to) else {
                return Err(CliError::Usage(usage()));
            };
            let style = args
                .style
                .as_deref()
                .map(EdgeStyle::from_token)
                .unwrap_or_default();
            let response = compute_edge_path(&EdgePathRequest::new(from, to, style))?;
            if args.json || args.pretty {
                write_json(&response, args.pretty)
            } else {
                println!("{}", response.path);
                Ok(())
            }
        }
        Command::Batch => {
            let text = read_input(args.input.as_deref())?;
            let requests = parse_batch(&text)?;
            let responses = compute_edge_paths(&requests)?;
            write_json(&responses, args.pretty)
        }
    }
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

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
