use crate::{Error, Result};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;

pub const SERVER_USAGE: &str = "\
Simple Hello World HTTP server.

Usage: hello-server [--port <PORT>]

Options:
  -p, --port <PORT>  Port to listen on (default: 8080)
  -h, --help         Print help";

pub const INFERENCE_UP_USAGE: &str = "\
Ask an inference-management API to bring a model up.

Usage: inference-up [--config <PATH>] [--base-url <URL>] [--model <MODEL>]

Options:
  -c, --config <PATH>   YAML config file (default: $CONFIG_PATH or config.yaml)
      --base-url <URL>  Override inference.base_url
  -m, --model <MODEL>   Override inference.model
  -h, --help            Print help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerCommand {
    Run { port: u16 },
    Help,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InferenceUpArgs {
    pub config: Option<PathBuf>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub help: bool,
}

/// Parses `hello-server` arguments, program name excluded.
pub fn parse_server_args<I, S>(args: I) -> Result<ServerCommand>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut port = DEFAULT_PORT;
    let mut args = args.into_iter().map(Into::<String>::into);

    while let Some(arg) = args.next() {
        let (flag, inline) = split_flag(&arg);
        match flag {
            "-h" | "--help" => return Ok(ServerCommand::Help),
            "-p" | "--port" => {
                let value = flag_value(flag, inline, &mut args)?;
                port = value
                    .parse()
                    .map_err(|_| Error::config(format!("invalid port '{}'", value)))?;
            }
            _ => return Err(Error::config(format!("unexpected argument '{}'", arg))),
        }
    }

    Ok(ServerCommand::Run { port })
}

/// Parses `inference-up` arguments, program name excluded.
pub fn parse_inference_up_args<I, S>(args: I) -> Result<InferenceUpArgs>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut parsed = InferenceUpArgs::default();
    let mut args = args.into_iter().map(Into::<String>::into);

    while let Some(arg) = args.next() {
        let (flag, inline) = split_flag(&arg);
        match flag {
            "-h" | "--help" => parsed.help = true,
            "-c" | "--config" => {
                parsed.config = Some(PathBuf::from(flag_value(flag, inline, &mut args)?));
            }
            "--base-url" => parsed.base_url = Some(flag_value(flag, inline, &mut args)?),
            "-m" | "--model" => parsed.model = Some(flag_value(flag, inline, &mut args)?),
            _ => return Err(Error::config(format!("unexpected argument '{}'", arg))),
        }
    }

    Ok(parsed)
}

/// Splits `--flag=value` and glued short forms such as `-p9000`.
fn split_flag(arg: &str) -> (&str, Option<&str>) {
    if arg.starts_with("--") {
        return match arg.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (arg, None),
        };
    }

    match arg.char_indices().nth(2) {
        Some((at, _)) if arg.starts_with('-') => (&arg[..at], Some(&arg[at..])),
        _ => (arg, None),
    }
}

fn flag_value(
    flag: &str,
    inline: Option<&str>,
    rest: &mut impl Iterator<Item = String>,
) -> Result<String> {
    match inline {
        Some(value) => Ok(value.to_string()),
        None => rest
            .next()
            .ok_or_else(|| Error::config(format!("{} requires a value", flag))),
    }
}
