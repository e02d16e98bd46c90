use std::ffi::OsString;
use std::path::PathBuf;

use clap::{arg, value_parser, ArgAction, ArgMatches, Command};

const VALUE_OPTIONS: [&str; 6] = ["method", "url", "headers", "body", "save", "load"];
const FLAG_OPTIONS: [&str; 2] = ["help", "version"];

/// Options recognized on the command line. Empty `url`, `save` and `load` are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub method: String,
    pub url: Option<String>,
    pub headers: String,
    pub body: String,
    pub save: Option<PathBuf>,
    pub load: Option<PathBuf>,
}

pub fn command() -> Command {
    Command::new("httpreq")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .arg(
            arg!(--method <METHOD>)
                .help("HTTP method (GET, POST, PUT, DELETE)")
                .required(false)
                .allow_hyphen_values(true)
                .default_value("GET")
                .value_parser(value_parser!(String))
                .action(ArgAction::Set),
        )
        .arg(
            arg!(--url <URL>)
                .help("API URL to request")
                .required(false)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(String))
                .action(ArgAction::Set),
        )
        .arg(
            arg!(--headers <HEADERS>)
                .help("HTTP headers as key:value,key:value")
                .required(false)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(String))
                .action(ArgAction::Set),
        )
        .arg(
            arg!(--body <BODY>)
                .help("Request body")
                .required(false)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(String))
                .action(ArgAction::Set),
        )
        .arg(
            arg!(--save <FILE>)
                .help("Save request configuration to file")
                .required(false)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(String))
                .action(ArgAction::Set),
        )
        .arg(
            arg!(--load <FILE>)
                .help("Load request configuration from file")
                .required(false)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(String))
                .action(ArgAction::Set),
        )
}

pub fn parse_args<I, T>(args: I) -> Result<CliOptions, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let matches = command().try_get_matches_from(normalize_args(args))?;
    return Ok(CliOptions::from_matches(&matches));
}

impl CliOptions {
    fn from_matches(matches: &ArgMatches) -> CliOptions {
        let text = |id: &str| matches.get_one::<String>(id).cloned().unwrap_or_default();
        let non_empty = |id: &str| matches.get_one::<String>(id).filter(|v| !v.is_empty()).cloned();
        return CliOptions {
            method: text("method"),
            url: non_empty("url"),
            headers: text("headers"),
            body: text("body"),
            save: non_empty("save").map(PathBuf::from),
            load: non_empty("load").map(PathBuf::from),
        };
    }
}

/// Rewrites go style `-url x` / `-url=x` into `--url x` / `--url=x`.
///
/// The argument following a value option is left untouched, as is everything after `--`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut pending_value = false;

    while let Some(arg) = args.next() {
        if pending_value {
            pending_value = false;
            normalized.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };
        if text == "--" {
            normalized.push(arg);
            normalized.extend(args.by_ref());
            break;
        }
        match option_name(text) {
            Some(name) => {
                pending_value = VALUE_OPTIONS.contains(&name) && !text.contains('=');
                if text.starts_with("--") {
                    normalized.push(arg);
                } else {
                    normalized.push(OsString::from(format!("-{}", text)));
                }
            }
            None => normalized.push(arg),
        }
    }
    return normalized;
}

fn option_name(arg: &str) -> Option<&str> {
    let stripped = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))?;
    let name = stripped.split_once('=').map_or(stripped, |(name, _)| name);
    if VALUE_OPTIONS.contains(&name) || FLAG_OPTIONS.contains(&name) {
        return Some(name);
    }
    return None;
}
