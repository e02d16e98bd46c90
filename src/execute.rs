use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::debug;

use crate::cli::CliOptions;
use crate::config_store;
use crate::errors::{ExecutorError, UsageError};
use crate::header_parser::parse_headers;
use crate::http_request_executor::{execute_http_request, ExecutionContext};
use crate::request_config::RequestConfig;

/// What a single invocation does.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Load(PathBuf),
    Save(RequestConfig, PathBuf),
    Execute(RequestConfig),
}

impl Action {
    /// `load` wins over every request building option; otherwise the url is required.
    pub fn from_options(options: &CliOptions) -> Result<Action, UsageError> {
        if let Some(path) = &options.load {
            return Ok(Action::Load(path.clone()));
        }
        let url = options.url.as_deref().ok_or(UsageError::MissingUrl)?;
        let config = RequestConfig::new(&options.method, url, parse_headers(&options.headers), &options.body);
        return Ok(match &options.save {
            Some(path) => Action::Save(config, path.clone()),
            None => Action::Execute(config),
        });
    }
}

/// Runs one invocation, writing the result lines to `out`.
///
/// Every error carries the label it is reported under as its outermost context.
pub fn run(options: &CliOptions, out: &mut impl Write) -> Result<()> {
    let action = Action::from_options(options).context("Error")?;
    debug!("{:?}", action);
    match action {
        Action::Load(path) => {
            let config = config_store::load(&path).context("Error loading request configuration")?;
            execute_request(&config, out)
        }
        Action::Save(config, path) => {
            config_store::save(&config, &path).context("Error saving request configuration")?;
            writeln!(out, "Request configuration saved to {}", path.display()).context("Error writing output")?;
            Ok(())
        }
        Action::Execute(config) => execute_request(&config, out),
    }
}

fn execute_request(config: &RequestConfig, out: &mut impl Write) -> Result<()> {
    let context = ExecutionContext::new().map_err(labelled)?;
    let response = execute_http_request(config, &context).map_err(labelled)?;
    writeln!(out, "{}", response).context("Error writing output")?;
    Ok(())
}

fn labelled(err: ExecutorError) -> anyhow::Error {
    let label = err.label();
    anyhow::Error::new(err).context(label)
}
