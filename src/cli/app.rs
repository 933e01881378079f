//! Main app runner for one invocation
//!
//! Every path through [`run`] ends in exactly one envelope line on the given
//! output and an exit code consistent with it.

use std::env;
use std::ffi::OsString;
use std::io::{Read, Write};
use std::process::ExitCode;

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::application::{BridgeError, Dispatcher};
use crate::domain::config::BridgeSettings;
use crate::domain::envelope::{ResponseEnvelope, EXIT_ERROR};
use crate::infrastructure::{PackageRoot, PythonPackage, XdgSettingsStore};

use super::args::Cli;
use super::input::read_payload;
use super::presenter::Presenter;

/// Run one invocation with the default settings store
pub async fn run<I, T>(args: I, input: impl Read, out: impl Write) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    ExitCode::from(run_with_store(args, input, out, &XdgSettingsStore::new()).await)
}

/// Run one invocation, reading bridge settings from `store`, and return the
/// process exit code
pub async fn run_with_store<I, T>(
    args: I,
    input: impl Read,
    out: impl Write,
    store: &XdgSettingsStore,
) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let envelope = match execute(args, input, store).await {
        Ok(data) => ResponseEnvelope::success(data),
        Err(e) => {
            warn!(kind = %e.kind(), error = %e, "invocation failed");
            ResponseEnvelope::failure(e.to_string())
        }
    };

    if let Err(e) = Presenter::new(out).present(&envelope) {
        error!(error = %e, "failed to write response");
        return EXIT_ERROR;
    }

    envelope.exit_code()
}

async fn execute<I, T>(
    args: I,
    input: impl Read,
    store: &XdgSettingsStore,
) -> Result<Value, BridgeError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            return match e.kind() {
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                    Ok(Value::String(e.to_string()))
                }
                _ => Err(BridgeError::Arguments(argument_error_message(&e.to_string()))),
            };
        }
    };

    let operation = cli.operation_name().ok_or(BridgeError::MissingOperation)?;

    let settings = load_merged_settings(&cli, store).await?;
    let root = PackageRoot::resolve(&settings.root_or_default())?;
    let python = settings.python_or_default();
    let search_path = root.search_path(env::var_os("PYTHONPATH").as_deref())?;
    debug!(root = %root.path().display(), python = %python.display(), "package located");

    let dispatcher = Dispatcher::new(
        PythonPackage::new(python, search_path),
        root.path().to_path_buf(),
    );

    let payload = read_payload(input)?;

    let result = dispatcher.run(operation, &payload).await?;
    debug!(%operation, "operation succeeded");
    Ok(result.normalize())
}

/// Merge settings: defaults < settings file < environment/command line
pub async fn load_merged_settings(
    cli: &Cli,
    store: &XdgSettingsStore,
) -> Result<BridgeSettings, BridgeError> {
    let file_settings = store.load().await?;

    Ok(BridgeSettings::defaults()
        .merge(file_settings)
        .merge(cli.settings()))
}

/// First line of a clap error without its `error: ` prefix
fn argument_error_message(rendered: &str) -> String {
    let first = rendered.lines().next().unwrap_or_default().trim();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
