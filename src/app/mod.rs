pub mod hooks;

use self::hooks::{HookState, SkipCause};
use crate::client::XrayClient;
use crate::configuration::constants::cargo_env::{CARGO_PKG_NAME, CARGO_PKG_VERSION};
use crate::configuration::options::{Options, Settings};
use crate::conversion::ExecutionResultsConverter;
use crate::error::Result;
use crate::runner::{RunResult, RunStatus};
use std::convert::TryFrom;
use std::path::{Path, PathBuf};

/// Runner lifecycle hooks sharing one validated configuration and one
/// upload client.
#[derive(Debug)]
pub struct App {
    options: Options,
    client: XrayClient,
    state: HookState,
}

impl App {
    /// Validates the configuration and sets up the upload client. Nothing is
    /// sent over the network yet.
    pub fn before_run(settings: &Settings) -> Result<Self> {
        info!("{} {}", CARGO_PKG_NAME, CARGO_PKG_VERSION);
        let options = Options::try_from(settings)?;
        debug!("Using options {:#?}", options);
        let client = XrayClient::from_settings(settings, &options)?;
        Ok(Self::with_client(options, client))
    }

    pub fn with_client(options: Options, client: XrayClient) -> Self {
        Self {
            options,
            client,
            state: HookState::Idle,
        }
    }

    #[inline]
    pub fn state(&self) -> &HookState {
        &self.state
    }

    /// Converts the run's results and uploads them. Failures of either step
    /// abort the hook and leave the state at `Converting`.
    pub async fn after_run(&mut self, results: &RunResult) -> Result<&HookState> {
        if results.status == RunStatus::Failed {
            error!(
                "Aborting: failed to run {} tests: {}",
                results.failures,
                results.message.as_deref().unwrap_or_default()
            );
            self.state = HookState::Skipped(SkipCause::RunFailed);
            return Ok(&self.state);
        }
        if !self.options.xray.upload_results {
            info!("Skipping results upload: Plugin is configured to not upload test results.");
            self.state = HookState::Skipped(SkipCause::UploadDisabled);
            return Ok(&self.state);
        }
        self.state = HookState::Converting;
        let converter = ExecutionResultsConverter::new(&self.options, self.client.variant())?;
        let outcome = converter.convert(results)?;
        if !outcome.skipped.is_empty() {
            debug!("{} tests were left out of the upload", outcome.skipped.len());
        }
        let key = self.client.import_execution_results(&outcome.results).await?;
        self.state = HookState::Uploaded(key);
        Ok(&self.state)
    }
}

/// Returns the file the runner should execute in place of `file`. Spec files
/// are executed as they are.
pub fn file_preprocessor(file: &Path) -> PathBuf {
    if file.extension().map_or(false, |extension| extension == "feature") {
        debug!("Passing feature file {} through unchanged", file.display());
    }
    file.to_path_buf()
}
