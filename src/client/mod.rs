pub mod diagnostics;
pub mod progress;

use self::progress::ProgressLogger;
use crate::authentication::Credentials;
use crate::configuration::constants::diagnostics::{AUTHENTICATION_ERROR_FILE, UPLOAD_ERROR_FILE};
use crate::configuration::constants::xray::{CLOUD_AUTHENTICATION_PATH, CLOUD_URL};
use crate::configuration::options::{Options, Settings};
use crate::connection::HttpSender;
use crate::error::{Error, Result};
use crate::reporter::xray::model::XrayTestExecutionResults;
use crate::reporter::xray::TargetVariant;
use std::path::PathBuf;
use std::time::Duration;

/// Uploads converted execution results to Xray server or cloud.
#[derive(Debug)]
pub struct XrayClient {
    variant: TargetVariant,
    base_url: String,
    credentials: Credentials,
    sender: HttpSender,
    progress_interval: Duration,
    diagnostics_directory: PathBuf,
}

impl XrayClient {
    pub fn new(
        variant: TargetVariant,
        base_url: impl Into<String>,
        credentials: Credentials,
        options: &Options,
    ) -> Self {
        Self {
            variant,
            base_url: base_url.into(),
            credentials,
            sender: HttpSender::new(),
            progress_interval: options.xray.progress_interval,
            diagnostics_directory: options.plugin.diagnostics_directory.clone(),
        }
    }

    /// Picks the upload target from the configured secrets. Xray cloud API
    /// keys win over Jira server credentials.
    pub fn from_settings(settings: &Settings, options: &Options) -> Result<Self> {
        if let (Some(client_id), Some(client_secret)) =
            (&settings.xray_client_id, &settings.xray_client_secret)
        {
            info!("Xray client ID and client secret found. Setting up Xray cloud credentials.");
            let credentials = Credentials::Jwt {
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
                authentication_url: format!("{}{}", CLOUD_URL, CLOUD_AUTHENTICATION_PATH),
            };
            return Ok(Self::new(TargetVariant::Cloud, CLOUD_URL, credentials, options));
        }
        let url = match &settings.jira_url {
            Some(url) => url,
            None => return Err(no_viable_configuration()),
        };
        if let Some(token) = &settings.jira_api_token {
            info!("Jira PAT found. Setting up Xray PAT credentials.");
            let credentials = Credentials::Pat {
                token: token.clone(),
            };
            return Ok(Self::new(TargetVariant::Server, url.as_str(), credentials, options));
        }
        if let (Some(username), Some(password)) = (&settings.jira_username, &settings.jira_password)
        {
            info!("Jira username and password found. Setting up Xray basic auth credentials.");
            let credentials = Credentials::Basic {
                username: username.clone(),
                password: password.clone(),
            };
            return Ok(Self::new(TargetVariant::Server, url.as_str(), credentials, options));
        }
        Err(no_viable_configuration())
    }

    #[inline]
    pub fn variant(&self) -> TargetVariant {
        self.variant
    }

    /// Uploads `results` and returns the key of the test execution issue
    /// Xray created or updated. Results without any test are not uploaded
    /// and yield `None`.
    pub async fn import_execution_results(
        &self,
        results: &XrayTestExecutionResults,
    ) -> Result<Option<String>> {
        if !results.has_tests() {
            warn!("No tests linked to Xray were executed. Skipping upload.");
            return Ok(None);
        }
        let header = match self.credentials.authentication_header(&self.sender).await {
            Ok(header) => header,
            Err(e) => {
                let error = Error::Authentication(Box::new(e));
                error!("{}", error);
                self.write_error_file(&error, AUTHENTICATION_ERROR_FILE);
                return Err(error);
            }
        };
        let url = self.variant.import_url(&self.base_url);
        info!("Uploading test results to {}...", url);
        let body = serde_json::to_vec(results)?;
        let response = {
            let _progress = ProgressLogger::start(url.clone(), self.progress_interval);
            self.sender.post_json(&url, Some(header), body).await
        };
        let outcome = response.and_then(|response| {
            if response.status().is_success() {
                self.variant.issue_key(response.body())
            } else {
                Err(Error::Http {
                    status: response.status(),
                    body: String::from_utf8_lossy(response.body()).into_owned(),
                })
            }
        });
        match outcome {
            Ok(key) => {
                info!("Successfully uploaded test execution results to {}.", key);
                Ok(Some(key))
            }
            Err(e) => {
                let error = Error::Upload(Box::new(e));
                error!("{}", error);
                self.write_error_file(&error, UPLOAD_ERROR_FILE);
                Err(error)
            }
        }
    }

    fn write_error_file(&self, error: &Error, name: &str) {
        match diagnostics::write_error_file(&self.diagnostics_directory, name, error) {
            Ok(path) => error!(
                "Complete error logs have been written to \"{}\"",
                path.display()
            ),
            Err(e) => error!("Failed to write error logs: {}", e),
        }
    }
}

fn no_viable_configuration() -> Error {
    Error::Configuration(
        "Failed to configure Xray uploader: no viable Xray configuration was found or the configuration you provided is not supported"
            .to_owned(),
    )
}
