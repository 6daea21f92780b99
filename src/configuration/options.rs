use crate::configuration::constants::defaults;
use crate::conversion::text::ELLIPSIS;
use crate::error::{Error, Result};
use config::{Config, Environment, File};
use derivative::*;
use serde_derive::Deserialize;
use std::convert::TryFrom;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Flat view of every recognised option, as found in the configuration file
/// and the environment. Keys are case-insensitive, so `JIRA_PROJECT_KEY`
/// and `jira_project_key` both land in `jira_project_key`.
#[derive(Deserialize, Derivative, Default, Clone)]
#[derivative(Debug)]
#[serde(default)]
pub struct Settings {
    pub jira_project_key: Option<String>,
    pub jira_url: Option<String>,
    pub jira_test_execution_issue_key: Option<String>,
    pub jira_test_plan_issue_key: Option<String>,
    pub jira_test_execution_issue_summary: Option<String>,
    pub jira_test_execution_issue_description: Option<String>,
    pub jira_create_test_issues: Option<bool>,
    pub jira_username: Option<String>,
    #[derivative(Debug = "ignore")]
    pub jira_password: Option<String>,
    #[derivative(Debug = "ignore")]
    pub jira_api_token: Option<String>,

    pub xray_client_id: Option<String>,
    #[derivative(Debug = "ignore")]
    pub xray_client_secret: Option<String>,
    pub xray_test_type: Option<String>,
    pub xray_upload_results: Option<bool>,
    pub xray_upload_screenshots: Option<bool>,
    pub xray_status_passed: Option<String>,
    pub xray_status_failed: Option<String>,
    pub xray_status_pending: Option<String>,
    pub xray_status_skipped: Option<String>,
    pub xray_steps_update: Option<bool>,
    pub xray_steps_max_length_action: Option<usize>,
    #[serde(with = "crate::configuration::deserialize::duration")]
    pub xray_progress_interval: Option<Duration>,

    pub plugin_normalize_screenshot_names: Option<bool>,
    pub plugin_diagnostics_directory: Option<PathBuf>,
    pub plugin_debug: Option<bool>,
}

impl Settings {
    /// Loads the optional configuration file, then lets environment
    /// variables override whatever it contains.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut config = Config::new();
        if let Some(file) = file {
            config.merge(File::from(file.to_path_buf()))?;
        }
        config.merge(Environment::new())?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        Ok(config.try_into()?)
    }

    #[inline]
    pub fn debug(&self) -> bool {
        self.plugin_debug.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub jira: JiraOptions,
    pub xray: XrayOptions,
    pub plugin: PluginOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JiraOptions {
    pub project_key: String,
    pub url: Option<String>,
    pub test_execution_issue_key: Option<String>,
    pub test_plan_issue_key: Option<String>,
    pub test_execution_issue_summary: Option<String>,
    pub test_execution_issue_description: Option<String>,
    pub create_test_issues: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct XrayOptions {
    pub test_type: String,
    pub upload_results: bool,
    pub upload_screenshots: bool,
    pub status: StatusOptions,
    pub steps: StepOptions,
    pub progress_interval: Duration,
}

/// Custom Xray status names, replacing the variant's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusOptions {
    pub passed: Option<String>,
    pub failed: Option<String>,
    pub pending: Option<String>,
    pub skipped: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepOptions {
    pub update: bool,
    pub max_length_action: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PluginOptions {
    pub normalize_screenshot_names: bool,
    pub diagnostics_directory: PathBuf,
    pub debug: bool,
}

impl Options {
    /// Options with every value at its default.
    pub fn new(project_key: impl Into<String>) -> Self {
        Self {
            jira: JiraOptions {
                project_key: project_key.into(),
                url: None,
                test_execution_issue_key: None,
                test_plan_issue_key: None,
                test_execution_issue_summary: None,
                test_execution_issue_description: None,
                create_test_issues: true,
            },
            xray: XrayOptions {
                test_type: defaults::TEST_TYPE.to_owned(),
                upload_results: true,
                upload_screenshots: true,
                status: StatusOptions::default(),
                steps: StepOptions {
                    update: true,
                    max_length_action: defaults::MAX_LENGTH_ACTION,
                },
                progress_interval: Duration::from_secs(defaults::PROGRESS_INTERVAL_SECS),
            },
            plugin: PluginOptions {
                normalize_screenshot_names: false,
                diagnostics_directory: PathBuf::from(defaults::DIAGNOSTICS_DIRECTORY),
                debug: false,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.jira.project_key.trim().is_empty() {
            return Err(Error::Configuration(
                "Jira project key was not set (JIRA_PROJECT_KEY)".to_owned(),
            ));
        }
        if self.xray.steps.max_length_action < ELLIPSIS.len() {
            return Err(Error::Configuration(format!(
                "maximum step action length must be at least {}, got {} (XRAY_STEPS_MAX_LENGTH_ACTION)",
                ELLIPSIS.len(),
                self.xray.steps.max_length_action
            )));
        }
        if self.xray.progress_interval == Duration::default() {
            return Err(Error::Configuration(
                "progress interval must not be zero (XRAY_PROGRESS_INTERVAL)".to_owned(),
            ));
        }
        Ok(())
    }
}

impl TryFrom<&Settings> for Options {
    type Error = Error;

    fn try_from(settings: &Settings) -> Result<Self> {
        let project_key = settings.jira_project_key.clone().ok_or_else(|| {
            Error::Configuration("Jira project key was not set (JIRA_PROJECT_KEY)".to_owned())
        })?;
        let mut options = Options::new(project_key);

        let jira = &mut options.jira;
        jira.url = settings.jira_url.clone();
        jira.test_execution_issue_key = settings.jira_test_execution_issue_key.clone();
        jira.test_plan_issue_key = settings.jira_test_plan_issue_key.clone();
        jira.test_execution_issue_summary = settings.jira_test_execution_issue_summary.clone();
        jira.test_execution_issue_description =
            settings.jira_test_execution_issue_description.clone();
        if let Some(create) = settings.jira_create_test_issues {
            jira.create_test_issues = create;
        }

        let xray = &mut options.xray;
        if let Some(test_type) = &settings.xray_test_type {
            xray.test_type = test_type.clone();
        }
        if let Some(upload) = settings.xray_upload_results {
            xray.upload_results = upload;
        }
        if let Some(upload) = settings.xray_upload_screenshots {
            xray.upload_screenshots = upload;
        }
        xray.status = StatusOptions {
            passed: settings.xray_status_passed.clone(),
            failed: settings.xray_status_failed.clone(),
            pending: settings.xray_status_pending.clone(),
            skipped: settings.xray_status_skipped.clone(),
        };
        if let Some(update) = settings.xray_steps_update {
            xray.steps.update = update;
        }
        if let Some(max_length) = settings.xray_steps_max_length_action {
            xray.steps.max_length_action = max_length;
        }
        if let Some(interval) = settings.xray_progress_interval {
            xray.progress_interval = interval;
        }

        let plugin = &mut options.plugin;
        if let Some(normalize) = settings.plugin_normalize_screenshot_names {
            plugin.normalize_screenshot_names = normalize;
        }
        if let Some(directory) = &settings.plugin_diagnostics_directory {
            plugin.diagnostics_directory = directory.clone();
        }
        plugin.debug = settings.debug();

        options.validate()?;
        Ok(options)
    }
}
