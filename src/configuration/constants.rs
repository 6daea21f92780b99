pub mod cargo_env {
    pub const CARGO_PKG_NAME: &str = env!("CARGO_PKG_NAME");
    pub const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

pub mod defaults {
    pub const TEST_TYPE: &str = "Manual";
    pub const MAX_LENGTH_ACTION: usize = 8000;
    pub const PROGRESS_INTERVAL_SECS: u64 = 10;
    pub const DIAGNOSTICS_DIRECTORY: &str = ".";
}

pub mod xray {
    pub const CLOUD_URL: &str = "https://xray.cloud.getxray.app/api/v2";
    pub const CLOUD_AUTHENTICATION_PATH: &str = "/authenticate";
    pub const CLOUD_IMPORT_PATH: &str = "/import/execution";
    pub const SERVER_IMPORT_PATH: &str = "/rest/raven/latest/api/import/execution";
}

pub mod diagnostics {
    pub const AUTHENTICATION_ERROR_FILE: &str = "authenticationError";
    pub const UPLOAD_ERROR_FILE: &str = "uploadError";
}
