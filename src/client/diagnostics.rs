use crate::error::{Error, Result};
use hyper::StatusCode;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes a failed call's error to `<directory>/<name>.json` if it carries
/// an HTTP response, or to `<directory>/<name>.log` otherwise.
pub fn write_error_file(directory: &Path, name: &str, error: &Error) -> Result<PathBuf> {
    fs::create_dir_all(directory).map_err(|e| Error::io(directory, e))?;
    let (path, data) = match http_response(error) {
        Some((status, body)) => {
            let response =
                serde_json::from_str::<Value>(body).unwrap_or_else(|_| Value::from(body));
            let data = json!({
                "error": error.to_string(),
                "status": status.as_u16(),
                "response": response,
            });
            (directory.join(format!("{}.json", name)), data.to_string())
        }
        None => (
            directory.join(format!("{}.log", name)),
            serde_json::to_string(&error.to_string())?,
        ),
    };
    fs::write(&path, data).map_err(|e| Error::io(&path, e))?;
    Ok(path)
}

fn http_response(error: &Error) -> Option<(StatusCode, &str)> {
    match error {
        Error::Http { status, body } => Some((*status, body)),
        Error::Authentication(inner) | Error::Upload(inner) => http_response(inner),
        _ => None,
    }
}
