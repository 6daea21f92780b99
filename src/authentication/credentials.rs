use crate::connection::{HttpHeader, HttpSender};
use crate::error::{Error, Result};
use derivative::*;
use hyper::header::{HeaderValue, AUTHORIZATION};
use serde_derive::Serialize;

/// Secrets which can be turned into an `Authorization` header.
#[derive(Derivative, Clone, PartialEq)]
#[derivative(Debug)]
pub enum Credentials {
    Basic {
        username: String,
        #[derivative(Debug = "ignore")]
        password: String,
    },
    /// Jira personal access token.
    Pat {
        #[derivative(Debug = "ignore")]
        token: String,
    },
    /// Xray cloud API key, exchanged for a JSON web token on every use.
    Jwt {
        client_id: String,
        #[derivative(Debug = "ignore")]
        client_secret: String,
        authentication_url: String,
    },
}

#[derive(Serialize)]
struct JwtRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
}

impl Credentials {
    pub async fn authentication_header(&self, sender: &HttpSender) -> Result<HttpHeader> {
        let value = match self {
            Credentials::Basic { username, password } => {
                let encoded = base64::encode(format!("{}:{}", username, password));
                format!("Basic {}", encoded)
            }
            Credentials::Pat { token } => format!("Bearer {}", token),
            Credentials::Jwt {
                client_id,
                client_secret,
                authentication_url,
            } => {
                info!("Authenticating to {}...", authentication_url);
                let body = serde_json::to_vec(&JwtRequest {
                    client_id,
                    client_secret,
                })?;
                let response = sender.post_json(authentication_url, None, body).await?;
                if !response.status().is_success() {
                    return Err(Error::Http {
                        status: response.status(),
                        body: String::from_utf8_lossy(response.body()).into_owned(),
                    });
                }
                let token: String = serde_json::from_slice(response.body())?;
                info!("Authentication successful.");
                format!("Bearer {}", token)
            }
        };
        let mut value = HeaderValue::from_str(&value)?;
        value.set_sensitive(true);
        Ok((AUTHORIZATION, value))
    }
}
