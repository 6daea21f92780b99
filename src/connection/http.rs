use crate::error::Result;
use hyper::body::{to_bytes, Bytes};
use hyper::client::HttpConnector;
use hyper::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use hyper::{Body, Client, Method, Request, Response};
use hyper_tls::HttpsConnector;
use std::time::Instant;

pub type HttpHeader = (HeaderName, HeaderValue);

/// Issues single requests and buffers the complete response body.
#[derive(Debug, Clone)]
pub struct HttpSender {
    client: Client<HttpsConnector<HttpConnector>>,
}

impl HttpSender {
    pub fn new() -> Self {
        let client = Client::builder().build::<_, Body>(HttpsConnector::new());
        Self { client }
    }

    pub async fn send(&self, request: Request<Body>) -> Result<Response<Bytes>> {
        let uri = request.uri().clone();
        let now = Instant::now();
        let response = self.client.request(request).await?;
        let (parts, body) = response.into_parts();
        let body = to_bytes(body).await?;
        debug!(
            "Received response {} from {} in {} ms",
            parts.status,
            uri,
            now.elapsed().as_millis()
        );
        Ok(Response::from_parts(parts, body))
    }

    pub async fn post_json(
        &self,
        url: &str,
        header: Option<HttpHeader>,
        body: Vec<u8>,
    ) -> Result<Response<Bytes>> {
        let mut request = Request::builder()
            .uri(url)
            .method(Method::POST)
            .header(CONTENT_TYPE, "application/json");
        if let Some((name, value)) = header {
            request = request.header(name, value);
        }
        self.send(request.body(Body::from(body))?).await
    }
}
