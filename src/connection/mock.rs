//! In-process HTTP server answering with canned responses.

use hyper::body::{to_bytes, Bytes};
use hyper::header::AUTHORIZATION;
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server, StatusCode};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
pub struct MockRoute {
    pub path: &'static str,
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub body: Bytes,
}

pub struct MockServer {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockRoute {
    pub fn new(path: &'static str, status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            path,
            status,
            body: body.into(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl MockServer {
    pub async fn start(routes: Vec<MockRoute>) -> Self {
        let routes = Arc::new(routes);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let make_service = {
            let requests = requests.clone();
            make_service_fn(move |_| {
                let routes = routes.clone();
                let requests = requests.clone();
                async move {
                    Ok::<_, Infallible>(service_fn(move |request| {
                        respond(routes.clone(), requests.clone(), request)
                    }))
                }
            })
        };
        let server = Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0))).serve(make_service);
        let url = format!("http://{}", server.local_addr());
        tokio::spawn(server);
        Self { url, requests }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn respond(
    routes: Arc<Vec<MockRoute>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    request: Request<Body>,
) -> Result<Response<Body>, Infallible> {
    let path = request.uri().path().to_owned();
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = to_bytes(request.into_body()).await.unwrap_or_default();
    requests.lock().unwrap().push(RecordedRequest {
        path: path.clone(),
        authorization,
        body,
    });
    let route = routes.iter().find(|route| route.path == path).cloned();
    let response = match route {
        Some(route) => {
            if let Some(delay) = route.delay {
                tokio::time::delay_for(delay).await;
            }
            Response::builder()
                .status(route.status)
                .body(Body::from(route.body))
        }
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::empty()),
    };
    Ok(response.unwrap())
}
