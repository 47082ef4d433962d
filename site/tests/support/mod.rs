#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use majestea_core::{ApiError, HttpRequest, HttpResponse};
use majestea_site::{SiteApi, Transport};
use tokio::sync::Notify;

pub const BACKEND: &str = "http://backend.test";

#[derive(Clone)]
enum Reply {
    Respond { status: u16, body: String },
    Panic,
}

#[derive(Clone)]
struct Route {
    reply: Reply,
    gate: Option<Arc<Notify>>,
}

/// Transport answering from a table keyed by `"METHOD /api/path"`. Unknown
/// routes fail like an unreachable host.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    routes: Arc<Mutex<HashMap<String, Route>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, route: &str, status: u16, body: impl Into<String>) -> &Self {
        self.routes.lock().unwrap().insert(
            route.to_string(),
            Route {
                reply: Reply::Respond {
                    status,
                    body: body.into(),
                },
                gate: None,
            },
        );
        self
    }

    pub fn panic_on(&self, route: &str) -> &Self {
        self.routes.lock().unwrap().insert(
            route.to_string(),
            Route {
                reply: Reply::Panic,
                gate: None,
            },
        );
        self
    }

    pub fn remove(&self, route: &str) -> &Self {
        self.routes.lock().unwrap().remove(route);
        self
    }

    /// Hold replies on `route` until the returned `Notify` is signalled.
    pub fn gate(&self, route: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        let mut routes = self.routes.lock().unwrap();
        let entry = routes.get_mut(route).expect("gate on an unknown route");
        entry.gate = Some(Arc::clone(&gate));
        gate
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, route: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| key(r) == route)
            .count()
    }
}

fn key(request: &HttpRequest) -> String {
    let path = request.path.strip_prefix(BACKEND).unwrap_or(&request.path);
    format!("{} {path}", request.method)
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let route = self.routes.lock().unwrap().get(&key(&request)).cloned();
        self.requests.lock().unwrap().push(request);

        let Some(route) = route else {
            return Err(ApiError::Transport("connection refused".to_string()));
        };
        if let Some(gate) = route.gate {
            gate.notified().await;
        }
        match route.reply {
            Reply::Respond { status, body } => Ok(HttpResponse::new(status, body)),
            Reply::Panic => panic!("scripted transport panic"),
        }
    }
}

pub fn api(transport: &ScriptedTransport) -> SiteApi<ScriptedTransport> {
    SiteApi::new(BACKEND, transport.clone())
}

pub fn json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap()
}

/// Transport serving the mock backend's seed content on all four content routes.
pub fn seeded_transport() -> ScriptedTransport {
    let transport = ScriptedTransport::new();
    transport
        .respond("GET /api/restaurant", 200, json(&mock_server::seed::restaurant()))
        .respond("GET /api/menu", 200, json(&mock_server::seed::menu()))
        .respond("GET /api/reviews", 200, json(&mock_server::seed::reviews()))
        .respond("GET /api/gallery", 200, json(&mock_server::seed::gallery()));
    transport
}
