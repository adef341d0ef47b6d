// ABOUTME: Local preview server for the deck-viewer application
// ABOUTME: Serves the most recently rendered deck page over HTTP

use log::{debug, error, info};
use parking_lot::RwLock;
use std::sync::Arc;
use std::thread;

use tiny_http::{Header, Response, Server, StatusCode};

use crate::errors::{DeckError, Result};

/// The page currently being served. Replaced wholesale whenever a new deck
/// is rendered.
#[derive(Debug, Clone, Default)]
pub struct SharedPage {
    inner: Arc<RwLock<String>>,
}

impl SharedPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(html.into())),
        }
    }

    pub fn replace(&self, html: impl Into<String>) {
        *self.inner.write() = html.into();
    }

    pub fn get(&self) -> String {
        self.inner.read().clone()
    }
}

/// Start a simple HTTP server on a background thread. `/` (and
/// `/index.html`) return the current page; everything else is a 404.
/// Returns the port actually bound, which differs from `port` when 0 is given.
pub fn start_server(page: SharedPage, port: u16) -> Result<u16> {
    let server = Server::http(format!("127.0.0.1:{}", port))
        .map_err(|e| DeckError::ServerError(format!("Failed to start HTTP server: {}", e)))?;
    let bound_port = server
        .server_addr()
        .to_ip()
        .map(|addr| addr.port())
        .unwrap_or(port);

    thread::spawn(move || {
        info!("HTTP server listening on http://localhost:{}", bound_port);

        for request in server.incoming_requests() {
            let url_path = request.url().split('?').next().unwrap_or("/").to_string();
            debug!("Request for {:?}", url_path);

            let response = match url_path.as_str() {
                "/" | "/index.html" => {
                    let mut response = Response::from_string(page.get());
                    if let Ok(header) =
                        Header::from_bytes("Content-Type", "text/html; charset=utf-8")
                    {
                        response = response.with_header(header);
                    }
                    response
                }
                _ => Response::from_string("404 Not Found").with_status_code(StatusCode(404)),
            };

            if let Err(e) = request.respond(response) {
                error!("Failed to send response: {}", e);
            }
        }
    });

    Ok(bound_port)
}
