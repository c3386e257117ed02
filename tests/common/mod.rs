// One-shot file server for tests: an axum app on its own runtime thread
// that records every request it gets and answers with a canned reply.

#![allow(dead_code)]

use axum::body::Bytes;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use std::net::SocketAddr;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[derive(Debug)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl CapturedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub struct OneShotServer {
    pub base_url: String,
    requests: mpsc::Receiver<CapturedRequest>,
}

impl OneShotServer {
    pub fn start(status: StatusCode, body: &'static str) -> Self {
        let (addr_tx, addr_rx) = mpsc::channel::<SocketAddr>();
        let (req_tx, req_rx) = mpsc::channel();

        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
                addr_tx.send(listener.local_addr().unwrap()).unwrap();

                let app = Router::new().fallback(
                    move |method: Method, uri: Uri, headers: HeaderMap, payload: Bytes| {
                        let req_tx = req_tx.clone();
                        async move {
                            let _ = req_tx.send(CapturedRequest {
                                method,
                                path: uri.path().to_string(),
                                headers,
                                body: payload,
                            });
                            (status, [(header::CONTENT_TYPE, "application/json")], body)
                        }
                    },
                );
                axum::serve(listener, app).await.unwrap();
            });
        });

        let addr = addr_rx.recv().unwrap();
        OneShotServer {
            base_url: format!("http://{addr}"),
            requests: req_rx,
        }
    }

    /// The request the server received.
    pub fn request(self) -> CapturedRequest {
        self.requests
            .recv_timeout(Duration::from_secs(10))
            .expect("server received no request")
    }
}

/// Address nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
