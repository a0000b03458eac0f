//! Minimal HTTP/1.1 stub of the catalog API
//!
//! Serves canned JSON bodies keyed by request target (path plus query, relative
//! to `/api/v2`). Unknown targets answer 404. Every connection is closed after
//! one response.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

pub const API_PREFIX: &str = "/api/v2";

#[derive(Clone)]
struct Route {
    status: u16,
    body: String,
}

pub struct StubServer {
    port: u16,
    hits: Arc<Mutex<HashMap<String, usize>>>,
}

#[derive(Default)]
pub struct StubServerBuilder {
    routes: HashMap<String, Route>,
}

impl StubServerBuilder {
    /// Answer `target` (e.g. "/pokemon/pikachu") with a 200 JSON body
    pub fn json(mut self, target: &str, body: impl Into<String>) -> Self {
        self.routes.insert(
            target.to_string(),
            Route {
                status: 200,
                body: body.into(),
            },
        );
        self
    }

    /// Answer `target` with an arbitrary status
    pub fn status(mut self, target: &str, status: u16) -> Self {
        self.routes.insert(
            target.to_string(),
            Route {
                status,
                body: r#"{"detail":"stub"}"#.to_string(),
            },
        );
        self
    }

    pub fn start(self) -> StubServer {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let port = listener.local_addr().expect("local addr").port();
        let routes = Arc::new(self.routes);
        let hits: Arc<Mutex<HashMap<String, usize>>> = Arc::new(Mutex::new(HashMap::new()));

        let server_hits = Arc::clone(&hits);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let hits = Arc::clone(&server_hits);
                thread::spawn(move || handle(stream, &routes, &hits));
            }
        });

        StubServer { port, hits }
    }
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>, hits: &Mutex<HashMap<String, usize>>) {
    let mut reader = match stream.try_clone() {
        Ok(clone) => BufReader::new(clone),
        Err(_) => return,
    };

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) => break,
            Ok(_) if header == "\r\n" || header == "\n" => break,
            Ok(_) => continue,
            Err(_) => return,
        }
    }

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let target = target.strip_prefix(API_PREFIX).unwrap_or(target).to_string();
    *hits.lock().unwrap().entry(target.clone()).or_default() += 1;

    let route = routes.get(&target).cloned().unwrap_or(Route {
        status: 404,
        body: r#"{"detail":"Not found."}"#.to_string(),
    });
    let reason = match route.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Stub",
    };

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        route.status,
        reason,
        route.body.len(),
        route.body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

impl StubServer {
    pub fn builder() -> StubServerBuilder {
        StubServerBuilder::default()
    }

    /// Base URL to pass through `--api-url`
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}{}", self.port, API_PREFIX)
    }

    /// How many requests hit `target`
    pub fn hits(&self, target: &str) -> usize {
        self.hits.lock().unwrap().get(target).copied().unwrap_or(0)
    }
}
