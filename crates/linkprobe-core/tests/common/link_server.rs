//! Minimal HTTP/1.1 server with a fixed set of link behaviours for integration tests.
//!
//! Routes:
//! - `/ok`         200 for HEAD and GET
//! - `/no-head`    405 for HEAD, 206/200 for GET
//! - `/missing`    404 for everything
//! - `/broken`     500 for everything
//! - `/teapot`     418 for everything
//! - `/loop`       302 back to itself
//! - `/large`      405 for HEAD, GET ignores Range and streams a large body
//!
//! Every request is recorded so tests can assert on call counts and headers.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const LARGE_BODY_LEN: usize = 1024 * 1024;

/// One request as seen by the server.
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: String,
    pub path: String,
    pub range: Option<String>,
    pub user_agent: Option<String>,
}

pub struct LinkServer {
    pub base_url: String,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl LinkServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn requests(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

/// Starts the server in a background thread. Runs until the process exits.
pub fn start() -> LinkServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, &log));
        }
    });
    LinkServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        seen,
    }
}

/// A URL on localhost with nothing listening.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, log: &Mutex<Vec<Seen>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let Ok(request) = std::str::from_utf8(&buf[..n]) else {
        return;
    };
    let seen = parse_request(request);
    log.lock().unwrap().push(seen.clone());

    let is_head = seen.method.eq_ignore_ascii_case("HEAD");
    match (seen.path.as_str(), is_head) {
        ("/ok", _) => respond(&mut stream, "200 OK", &[], b"ok", is_head),
        ("/no-head", true) | ("/large", true) => {
            respond(&mut stream, "405 Method Not Allowed", &[], b"", true)
        }
        ("/no-head", false) => {
            let status = if seen.range.is_some() {
                "206 Partial Content"
            } else {
                "200 OK"
            };
            respond(&mut stream, status, &[], b"partial", false)
        }
        ("/missing", _) => respond(&mut stream, "404 Not Found", &[], b"missing", is_head),
        ("/broken", _) => respond(&mut stream, "500 Internal Server Error", &[], b"oops", is_head),
        ("/teapot", _) => respond(&mut stream, "418 I'm a teapot", &[], b"short and stout", is_head),
        ("/loop", _) => respond(&mut stream, "302 Found", &["Location: /loop"], b"", is_head),
        ("/large", false) => {
            let body = vec![b'x'; LARGE_BODY_LEN];
            respond(&mut stream, "200 OK", &[], &body, false)
        }
        _ => respond(&mut stream, "404 Not Found", &[], b"", is_head),
    }
}

fn respond(stream: &mut TcpStream, status: &str, extra: &[&str], body: &[u8], head_only: bool) {
    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        status,
        body.len()
    );
    for line in extra {
        response.push_str(line);
        response.push_str("\r\n");
    }
    response.push_str("\r\n");
    let _ = stream.write_all(response.as_bytes());
    if !head_only {
        let _ = stream.write_all(body);
    }
}

fn parse_request(request: &str) -> Seen {
    let mut lines = request.lines();
    let mut first = lines.next().unwrap_or("").split_whitespace();
    let method = first.next().unwrap_or("").to_string();
    let path = first.next().unwrap_or("").to_string();
    let mut range = None;
    let mut user_agent = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            if name.eq_ignore_ascii_case("range") {
                range = Some(value.trim().to_string());
            } else if name.eq_ignore_ascii_case("user-agent") {
                user_agent = Some(value.trim().to_string());
            }
        }
    }
    Seen {
        method,
        path,
        range,
        user_agent,
    }
}
