/// Local HTTP stubs of the user-listing service, for tests.
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use reqwest::blocking::Client;

/// One request as seen by the stub.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    /// Index of the TCP connection it arrived on, in accept order.
    pub connection: usize,
    /// Offset parsed from the query string.
    pub offset: usize,
    /// Raw request head (request line and headers).
    pub head: String,
}

impl SeenRequest {
    /// Value of a request header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<String> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim().to_owned())
        })
    }
}

/// Canned reply: status line (e.g. `"200 OK"`) and JSON body.
pub type Reply = (&'static str, String);

/// A JSON array of `n` users whose ids encode the offset.
pub fn users_body(offset: usize, n: usize) -> String {
    let users: Vec<String> = (0..n)
        .map(|i| format!(r#"{{"id":"{offset}-{i}","email":"u{i}@example.com"}}"#))
        .collect();
    format!("[{}]", users.join(","))
}

/// Serve `expected` requests, answering each from `respond(offset)`.
///
/// Connections are kept open after each reply, so a client that reused a
/// connection would show several requests under one connection index.
pub fn paged_server(
    expected: usize,
    respond: fn(usize) -> Reply,
) -> (u16, JoinHandle<Vec<SeenRequest>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        let mut connection = 0;
        while seen.len() < expected {
            let (mut stream, _) = listener.accept().unwrap();
            while seen.len() < expected {
                let Some(head) = read_head(&mut stream) else {
                    break;
                };
                let offset = parse_offset(&head);
                let (status, body) = respond(offset);
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
                    body.len()
                );
                if stream.write_all(response.as_bytes()).is_err() {
                    break;
                }
                seen.push(SeenRequest {
                    connection,
                    offset,
                    head,
                });
            }
            connection += 1;
        }
        seen
    });
    (port, handle)
}

/// Serve exactly one reply; the handle yields the request head.
pub fn one_shot_server(status: &'static str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let head = read_head(&mut stream).unwrap_or_default();
        stream.write_all(response.as_bytes()).unwrap();
        head
    });
    (format!("http://{addr}"), handle)
}

/// A client that sends requests for `host` to the local stub on `port`.
pub fn client_resolving(host: &str, port: u16) -> Client {
    Client::builder()
        .pool_max_idle_per_host(0)
        .resolve(host, ([127, 0, 0, 1], port).into())
        .build()
        .unwrap()
}

fn read_head(stream: &mut TcpStream) -> Option<String> {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return None,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    Some(String::from_utf8_lossy(&head).into_owned())
}

fn parse_offset(head: &str) -> usize {
    head.split_whitespace()
        .nth(1)
        .and_then(|target| target.rsplit_once("offset="))
        .and_then(|(_, n)| n.parse().ok())
        .unwrap_or(usize::MAX)
}
