#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use url::Url;

pub const SAMPLE: &str = "a.jpg,2020-01-01 05:00:00,Mozilla/5.0 Chrome/90\n\
b.html,2020-01-01 05:00:00,Mozilla/5.0 Firefox/80\n\
c.png,2020-01-01 23:00:00,Mozilla/5.0 Trident/7.0\n";

/// Serves a single HTTP response on a local port and returns its URL.
pub fn serve_once(status: &'static str, body: Vec<u8>) -> (Url, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let header = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            body.len()
        );
        stream.write_all(header.as_bytes()).unwrap();
        stream.write_all(&body).unwrap();
        stream.flush().unwrap();
    });

    let url = Url::parse(&format!("http://{}/access.csv", addr)).unwrap();
    (url, handle)
}
