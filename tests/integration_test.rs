//! Tests de integración para el servidor HTTP
//! tests/integration_test.rs
//!
//! Cada test levanta su propio servidor en un puerto efímero con un
//! directorio de archivos temporal, y le habla por TCP.

use flate2::read::GzDecoder;
use keepalive_http::config::Config;
use keepalive_http::server::Server;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Helper: directorio temporal único por test
fn temp_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("keepalive_http_it_{}_{}", tag, nanos));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Helper: arranca un servidor en background y retorna su dirección
fn start_server(dir: &Path) -> SocketAddr {
    let mut config = Config::default();
    config.host = "127.0.0.1".to_string();
    config.port = 0;
    config.directory = dir.to_string_lossy().into_owned();

    let mut server = Server::new(config);
    let addr = server.bind().expect("bind");
    thread::spawn(move || {
        let _ = server.run();
    });
    addr
}

fn connect(addr: SocketAddr) -> TcpStream {
    let stream = TcpStream::connect(addr).expect("connect");
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    stream.set_write_timeout(Some(Duration::from_secs(5))).unwrap();
    stream
}

/// Respuesta parseada del lado del cliente
struct RawResponse {
    status_line: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl RawResponse {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Helper: lee exactamente una respuesta (usa Content-Length)
fn read_response<R: BufRead>(reader: &mut R) -> RawResponse {
    let mut status_line = String::new();
    reader.read_line(&mut status_line).unwrap();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        let line = line.trim_end_matches("\r\n");
        if line.is_empty() {
            break;
        }
        let (name, value) = line.split_once(": ").unwrap();
        headers.push((name.to_string(), value.to_string()));
    }

    let len = headers
        .iter()
        .find(|(n, _)| n == "Content-Length")
        .map(|(_, v)| v.parse::<usize>().unwrap())
        .unwrap_or(0);
    let mut body = vec![0u8; len];
    reader.read_exact(&mut body).unwrap();

    RawResponse {
        status_line: status_line.trim_end().to_string(),
        headers,
        body,
    }
}

/// Helper: envía un request en una conexión nueva y lee la respuesta
fn send(addr: SocketAddr, raw: &[u8]) -> RawResponse {
    let stream = connect(addr);
    (&stream).write_all(raw).unwrap();
    read_response(&mut BufReader::new(stream))
}

#[test]
fn test_root() {
    let dir = temp_dir("root");
    let addr = start_server(&dir);

    let response = send(addr, b"GET / HTTP/1.1\r\nHost: localhost\r\nUser-Agent: x\r\n\r\n");
    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert!(response.body.is_empty());
    assert_eq!(response.header("Content-Length"), None);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_echo() {
    let dir = temp_dir("echo");
    let addr = start_server(&dir);

    let response = send(addr, b"GET /echo/hello HTTP/1.1\r\n\r\n");
    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
    assert_eq!(response.header("Content-Length"), Some("5"));
    assert_eq!(response.body, b"hello");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_echo_gzip() {
    let dir = temp_dir("gzip");
    let addr = start_server(&dir);

    let response = send(addr, b"GET /echo/hello HTTP/1.1\r\nAccept-Encoding: gzip\r\n\r\n");
    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.header("Content-Encoding"), Some("gzip"));

    let mut decoded = String::new();
    GzDecoder::new(&response.body[..])
        .read_to_string(&mut decoded)
        .unwrap();
    assert_eq!(decoded, "hello");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_echo_post_not_allowed() {
    let dir = temp_dir("echo405");
    let addr = start_server(&dir);

    let response = send(addr, b"POST /echo/hello HTTP/1.1\r\nContent-Length: 0\r\n\r\n");
    assert_eq!(response.status_line, "HTTP/1.1 405 Not Allowed");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_user_agent() {
    let dir = temp_dir("ua");
    let addr = start_server(&dir);

    let response = send(addr, b"GET /user-agent HTTP/1.1\r\nUser-Agent: foobar/1.2.3\r\n\r\n");
    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.body, b"foobar/1.2.3");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_files_post_then_get() {
    let dir = temp_dir("files");
    let addr = start_server(&dir);

    let response = send(addr, b"POST /files/a.txt HTTP/1.1\r\nContent-Length: 2\r\n\r\nhi");
    assert_eq!(response.status_line, "HTTP/1.1 201 Created");
    assert!(response.body.is_empty());

    let response = send(addr, b"GET /files/a.txt HTTP/1.1\r\n\r\n");
    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.header("Content-Type"), Some("application/octet-stream"));
    assert_eq!(response.body, b"hi");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_files_missing() {
    let dir = temp_dir("missing");
    let addr = start_server(&dir);

    let response = send(addr, b"GET /files/missing.txt HTTP/1.1\r\n\r\n");
    assert_eq!(response.status_line, "HTTP/1.1 404 Not Found");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_not_found() {
    let dir = temp_dir("404");
    let addr = start_server(&dir);

    let response = send(addr, b"GET /nonexistent HTTP/1.1\r\n\r\n");
    assert_eq!(response.status_line, "HTTP/1.1 404 Not Found");
    assert!(response.body.is_empty());

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_keep_alive_multiple_requests() {
    let dir = temp_dir("keepalive");
    let addr = start_server(&dir);

    let stream = connect(addr);
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut writer = stream;

    for word in ["one", "two", "three"] {
        writer
            .write_all(format!("GET /echo/{} HTTP/1.1\r\nHost: localhost\r\n\r\n", word).as_bytes())
            .unwrap();
        let response = read_response(&mut reader);
        assert_eq!(response.status_line, "HTTP/1.1 200 OK");
        assert_eq!(response.body, word.as_bytes());
        assert_eq!(response.header("Connection"), None);
    }

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_connection_close() {
    let dir = temp_dir("close");
    let addr = start_server(&dir);

    let mut stream = connect(addr);
    stream
        .write_all(b"GET /echo/bye HTTP/1.1\r\nConnection: close\r\n\r\n")
        .unwrap();

    // El servidor cierra: read_to_end termina
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).unwrap();
    let text = String::from_utf8_lossy(&buf);

    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.contains("Connection: close\r\n"));
    assert!(text.ends_with("\r\n\r\nbye"));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_malformed_header_closes_without_response() {
    let dir = temp_dir("malformed");
    let addr = start_server(&dir);

    let mut stream = connect(addr);
    stream.write_all(b"GET / HTTP/1.1\r\nBadHeader\r\n\r\n").unwrap();

    let mut buf = Vec::new();
    // El cierre puede llegar como EOF o como reset
    let _ = stream.read_to_end(&mut buf);
    assert!(buf.is_empty());

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_concurrent_connections() {
    let dir = temp_dir("concurrent");
    let addr = start_server(&dir);

    // Una conexión ociosa no bloquea a las demás
    let _idle = connect(addr);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let response = send(addr, format!("GET /echo/n{} HTTP/1.1\r\n\r\n", i).as_bytes());
                assert_eq!(response.body, format!("n{}", i).as_bytes());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    fs::remove_dir_all(dir).unwrap();
}
