//! # Modelo de Requests HTTP/1.1
//! src/http/request.rs
//!
//! ## Formato de un Request HTTP/1.1
//!
//! ```text
//! POST /files/a.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! Content-Length: 2\r\n
//! \r\n
//! hi
//! ```
//!
//! El parsing incremental vive en [`crate::http::reader`]; aquí solo está
//! la representación ya framed.

use crate::error::FrameError;
use crate::http::reader::FrameReader;
use std::collections::HashMap;
use std::fmt;

/// Métodos HTTP
///
/// Los métodos que el router no conoce se conservan tal cual en `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    Other(String),
}

impl Method {
    /// Parsea el token del método (sensible a mayúsculas)
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(token) => token.as_str(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Representa un request HTTP/1.1 completo
///
/// Invariante: `body.len()` es igual al `Content-Length` parseado, o 0 si
/// el header no está o no es un entero válido.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Método HTTP
    method: Method,

    /// Path de la petición (empieza con '/')
    path: String,

    /// Versión HTTP tal cual llegó (ej: "HTTP/1.1")
    version: String,

    /// Headers, la última aparición de un nombre gana
    headers: HashMap<String, String>,

    body: Vec<u8>,
}

impl Request {
    pub fn new(
        method: Method,
        path: impl Into<String>,
        version: impl Into<String>,
        headers: HashMap<String, String>,
        body: Vec<u8>,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            version: version.into(),
            headers,
            body,
        }
    }

    /// Parsea un único request desde un buffer en memoria
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use keepalive_http::http::Request;
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nHost: localhost\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/echo/abc");
    /// assert_eq!(request.header("Host"), Some("localhost"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, FrameError> {
        FrameReader::new(buffer)
            .read_request()?
            .ok_or(FrameError::UnexpectedEof)
    }

    // === Métodos públicos para acceder a los campos ===

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header por nombre exacto
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Indica si el cliente pidió cerrar la conexión tras la respuesta
    ///
    /// Verdadero si existe un header `Connection` (nombre sin distinguir
    /// mayúsculas) cuyo valor es `close` (tampoco distingue mayúsculas).
    pub fn wants_close(&self) -> bool {
        self.headers.iter().any(|(name, value)| {
            name.eq_ignore_ascii_case("Connection") && value.trim().eq_ignore_ascii_case("close")
        })
    }

    /// Serializa el request al formato de la red
    ///
    /// Útil para clientes y para verificar que el lector es inverso de la
    /// serialización. Los headers se escriben ordenados por nombre.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::new();

        let request_line = format!("{} {} {}\r\n", self.method, self.path, self.version);
        result.extend_from_slice(request_line.as_bytes());

        let mut names: Vec<&String> = self.headers.keys().collect();
        names.sort();
        for name in names {
            let header_line = format!("{}: {}\r\n", name, self.headers[name]);
            result.extend_from_slice(header_line.as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }
}
