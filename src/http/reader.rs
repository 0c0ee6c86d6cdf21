//! # Lector de Frames HTTP/1.1
//! src/http/reader.rs
//!
//! Lee de forma incremental un stream de bytes y extrae un request por
//! llamada. El lector es una pequeña máquina de estados explícita:
//!
//! ```text
//! RequestLine ──► Headers ──(línea vacía)──► Body ──► Request
//! ```
//!
//! 1. **Request line**: `METHOD SP PATH SP VERSION CRLF`, exactamente tres
//!    tokens separados por un espacio.
//! 2. **Headers**: `Name: Value CRLF` hasta una línea vacía. El separador es
//!    la primera aparición de `": "`.
//! 3. **Body**: exactamente `Content-Length` bytes, o nada si el header no
//!    existe o no es un entero no negativo.
//!
//! Si el stream termina antes del primer byte de la request line se retorna
//! `Ok(None)`: el cliente cerró limpiamente. Cualquier otro corte es un
//! [`FrameError`].

use crate::error::FrameError;
use crate::http::request::{Method, Request};
use std::collections::HashMap;
use std::io::{BufRead, Read};

/// Tamaño máximo de una línea, incluyendo el CRLF
pub const MAX_LINE_LEN: usize = 8192;

/// Cantidad máxima de líneas de header por request
pub const MAX_HEADERS: usize = 100;

/// Lector de requests sobre cualquier fuente con buffer
pub struct FrameReader<R> {
    inner: R,
}

impl<R: BufRead> FrameReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Lee exactamente un request del stream
    ///
    /// # Retorna
    ///
    /// * `Ok(Some(request))` - Request completo
    /// * `Ok(None)` - El stream terminó antes de empezar un request
    /// * `Err(FrameError)` - Request mal formado o truncado
    pub fn read_request(&mut self) -> Result<Option<Request>, FrameError> {
        // 1. Request line
        let line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        let (method, path, version) = parse_request_line(&line)?;

        // 2. Headers
        let headers = self.read_headers()?;

        // 3. Body
        let body = match content_length(&headers) {
            Some(len) => self.read_body(len)?,
            None => Vec::new(),
        };

        Ok(Some(Request::new(method, path, version, headers, body)))
    }

    fn read_headers(&mut self) -> Result<HashMap<String, String>, FrameError> {
        let mut headers = HashMap::new();
        let mut count = 0;

        loop {
            let line = self.read_line()?.ok_or(FrameError::UnexpectedEof)?;

            // La línea vacía marca el fin de los headers
            if line.is_empty() {
                return Ok(headers);
            }

            let (name, value) = line
                .split_once(": ")
                .ok_or_else(|| FrameError::InvalidHeader(line.clone()))?;
            headers.insert(name.to_string(), value.to_string());

            count += 1;
            if count > MAX_HEADERS {
                return Err(FrameError::TooManyHeaders { limit: MAX_HEADERS });
            }
        }
    }

    fn read_body(&mut self, len: usize) -> Result<Vec<u8>, FrameError> {
        let mut body = Vec::new();
        let received = (&mut self.inner).take(len as u64).read_to_end(&mut body)?;

        if received < len {
            return Err(FrameError::TruncatedBody {
                expected: len,
                received,
            });
        }

        Ok(body)
    }

    /// Lee una línea terminada en CRLF y la retorna sin el terminador
    ///
    /// `Ok(None)` solo si el stream terminó sin entregar ningún byte.
    fn read_line(&mut self) -> Result<Option<String>, FrameError> {
        let mut buf = Vec::new();
        let read = (&mut self.inner)
            .take(MAX_LINE_LEN as u64)
            .read_until(b'\n', &mut buf)?;

        if read == 0 {
            return Ok(None);
        }

        if buf.last() != Some(&b'\n') {
            if buf.len() >= MAX_LINE_LEN {
                return Err(FrameError::LineTooLong { limit: MAX_LINE_LEN });
            }
            return Err(FrameError::UnexpectedEof);
        }

        if !buf.ends_with(b"\r\n") {
            return Err(FrameError::MissingCrlf(
                String::from_utf8_lossy(&buf).into_owned(),
            ));
        }
        buf.truncate(buf.len() - 2);

        String::from_utf8(buf)
            .map(Some)
            .map_err(|_| FrameError::InvalidUtf8)
    }
}

/// Parsea la request line
///
/// Formato: `GET /path HTTP/1.1`
fn parse_request_line(line: &str) -> Result<(Method, String, String), FrameError> {
    let parts: Vec<&str> = line.split(' ').collect();

    // Debe tener exactamente 3 partes no vacías: METHOD PATH VERSION
    if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
        return Err(FrameError::InvalidRequestLine(line.to_string()));
    }

    if !parts[1].starts_with('/') {
        return Err(FrameError::InvalidTarget(parts[1].to_string()));
    }

    Ok((
        Method::from_token(parts[0]),
        parts[1].to_string(),
        parts[2].to_string(),
    ))
}

/// Longitud del body declarada, solo si son dígitos ASCII
fn content_length(headers: &HashMap<String, String>) -> Option<usize> {
    let value = headers.get("Content-Length")?.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<usize>().ok()
}
