//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! - `/`: 200 sin body
//! - `/echo/{text}`: eco del segmento, opcionalmente comprimido con gzip
//! - `/user-agent`: eco del header `User-Agent`

use super::{single_segment, Context};
use crate::http::{Method, Request, Response, StatusCode};
use flate2::write::GzEncoder;
use flate2::Compression;
use log::{debug, error};
use std::io::Write;

/// Handler para `/`
pub fn root_handler(_req: &Request, _ctx: &Context) -> Response {
    Response::new(StatusCode::OK)
}

/// Handler para `/echo/{text}`
///
/// Solo acepta GET. Si `Accept-Encoding` incluye el token `gzip` el body va
/// comprimido con `Content-Encoding: gzip`.
///
/// # Ejemplo de response
/// ```text
/// HTTP/1.1 200 OK
/// Content-Type: text/plain
/// Content-Length: 3
///
/// abc
/// ```
pub fn echo_handler(req: &Request, ctx: &Context) -> Response {
    if req.method() != &Method::GET {
        return Response::new(StatusCode::NOT_ALLOWED);
    }

    let text = match single_segment(ctx.param) {
        Some(text) => text,
        None => return Response::new(StatusCode::NOT_FOUND),
    };

    if !accepts_gzip(req) {
        return Response::text(StatusCode::OK, text);
    }

    match gzip(text.as_bytes()) {
        Ok(compressed) => {
            debug!("echo gzip: {} -> {} bytes", text.len(), compressed.len());
            Response::new(StatusCode::OK)
                .with_header("Content-Type", "text/plain")
                .with_header("Content-Encoding", "gzip")
                .with_body_bytes(compressed)
        }
        Err(e) => {
            error!("gzip failed: {}", e);
            Response::new(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handler para `/user-agent`
///
/// Retorna el valor de `User-Agent` (vacío si no viene).
pub fn user_agent_handler(req: &Request, _ctx: &Context) -> Response {
    let agent = req.header("User-Agent").unwrap_or("");
    Response::text(StatusCode::OK, agent)
}

/// Verifica si `Accept-Encoding` incluye exactamente el token `gzip`
fn accepts_gzip(req: &Request) -> bool {
    req.header("Accept-Encoding")
        .map(|value| value.split(',').any(|token| token.trim() == "gzip"))
        .unwrap_or(false)
}

/// Comprime en un contenedor gzip
fn gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
