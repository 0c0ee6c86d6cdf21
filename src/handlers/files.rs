//! # Handler de Archivos
//! src/handlers/files.rs
//!
//! `/files/{name}` sobre el almacenamiento inyectado:
//!
//! - `GET`: 200 con el contenido (`application/octet-stream`), 404 si no existe
//! - `POST`: escribe el body tal cual, 201; 500 si la escritura falla
//! - Otro método: 405
//!
//! Nombres inválidos (traversal, varios segmentos) responden 404.

use super::{single_segment, Context};
use crate::error::StorageError;
use crate::http::{Method, Request, Response, StatusCode};
use crate::storage::validate_name;
use log::{error, warn};

/// Handler para `/files/{name}`
pub fn files_handler(req: &Request, ctx: &Context) -> Response {
    match req.method() {
        Method::GET | Method::POST => {}
        _ => return Response::new(StatusCode::NOT_ALLOWED),
    }

    let name = match single_segment(ctx.param) {
        Some(name) if validate_name(name).is_ok() => name,
        _ => {
            warn!("rejected file name {:?}", ctx.param);
            return Response::new(StatusCode::NOT_FOUND);
        }
    };

    if req.method() == &Method::GET {
        read_file(name, ctx)
    } else {
        write_file(name, req.body(), ctx)
    }
}

fn read_file(name: &str, ctx: &Context) -> Response {
    if !ctx.storage.exists(name) {
        return Response::new(StatusCode::NOT_FOUND);
    }

    match ctx.storage.read_all(name) {
        Ok(content) => Response::octet_stream(StatusCode::OK, content),
        // Borrado entre exists() y read_all()
        Err(StorageError::NotFound(_)) => Response::new(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("read failed: {}", e);
            Response::new(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn write_file(name: &str, body: &[u8], ctx: &Context) -> Response {
    match ctx.storage.write_all(name, body) {
        Ok(()) => Response::new(StatusCode::CREATED),
        Err(e) => {
            error!("write failed: {}", e);
            Response::new(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
