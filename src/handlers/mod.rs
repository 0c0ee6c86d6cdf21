//! # Handlers de Rutas
//!
//! Cada handler recibe el request ya parseado y un [`Context`] con el resto
//! del path (lo que sigue al prefijo de la ruta) y el almacenamiento.
//!
//! - **basic**: `/`, `/echo/{text}`, `/user-agent`
//! - **files**: `/files/{name}` (GET lee, POST escribe)
//!
//! Política de profundidad: `/echo/a/b` y `/files/a/b` responden 404, el
//! parámetro debe ser un único segmento.

pub mod basic;
pub mod files;

pub use basic::*;
pub use files::*;

use crate::storage::Storage;

/// Datos que el router entrega a cada handler
pub struct Context<'a> {
    /// Lo que queda del path después del prefijo de la ruta
    pub param: &'a str,

    pub storage: &'a dyn Storage,
}

/// Retorna el parámetro si es un único segmento de path
pub(crate) fn single_segment(param: &str) -> Option<&str> {
    if param.contains('/') {
        None
    } else {
        Some(param)
    }
}
