//! # Errores del Servidor
//! src/error.rs
//!
//! Taxonomía de errores:
//!
//! - `FrameError`: request mal formado o truncado. Es fatal para la conexión:
//!   se cierra sin enviar respuesta.
//! - `StorageError`: fallos del almacenamiento de archivos. El router los
//!   convierte en 404 / 500, la conexión continúa.
//! - `ConfigError`: configuración inválida al arrancar.
//! - `ServerError`: lo que puede terminar una sesión o el proceso.
//!
//! El fin de stream antes de un request no es un error: el lector retorna
//! `Ok(None)`.

use std::io;
use thiserror::Error;

/// Errores de framing del request
#[derive(Debug, Error)]
pub enum FrameError {
    /// La request line no tiene exactamente 3 tokens
    #[error("invalid request line: {0:?}")]
    InvalidRequestLine(String),

    /// El path no empieza con '/'
    #[error("invalid request target: {0:?}")]
    InvalidTarget(String),

    /// Header sin el separador ": "
    #[error("invalid header: {0:?}")]
    InvalidHeader(String),

    /// Línea sin terminador CRLF
    #[error("line not terminated by CRLF: {0:?}")]
    MissingCrlf(String),

    #[error("line exceeds {limit} bytes")]
    LineTooLong { limit: usize },

    #[error("more than {limit} header lines")]
    TooManyHeaders { limit: usize },

    #[error("request head is not valid UTF-8")]
    InvalidUtf8,

    /// El stream se cerró a mitad de la request line o de los headers
    #[error("connection closed before the request head was complete")]
    UnexpectedEof,

    /// El stream se cerró antes de recibir todo el body
    #[error("body truncated: expected {expected} bytes, got {received}")]
    TruncatedBody { expected: usize, received: usize },

    #[error("i/o: {0}")]
    Io(#[from] io::Error),
}

/// Errores del almacenamiento de archivos
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("file not found: {0}")]
    NotFound(String),

    /// Nombre vacío o con separadores / `..`
    #[error("invalid file name: {0:?}")]
    InvalidName(String),

    #[error("i/o on {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Errores de configuración
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("host must not be empty")]
    EmptyHost,

    #[error("files directory must not be empty")]
    EmptyDirectory,
}

/// Errores que terminan una sesión o el servidor
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("framing: {0}")]
    Frame(#[from] FrameError),

    #[error("i/o: {0}")]
    Io(#[from] io::Error),

    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
