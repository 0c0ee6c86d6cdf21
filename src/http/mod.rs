//! # Módulo HTTP
//!
//! Implementación del framing HTTP/1.1 desde cero:
//!
//! - Lectura incremental de requests desde un stream (`reader`)
//! - Modelo de request (`request`)
//! - Construcción y serialización de responses (`response`)
//! - Códigos de estado (`status`)
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/hello HTTP/1.1\r\n
//! Accept-Encoding: gzip\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hello
//! ```
//!
//! No hay chunked transfer encoding ni pipelining: un request en vuelo por
//! conexión, delimitado solo por `Content-Length`.

pub mod reader;
pub mod request;
pub mod response;
pub mod status;

pub use reader::FrameReader;
pub use request::{Method, Request};
pub use response::Response;
pub use status::StatusCode;
