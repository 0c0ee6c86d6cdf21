//! # Keepalive HTTP
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo: lee requests de un stream TCP, los enmarca
//! según HTTP/1.1 (request line, headers, body por `Content-Length`),
//! soporta varias peticiones seguidas por conexión y responde con bytes
//! exactos, incluyendo compresión gzip negociada.
//!
//! ## Arquitectura
//!
//! - `http`: lector de frames, modelos de request/response, status codes
//! - `router`: tabla fija de rutas, primera coincidencia gana
//! - `handlers`: `/`, `/echo/{text}`, `/user-agent`, `/files/{name}`
//! - `storage`: acceso a archivos bajo un directorio raíz inyectado
//! - `server`: listener TCP y máquina de estados por conexión
//! - `config`, `logger`, `error`: configuración, logging y errores
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use keepalive_http::config::Config;
//! use keepalive_http::server::Server;
//!
//! let config = Config::default();
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod logger;
pub mod router;
pub mod server;
pub mod storage;
