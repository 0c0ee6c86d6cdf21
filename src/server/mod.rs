//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa:
//! 1. El listener TCP, con un thread por conexión (`tcp`)
//! 2. La sesión de cada conexión: leer request, despachar, escribir
//!    respuesta, repetir mientras el cliente mantenga la conexión
//!    (`connection`)

pub mod connection;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use connection::Session;
pub use tcp::{handle_connection, Server};
