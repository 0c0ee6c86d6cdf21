//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Un thread por conexión aceptada. Los threads solo comparten el router
//! (inmutable, detrás de un `Arc`) y el filesystem.

use crate::config::Config;
use crate::error::ServerError;
use crate::router::Router;
use crate::server::connection::Session;
use crate::storage::DiskStorage;
use log::{debug, error, info, warn};
use std::io::{self, BufReader};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    config: Config,
    router: Arc<Router>,
    listener: Option<TcpListener>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let storage = Arc::new(DiskStorage::new(&config.directory));
        let router = Router::new(storage);

        Self {
            config,
            router: Arc::new(router),
            listener: None,
        }
    }

    /// Hace bind a la dirección configurada y retorna la dirección real
    ///
    /// Con `port = 0` el sistema elige un puerto libre.
    pub fn bind(&mut self) -> io::Result<SocketAddr> {
        let address = self.config.address();
        let listener = TcpListener::bind(&address)?;
        let local = listener.local_addr()?;
        info!("Servidor escuchando en {}", local);

        self.listener = Some(listener);
        Ok(local)
    }

    /// Acepta conexiones para siempre (hace bind si hace falta)
    pub fn run(&mut self) -> Result<(), ServerError> {
        if self.listener.is_none() {
            self.bind()?;
        }
        let listener = match self.listener.as_ref() {
            Some(listener) => listener,
            None => return Ok(()),
        };

        info!("Modo concurrente: un thread por conexion");

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);
                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    debug!("Nueva conexión desde {}", peer_addr);

                    thread::spawn(move || {
                        if let Err(e) = handle_connection(stream, &router) {
                            match e {
                                ServerError::Frame(e) => warn!("[{}] request inválido: {}", peer_addr, e),
                                e => error!("[{}] error en conexión: {}", peer_addr, e),
                            }
                        }
                        debug!("[{}] conexión cerrada", peer_addr);
                    });
                }
                Err(e) => {
                    error!("Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }
}

/// Atiende una conexión hasta que termine la sesión
///
/// El stream se cierra en todos los caminos de salida: el shutdown explícito
/// y el drop al final de la función.
pub fn handle_connection(stream: TcpStream, router: &Router) -> Result<(), ServerError> {
    let reader = BufReader::new(stream.try_clone()?);
    let result = Session::new(reader, &stream, router).run();

    // El peer puede haber cerrado ya; no importa
    let _ = stream.shutdown(Shutdown::Both);

    result
}
