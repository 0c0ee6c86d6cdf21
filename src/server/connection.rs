//! # Sesión de Conexión
//! src/server/connection.rs
//!
//! Maneja el ciclo de vida de una conexión aceptada como una máquina de
//! estados:
//!
//! ```text
//!                    ┌──────────────────────────────┐
//!                    ▼                              │ (keep-alive)
//! AwaitingRequest ──► Dispatching ──► Writing ──────┘
//!        │                               │
//!        └────────► Closed ◄─────────────┘ (Connection: close / error)
//! ```
//!
//! - Fin de stream antes de un request: cierre limpio.
//! - Error de framing: cierre sin escribir nada.
//! - `Connection: close`: se agrega el header a la respuesta y se cierra
//!   después de escribirla.
//!
//! Un request en vuelo a la vez. No hay timeouts: un cliente que no envía
//! nada mantiene su thread bloqueado en la lectura.

use crate::error::ServerError;
use crate::http::{FrameReader, Request, Response};
use crate::router::Router;
use log::{debug, info};
use std::io::{BufRead, Write};

/// Estados de la sesión
#[derive(Debug)]
enum State {
    AwaitingRequest,
    Dispatching(Request),
    Writing { response: Response, close: bool },
    Closed,
}

/// Una conexión: lector de frames, escritor y router compartido
pub struct Session<'r, R, W> {
    reader: FrameReader<R>,
    writer: W,
    router: &'r Router,
    served: usize,
}

impl<'r, R: BufRead, W: Write> Session<'r, R, W> {
    pub fn new(reader: R, writer: W, router: &'r Router) -> Self {
        Self {
            reader: FrameReader::new(reader),
            writer,
            router,
            served: 0,
        }
    }

    /// Cantidad de respuestas escritas en esta sesión
    pub fn served(&self) -> usize {
        self.served
    }

    /// Recupera el escritor (para inspeccionar lo escrito en tests)
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Ejecuta la sesión hasta llegar a `Closed`
    ///
    /// # Retorna
    ///
    /// * `Ok(())` - El cliente cerró o pidió `Connection: close`
    /// * `Err(ServerError::Frame)` - Request mal formado, no se respondió
    /// * `Err(ServerError::Io)` - Falló la escritura de la respuesta
    pub fn run(&mut self) -> Result<(), ServerError> {
        let mut state = State::AwaitingRequest;

        loop {
            state = match state {
                State::AwaitingRequest => match self.reader.read_request()? {
                    Some(request) => State::Dispatching(request),
                    None => {
                        debug!("stream closed by peer after {} requests", self.served);
                        State::Closed
                    }
                },

                State::Dispatching(request) => {
                    let close = request.wants_close();
                    let response = self.router.route(&request);
                    info!(
                        "{} {} -> {}",
                        request.method(),
                        request.path(),
                        response.status()
                    );
                    State::Writing { response, close }
                }

                State::Writing { mut response, close } => {
                    if close {
                        response.add_header("Connection", "close");
                    }
                    self.writer.write_all(&response.to_bytes())?;
                    self.writer.flush()?;
                    self.served += 1;

                    if close {
                        debug!("closing on client request");
                        State::Closed
                    } else {
                        State::AwaitingRequest
                    }
                }

                State::Closed => return Ok(()),
            };
        }
    }
}
