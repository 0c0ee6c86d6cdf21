//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Mapea cada request a un handler usando una tabla fija de rutas.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! Las rutas se evalúan en orden de registro y gana la primera que coincide:
//!
//! | Patrón          | Tipo    | Handler              |
//! |-----------------|---------|----------------------|
//! | `/`             | exacto  | `root_handler`       |
//! | `/echo/`        | prefijo | `echo_handler`       |
//! | `/user-agent`   | exacto  | `user_agent_handler` |
//! | `/files/`       | prefijo | `files_handler`      |
//!
//! Si ninguna coincide, 404 Not Found sin body. Toda respuesta hace eco de
//! la versión HTTP del request.

use crate::handlers::{self, Context};
use crate::http::{Request, Response, StatusCode};
use crate::storage::Storage;
use log::debug;
use std::sync::Arc;

/// Tipo de función handler
///
/// Un handler recibe un Request y su contexto, y retorna una Response
pub type Handler = fn(&Request, &Context) -> Response;

/// Cómo se compara el path contra una ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// El path debe ser igual
    Exact(&'static str),

    /// El path debe empezar con el prefijo; el resto es el parámetro
    Prefix(&'static str),
}

impl Pattern {
    /// Retorna el parámetro si el path coincide
    fn matches<'p>(&self, path: &'p str) -> Option<&'p str> {
        match *self {
            Pattern::Exact(exact) if path == exact => Some(""),
            Pattern::Exact(_) => None,
            Pattern::Prefix(prefix) => path.strip_prefix(prefix),
        }
    }
}

/// Router con tabla de rutas fija y almacenamiento inyectado
pub struct Router {
    routes: Vec<(Pattern, Handler)>,
    storage: Arc<dyn Storage>,
}

impl Router {
    /// Crea el router con las rutas del servidor
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let mut router = Self {
            routes: Vec::new(),
            storage,
        };

        router.register(Pattern::Exact("/"), handlers::root_handler);
        router.register(Pattern::Prefix("/echo/"), handlers::echo_handler);
        router.register(Pattern::Exact("/user-agent"), handlers::user_agent_handler);
        router.register(Pattern::Prefix("/files/"), handlers::files_handler);

        router
    }

    fn register(&mut self, pattern: Pattern, handler: Handler) {
        self.routes.push((pattern, handler));
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    ///
    /// # Ejemplo
    /// ```
    /// use keepalive_http::http::{Request, StatusCode};
    /// use keepalive_http::router::Router;
    /// use keepalive_http::storage::DiskStorage;
    /// use std::sync::Arc;
    ///
    /// let router = Router::new(Arc::new(DiskStorage::new("/tmp")));
    ///
    /// let request = Request::parse(b"GET /echo/abc HTTP/1.1\r\n\r\n").unwrap();
    /// let response = router.route(&request);
    /// assert_eq!(response.status(), StatusCode::OK);
    /// assert_eq!(response.body(), b"abc");
    /// ```
    pub fn route(&self, request: &Request) -> Response {
        let path = request.path();

        let response = self
            .routes
            .iter()
            .find_map(|(pattern, handler)| pattern.matches(path).map(|param| (param, handler)))
            .map(|(param, handler)| {
                let ctx = Context {
                    param,
                    storage: self.storage.as_ref(),
                };
                handler(request, &ctx)
            })
            .unwrap_or_else(|| {
                debug!("no route for {}", path);
                Response::new(StatusCode::NOT_FOUND)
            });

        response.with_version(request.version())
    }
}
