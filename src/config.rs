//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración por argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./keepalive_http --directory /tmp/files --port 4221
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 FILES_DIR=/srv/files LOG_LEVEL=debug ./keepalive_http
//! ```

use crate::error::ConfigError;
use clap::Parser;
use log::{info, LevelFilter};

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "keepalive_http")]
#[command(about = "Servidor HTTP/1.1 mínimo con conexiones persistentes")]
#[command(version)]
pub struct Config {
    /// Directorio raíz para la ruta /files/
    #[arg(long, default_value = "./data", env = "FILES_DIR")]
    pub directory: String,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Puerto en el que escucha el servidor (0 = efímero)
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Nivel de log (off, error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: LevelFilter,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use keepalive_http::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.directory.trim().is_empty() {
            return Err(ConfigError::EmptyDirectory);
        }
        Ok(())
    }

    /// Registra un resumen de la configuración
    pub fn print_summary(&self) {
        info!("Address:   {}", self.address());
        info!("Files dir: {}", self.directory);
        info!("Log level: {}", self.log_level);
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            directory: "./data".to_string(),
            host: "0.0.0.0".to_string(),
            port: 4221,
            log_level: LevelFilter::Info,
        }
    }
}
