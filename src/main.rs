//! # Keepalive HTTP - Entry Point
//! src/main.rs
//!
//! Parsea la configuración, instala el logger y arranca el servidor.

use keepalive_http::config::Config;
use keepalive_http::error::ServerError;
use keepalive_http::logger;
use keepalive_http::server::Server;

fn run() -> Result<(), ServerError> {
    let config = Config::new();
    logger::init_logger(config.log_level)?;
    config.validate()?;
    config.print_summary();

    let mut server = Server::new(config);
    server.run()
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error fatal: {}", e);
        std::process::exit(1);
    }
}
