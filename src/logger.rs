//! # Logging
//! src/logger.rs
//!
//! Inicializa `simplelog` hacia stderr. Todo el crate usa las macros de
//! `log`; sin logger instalado simplemente no se imprime nada (útil en tests).

use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Instala el logger de terminal con el nivel dado
///
/// Solo puede llamarse una vez por proceso.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Debug)
        .build();

    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}
