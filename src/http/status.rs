//! # Códigos de Estado HTTP
//! src/http/status.rs
//!
//! El servidor solo emite un conjunto cerrado de códigos:
//!
//! - **2xx**: 200 OK, 201 Created
//! - **4xx**: 404 Not Found, 405 Not Allowed
//! - **5xx**: 500 Internal Server Error (fallos al escribir archivos)
//!
//! Cualquier otro código se serializa con reason phrase vacía.

/// Código de estado HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    /// 200 OK - La petición fue exitosa
    pub const OK: StatusCode = StatusCode(200);

    /// 201 Created - Archivo escrito correctamente
    pub const CREATED: StatusCode = StatusCode(201);

    /// 404 Not Found - Ruta o archivo inexistente
    pub const NOT_FOUND: StatusCode = StatusCode(404);

    /// 405 Not Allowed - Método no permitido para la ruta
    pub const NOT_ALLOWED: StatusCode = StatusCode(405);

    /// 500 Internal Server Error - El almacenamiento falló
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);

    /// Crea un código arbitrario (no necesariamente conocido)
    pub const fn from_u16(code: u16) -> Self {
        StatusCode(code)
    }

    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use keepalive_http::http::StatusCode;
    /// assert_eq!(StatusCode::OK.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Retorna el texto de razón asociado al código
    ///
    /// Los códigos fuera del conjunto cerrado retornan `""`.
    ///
    /// # Ejemplo
    /// ```
    /// use keepalive_http::http::StatusCode;
    /// assert_eq!(StatusCode::NOT_ALLOWED.reason_phrase(), "Not Allowed");
    /// assert_eq!(StatusCode::from_u16(999).reason_phrase(), "");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            201 => "Created",
            404 => "Not Found",
            405 => "Not Allowed",
            500 => "Internal Server Error",
            _ => "",
        }
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK" (o "999 " para códigos desconocidos)
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}
