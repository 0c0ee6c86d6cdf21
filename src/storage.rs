//! # Almacenamiento de Archivos
//! src/storage.rs
//!
//! Colaborador de filesystem usado por la ruta `/files/`. El router recibe
//! un `Arc<dyn Storage>` al construirse, así que el directorio raíz nunca es
//! estado global.
//!
//! ## Nombres de archivo
//!
//! El nombre viene directo del path del cliente. Se rechazan nombres vacíos,
//! con separadores (`/`, `\`) o con `..`, para que ningún request pueda
//! salir del directorio raíz.
//!
//! ## Concurrencia
//!
//! No hay locks: dos POST simultáneos al mismo archivo compiten en el
//! filesystem y gana el último en escribir.

use crate::error::StorageError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Operaciones de archivos que necesita el router
pub trait Storage: Send + Sync {
    /// Verifica si existe el archivo
    fn exists(&self, name: &str) -> bool;

    /// Lee el archivo completo
    fn read_all(&self, name: &str) -> Result<Vec<u8>, StorageError>;

    /// Escribe el archivo completo, creándolo o sobrescribiéndolo
    fn write_all(&self, name: &str, data: &[u8]) -> Result<(), StorageError>;
}

/// Almacenamiento en disco bajo un directorio raíz
#[derive(Debug, Clone)]
pub struct DiskStorage {
    root: PathBuf,
}

impl DiskStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, name: &str) -> Result<PathBuf, StorageError> {
        validate_name(name)?;
        Ok(self.root.join(name))
    }
}

impl Storage for DiskStorage {
    fn exists(&self, name: &str) -> bool {
        self.resolve(name).map(|path| path.is_file()).unwrap_or(false)
    }

    fn read_all(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.resolve(name)?;
        fs::read(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => StorageError::NotFound(name.to_string()),
            _ => StorageError::Io {
                name: name.to_string(),
                source,
            },
        })
    }

    fn write_all(&self, name: &str, data: &[u8]) -> Result<(), StorageError> {
        let path = self.resolve(name)?;
        fs::write(&path, data).map_err(|source| StorageError::Io {
            name: name.to_string(),
            source,
        })
    }
}

/// Valida que el nombre sea un único componente sin traversal
pub fn validate_name(name: &str) -> Result<(), StorageError> {
    if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_root(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("keepalive_http_storage_{}_{}", tag, nanos));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_write_then_read() {
        let root = temp_root("rw");
        let storage = DiskStorage::new(&root);

        assert!(!storage.exists("a.txt"));
        storage.write_all("a.txt", b"hi").unwrap();
        assert!(storage.exists("a.txt"));
        assert_eq!(storage.read_all("a.txt").unwrap(), b"hi");

        // Sobrescribe
        storage.write_all("a.txt", b"bye").unwrap();
        assert_eq!(storage.read_all("a.txt").unwrap(), b"bye");

        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_read_missing() {
        let root = temp_root("missing");
        let storage = DiskStorage::new(&root);

        assert!(matches!(
            storage.read_all("missing.txt"),
            Err(StorageError::NotFound(_))
        ));

        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_write_into_missing_root_fails() {
        let storage = DiskStorage::new(std::env::temp_dir().join("keepalive_http_no_such_dir/nested"));
        assert!(matches!(
            storage.write_all("x.txt", b"data"),
            Err(StorageError::Io { .. })
        ));
    }

    #[test]
    fn test_traversal_names_rejected() {
        for name in ["", "..", "../etc/passwd", "a/b", "a\\b", "..hidden"] {
            assert!(
                matches!(validate_name(name), Err(StorageError::InvalidName(_))),
                "name {:?} should be rejected",
                name
            );
        }
        assert!(validate_name("report.final.txt").is_ok());
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let root = temp_root("dir");
        fs::create_dir(root.join("sub")).unwrap();
        let storage = DiskStorage::new(&root);

        assert!(!storage.exists("sub"));

        fs::remove_dir_all(root).unwrap();
    }
}
