//! Note store backend selection

use serde::Deserialize;

/// Which [`NoteStore`](crate::ports::NoteStore) implementation to run.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local store; contents are lost on restart.
    #[default]
    Memory,
    /// PostgreSQL via the `database` section.
    Postgres,
}

/// Store configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
}

impl StoreConfig {
    pub fn uses_database(&self) -> bool {
        self.backend == StoreBackend::Postgres
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_memory() {
        let config = StoreConfig::default();
        assert_eq!(config.backend, StoreBackend::Memory);
        assert!(!config.uses_database());
    }

    #[test]
    fn backend_deserializes_lowercase() {
        let backend: StoreBackend = serde_json::from_str(r#""postgres""#).unwrap();
        assert_eq!(backend, StoreBackend::Postgres);
        assert!(serde_json::from_str::<StoreBackend>(r#""redis""#).is_err());
    }
}
