use std::env;
use std::path::PathBuf;

/// Storage backend, selected once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// JSON documents in a data directory
    File,
    /// In-memory key-value slots, lost when the process exits
    Local,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub storage: StorageKind,
    /// Propagate collection-read failures instead of degrading to an
    /// empty collection
    pub strict_reads: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let data_dir = env::var("EMG_DATA_DIR")
            .unwrap_or_else(|_| "./data/emg_db".to_string())
            .into();

        let storage = match env::var("EMG_STORAGE_BACKEND")
            .unwrap_or_else(|_| "file".to_string())
            .as_str()
        {
            "file" => StorageKind::File,
            "local" => StorageKind::Local,
            other => return Err(format!("Invalid EMG_STORAGE_BACKEND: {other}")),
        };

        let strict_reads = env::var("EMG_STRICT_READS")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .map_err(|_| "Invalid EMG_STRICT_READS")?;

        Ok(Config {
            data_dir,
            storage,
            strict_reads,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("./data/emg_db"),
            storage: StorageKind::File,
            strict_reads: false,
        }
    }
}
