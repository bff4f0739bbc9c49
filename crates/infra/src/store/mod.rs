//! Read-only access to console session files
//!
//! A session file is a SQLite database. Connections are opened read-only:
//! the session is a trustworthy, already-materialized snapshot and this tool
//! must never write into it.

mod queries;

use sqlx::SqlitePool;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use patchbook_core::domain::{DeviceRack, LabelIndex, PatchBay, PatchClassifier};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by the session store. Schema mismatches and unreadable
/// files are fatal; the store performs no recovery.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Session file not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Handle to an open console session file.
pub struct SessionStore {
    pool: SqlitePool,
}

impl SessionStore {
    /// Open a session file read-only.
    ///
    /// `mode=ro` with `immutable=1` keeps SQLite from writing to the file
    /// even for its own housekeeping.
    pub async fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.display().to_string()));
        }

        let url = format!("sqlite://{}?mode=ro&immutable=1", path.display());
        let pool = SqlitePool::connect(&url).await?;
        Ok(Self { pool })
    }

    /// Load and classify the whole session into a patch bay.
    ///
    /// Strict two-phase build: the rack and label index are complete before
    /// any route is classified, since the merge and label lookups require
    /// full maps.
    pub async fn load_session(&self) -> Result<PatchBay> {
        let devices = self.devices().await?;
        info!("Loaded {} rack devices", devices.len());
        let rack = DeviceRack::from_records(&devices);

        let labels = LabelIndex::from_records(&self.labels().await?);

        let routes = self.routes().await?;
        info!("Classifying {} routes", routes.len());
        let classifier = PatchClassifier::new(&rack, &labels);
        Ok(classifier.classify(routes))
    }

    /// Close the underlying pool. Mostly useful in tests that need the file
    /// released promptly.
    pub async fn close(self) {
        self.pool.close().await;
    }
}
