//! In-memory station repository.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::Station;
use crate::geometry::{Corridor, PlanarProjection};

use super::error::StationError;
use super::loader::{LoadReport, load_stations};

/// Source of station records for corridor queries.
pub trait StationRepository: Send + Sync {
    /// Return every station inside `corridor`.
    fn stations_in_corridor<P: PlanarProjection>(
        &self,
        corridor: &Corridor<P>,
    ) -> impl Future<Output = Result<Vec<Station>, StationError>> + Send;
}

/// Thread-safe in-memory station store.
///
/// Supports reloading from its source file in the background; readers see
/// either the old or the new set, never a mix.
#[derive(Clone)]
pub struct InMemoryStations {
    inner: Arc<RwLock<Vec<Station>>>,
    source: Option<PathBuf>,
}

impl InMemoryStations {
    /// Load stations from a CSV file.
    ///
    /// Returns the store together with the load report so the caller can
    /// surface skipped rows.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<(Self, LoadReport), StationError> {
        let path = path.as_ref();
        let mut report = load_stations(path)?;
        let stations = std::mem::take(&mut report.stations);

        Ok((
            Self {
                inner: Arc::new(RwLock::new(stations)),
                source: Some(path.to_path_buf()),
            },
            report,
        ))
    }

    /// Create a store from already-loaded stations (no reload source).
    pub fn from_stations(stations: Vec<Station>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(stations)),
            source: None,
        }
    }

    /// The file this store was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Get the number of stations in the store.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Snapshot of every station.
    pub async fn all(&self) -> Vec<Station> {
        self.inner.read().await.clone()
    }

    /// Reload the station data from the source file.
    ///
    /// On success, replaces the current stations. On failure, the existing
    /// stations are preserved and the error is returned.
    pub async fn reload(&self) -> Result<LoadReport, StationError> {
        let path = self.source.clone().ok_or(StationError::NoSource)?;

        let mut report = tokio::task::spawn_blocking(move || load_stations(path))
            .await
            .map_err(|e| StationError::Task {
                message: e.to_string(),
            })??;

        let stations = std::mem::take(&mut report.stations);
        *self.inner.write().await = stations;

        Ok(report)
    }
}

impl StationRepository for InMemoryStations {
    async fn stations_in_corridor<P: PlanarProjection>(
        &self,
        corridor: &Corridor<P>,
    ) -> Result<Vec<Station>, StationError> {
        let guard = self.inner.read().await;
        Ok(corridor.filter(guard.iter()))
    }
}
