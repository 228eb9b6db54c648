//! Accumulating snapshot buffer and flush-to-disk helpers.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::body::BodyFrame;
use crate::persist::snapshot::SkeletonSnapshot;

/// Error type for persistence failures.
///
/// Tracking never produces these; they surface only on the flush path and
/// are logged there without stopping the frame loop.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("snapshot write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered queue of skeleton snapshots awaiting a flush.
///
/// Appended on every sensor tick, drained by the periodic flush. Exactly
/// one mutator may touch the buffer at a time; callers share it behind a
/// mutex.
#[derive(Debug, Default)]
pub struct SnapshotBuffer {
    records: Vec<SkeletonSnapshot>,
}

impl SnapshotBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one snapshot per tracked body in the frame.
    pub fn record_frame(&mut self, camera_id: &str, frame: &BodyFrame, timestamp: DateTime<Local>) {
        for body in frame.tracked() {
            self.records
                .push(SkeletonSnapshot::capture(camera_id, timestamp, body));
        }
    }

    /// Snapshots currently buffered.
    pub fn records(&self) -> &[SkeletonSnapshot] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove and return everything buffered so far.
    pub fn take(&mut self) -> Vec<SkeletonSnapshot> {
        std::mem::take(&mut self.records)
    }

    /// Reinstate an unflushed batch ahead of anything recorded since,
    /// keeping snapshots in capture order for the retry.
    pub fn restore(&mut self, mut batch: Vec<SkeletonSnapshot>) {
        batch.append(&mut self.records);
        self.records = batch;
    }
}

/// File name for one flush: sensor identifier plus flush timestamp.
pub fn flush_file_name(camera_id: &str, at: DateTime<Local>) -> String {
    format!("kinect_{}_{}.json", camera_id, at.format("%Y%m%d_%H%M%S"))
}

/// Write a batch as indented JSON under `dir`, creating the directory if
/// needed. Returns the path written.
pub fn write_snapshots(
    dir: &Path,
    camera_id: &str,
    at: DateTime<Local>,
    batch: &[SkeletonSnapshot],
) -> Result<PathBuf, PersistError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(flush_file_name(camera_id, at));
    let json = serde_json::to_string_pretty(batch)?;
    fs::write(&path, json)?;
    Ok(path)
}
