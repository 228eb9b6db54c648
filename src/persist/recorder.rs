//! Wall-clock interval flush of the shared snapshot buffer.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::Local;
use log::{info, warn};

use crate::persist::buffer::{PersistError, SnapshotBuffer, write_snapshots};

/// Configuration for the periodic recorder.
#[derive(Debug, Clone)]
pub struct RecorderConfig {
    /// Directory flush files are written to
    pub output_dir: PathBuf,
    /// Wall-clock time between flushes, independent of frame rate
    pub flush_interval: Duration,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("skeleton_data"),
            flush_interval: Duration::from_secs(28 * 60),
        }
    }
}

/// Owns the snapshot buffer and flushes it on a fixed schedule.
///
/// The flush thread and the frame path share the buffer through one mutex;
/// serialization and file I/O run with the lock released, so a flush never
/// stalls frame appends for longer than a buffer swap.
pub struct PeriodicRecorder {
    buffer: Arc<Mutex<SnapshotBuffer>>,
    camera_id: String,
    config: RecorderConfig,
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl PeriodicRecorder {
    /// Start the flush thread for the given sensor.
    pub fn start(camera_id: impl Into<String>, config: RecorderConfig) -> Self {
        let camera_id = camera_id.into();
        let buffer = Arc::new(Mutex::new(SnapshotBuffer::new()));
        let stop = Arc::new(AtomicBool::new(false));

        let worker = thread::spawn({
            let buffer = Arc::clone(&buffer);
            let stop = Arc::clone(&stop);
            let camera_id = camera_id.clone();
            let config = config.clone();
            move || flush_loop(&buffer, &camera_id, &config, &stop)
        });

        Self {
            buffer,
            camera_id,
            config,
            stop,
            worker: Some(worker),
        }
    }

    /// Handle to the shared buffer for the frame path to append into.
    pub fn buffer(&self) -> Arc<Mutex<SnapshotBuffer>> {
        Arc::clone(&self.buffer)
    }

    /// Flush whatever is buffered right now. Returns the number of
    /// snapshots written; on failure the batch stays buffered for the
    /// next attempt.
    pub fn flush(&self) -> Result<usize, PersistError> {
        flush_once(&self.buffer, &self.camera_id, &self.config)
    }

    /// Stop the flush thread and write out any remaining snapshots.
    pub fn shutdown(mut self) -> Result<usize, PersistError> {
        self.stop_worker();
        flush_once(&self.buffer, &self.camera_id, &self.config)
    }

    fn stop_worker(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for PeriodicRecorder {
    fn drop(&mut self) {
        if self.worker.is_none() {
            return;
        }
        self.stop_worker();
        if let Err(err) = flush_once(&self.buffer, &self.camera_id, &self.config) {
            warn!("final snapshot flush failed: {err}");
        }
    }
}

fn flush_loop(
    buffer: &Mutex<SnapshotBuffer>,
    camera_id: &str,
    config: &RecorderConfig,
    stop: &AtomicBool,
) {
    // Short sleep ticks keep shutdown responsive without waking often
    let tick = config.flush_interval.min(Duration::from_millis(50));
    let mut elapsed = Duration::ZERO;

    while !stop.load(Ordering::SeqCst) {
        thread::sleep(tick);
        elapsed += tick;
        if elapsed < config.flush_interval {
            continue;
        }
        elapsed = Duration::ZERO;
        if let Err(err) = flush_once(buffer, camera_id, config) {
            warn!("periodic snapshot flush failed, retrying next interval: {err}");
        }
    }
}

fn flush_once(
    buffer: &Mutex<SnapshotBuffer>,
    camera_id: &str,
    config: &RecorderConfig,
) -> Result<usize, PersistError> {
    let batch = {
        let mut buffer = buffer.lock().unwrap_or_else(PoisonError::into_inner);
        if buffer.is_empty() {
            return Ok(0);
        }
        buffer.take()
    };

    let count = batch.len();
    match write_snapshots(&config.output_dir, camera_id, Local::now(), &batch) {
        Ok(path) => {
            info!("flushed {} snapshots to {}", count, path.display());
            Ok(count)
        }
        Err(err) => {
            buffer
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .restore(batch);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{BodyFrame, BodyRecord, JointSample, JointType};
    use std::fs;

    fn test_frame(id: u64) -> BodyFrame {
        let mut body = BodyRecord::new(id);
        body.set_joint(JointType::SpineMid, JointSample::tracked(0.3, 0.9, 1.8));
        BodyFrame::from_records(vec![body])
    }

    fn temp_config(name: &str) -> RecorderConfig {
        RecorderConfig {
            output_dir: std::env::temp_dir().join(name),
            // Long enough that only explicit flushes fire during the test
            flush_interval: Duration::from_secs(3600),
        }
    }

    #[test]
    fn test_flush_writes_and_clears() {
        let config = temp_config("slottrack-recorder-flush");
        let recorder = PeriodicRecorder::start("camX", config.clone());

        recorder
            .buffer()
            .lock()
            .unwrap()
            .record_frame("camX", &test_frame(3), Local::now());

        let written = recorder.flush().unwrap();
        assert_eq!(written, 1);
        assert!(recorder.buffer().lock().unwrap().is_empty());

        // Nothing buffered: flush is a no-op, no file written
        assert_eq!(recorder.flush().unwrap(), 0);

        recorder.shutdown().unwrap();
        fs::remove_dir_all(std::env::temp_dir().join("slottrack-recorder-flush")).ok();
    }

    #[test]
    fn test_shutdown_flushes_remaining() {
        let config = temp_config("slottrack-recorder-shutdown");
        let recorder = PeriodicRecorder::start("camY", config);

        recorder
            .buffer()
            .lock()
            .unwrap()
            .record_frame("camY", &test_frame(9), Local::now());

        let written = recorder.shutdown().unwrap();
        assert_eq!(written, 1);

        let dir = std::env::temp_dir().join("slottrack-recorder-shutdown");
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
        fs::remove_dir_all(dir).ok();
    }
}
