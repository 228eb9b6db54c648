mod buffer;
mod recorder;
mod snapshot;

pub use buffer::{PersistError, SnapshotBuffer, flush_file_name, write_snapshots};
pub use recorder::{PeriodicRecorder, RecorderConfig};
pub use snapshot::{JointSnapshot, SkeletonSnapshot};
