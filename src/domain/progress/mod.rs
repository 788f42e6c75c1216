//! Progress module - the editorial pipeline timeline of a paper.
//!
//! - `stage` - the eight fixed pipeline stages and their finished/current/pending state
//! - `record` - lenient per-stage completion signals read from backend payloads
//! - `timeline` - ordered stage descriptors for rendering
//! - `index` - per-paper current stage summaries for list pages

mod index;
mod record;
mod stage;
mod timeline;

pub use index::{ProgressIndex, ProgressSummary, AWAITING_UPDATE_LABEL};
pub use record::{ProgressRecord, StageSignal};
pub use stage::{ProgressStage, StageState};
pub use timeline::{map_progress_to_stages, ProgressTimeline, StageDescriptor};
