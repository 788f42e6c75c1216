//! ProgressTimeline - ordered stage descriptors for timeline rendering.

use serde::Serialize;

use super::{ProgressRecord, ProgressStage, StageState};
use crate::domain::foundation::{BadgeColor, Timestamp};

/// One rendered stage of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageDescriptor {
    pub key: ProgressStage,
    pub label: &'static str,
    pub status: StageState,
    pub status_text: &'static str,
    pub color: BadgeColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<Timestamp>,
}

impl StageDescriptor {
    fn new(stage: ProgressStage, status: StageState, time: Option<Timestamp>) -> Self {
        Self {
            key: stage,
            label: stage.label(),
            status,
            status_text: status.text(),
            color: status.color(),
            time,
        }
    }
}

/// Maps a progress record to one descriptor per pipeline stage.
///
/// A stage with a completion signal is finished. The first stage without one
/// is current and every later unsignalled stage is pending. A finished stage
/// after a gap stays finished: inconsistent backend data is shown as-is.
/// Without a record, or with an empty one, the first stage is current.
pub fn map_progress_to_stages(record: Option<&ProgressRecord>) -> Vec<StageDescriptor> {
    let mut current_assigned = false;
    ProgressStage::ALL
        .iter()
        .map(|stage| {
            let signal = record.map(|r| r.signal(*stage)).unwrap_or_default();
            let status = if signal.is_complete() {
                StageState::Finished
            } else if !current_assigned {
                current_assigned = true;
                StageState::Current
            } else {
                StageState::Pending
            };
            StageDescriptor::new(*stage, status, signal.time)
        })
        .collect()
}

/// The full timeline of one paper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProgressTimeline {
    stages: Vec<StageDescriptor>,
}

impl ProgressTimeline {
    /// Builds the timeline from an optional record.
    pub fn from_record(record: Option<&ProgressRecord>) -> Self {
        Self {
            stages: map_progress_to_stages(record),
        }
    }

    /// Fills the submission time from the paper's submission date when the
    /// progress record did not carry one.
    pub fn with_submission_fallback(mut self, submitted_at: Option<Timestamp>) -> Self {
        if let Some(at) = submitted_at {
            for stage in self.stages.iter_mut() {
                if stage.key.is_first() && stage.time.is_none() {
                    stage.time = Some(at);
                }
            }
        }
        self
    }

    pub fn stages(&self) -> &[StageDescriptor] {
        &self.stages
    }

    pub fn into_stages(self) -> Vec<StageDescriptor> {
        self.stages
    }

    /// First stage that is not finished, or the last stage when all are.
    pub fn active_stage(&self) -> Option<&StageDescriptor> {
        self.stages
            .iter()
            .find(|s| s.status != StageState::Finished)
            .or_else(|| self.stages.last())
    }

    /// Label of the stage the paper is currently in.
    pub fn current_stage_label(&self) -> &'static str {
        self.active_stage()
            .map(|s| s.label)
            .unwrap_or_else(|| ProgressStage::Submission.label())
    }

    /// Returns true if every stage is finished.
    pub fn is_complete(&self) -> bool {
        self.stages.iter().all(|s| s.status == StageState::Finished)
    }

    pub fn finished_count(&self) -> usize {
        self.stages
            .iter()
            .filter(|s| s.status == StageState::Finished)
            .count()
    }
}
