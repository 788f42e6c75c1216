//! ProgressStage and StageState - the fixed editorial pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::BadgeColor;

/// One step of the editorial pipeline, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStage {
    Submission,
    InitialReview,
    PeerReview,
    Revision,
    FinalDecision,
    Payment,
    Scheduling,
    Published,
}

impl ProgressStage {
    /// All stages in pipeline order.
    pub const ALL: [ProgressStage; 8] = [
        ProgressStage::Submission,
        ProgressStage::InitialReview,
        ProgressStage::PeerReview,
        ProgressStage::Revision,
        ProgressStage::FinalDecision,
        ProgressStage::Payment,
        ProgressStage::Scheduling,
        ProgressStage::Published,
    ];

    /// Field name of the stage in progress payloads.
    pub fn key(&self) -> &'static str {
        match self {
            ProgressStage::Submission => "submission",
            ProgressStage::InitialReview => "initial_review",
            ProgressStage::PeerReview => "peer_review",
            ProgressStage::Revision => "revision",
            ProgressStage::FinalDecision => "final_decision",
            ProgressStage::Payment => "payment",
            ProgressStage::Scheduling => "scheduling",
            ProgressStage::Published => "published",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProgressStage::Submission => "投稿",
            ProgressStage::InitialReview => "初审",
            ProgressStage::PeerReview => "同行评审",
            ProgressStage::Revision => "修改",
            ProgressStage::FinalDecision => "终审决定",
            ProgressStage::Payment => "缴费",
            ProgressStage::Scheduling => "排期",
            ProgressStage::Published => "发表",
        }
    }

    /// Zero-based position in the pipeline.
    pub fn position(&self) -> usize {
        *self as usize
    }

    pub fn is_first(&self) -> bool {
        *self == ProgressStage::Submission
    }
}

impl fmt::Display for ProgressStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a stage sits relative to the paper's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StageState {
    Finished,
    Current,
    #[default]
    Pending,
}

impl StageState {
    /// Short status text shown next to the stage.
    pub fn text(&self) -> &'static str {
        match self {
            StageState::Finished => "已完成",
            StageState::Current => "进行中",
            StageState::Pending => "未开始",
        }
    }

    pub fn color(&self) -> BadgeColor {
        match self {
            StageState::Finished => BadgeColor::Green,
            StageState::Current => BadgeColor::Blue,
            StageState::Pending => BadgeColor::Gray,
        }
    }
}

impl fmt::Display for StageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_position_order() {
        for (i, stage) in ProgressStage::ALL.iter().enumerate() {
            assert_eq!(stage.position(), i);
        }
        assert!(ProgressStage::ALL[0].is_first());
        assert_eq!(ProgressStage::ALL[7], ProgressStage::Published);
    }

    #[test]
    fn keys_match_serialized_names() {
        for stage in ProgressStage::ALL {
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage.key()));
        }
    }

    #[test]
    fn stage_state_text_and_color() {
        assert_eq!(StageState::Finished.text(), "已完成");
        assert_eq!(StageState::Current.color(), BadgeColor::Blue);
        assert_eq!(StageState::default(), StageState::Pending);
    }
}
