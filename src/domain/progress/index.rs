//! ProgressIndex - current-stage summaries keyed by paper id.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use super::{ProgressRecord, ProgressTimeline, StageState};
use crate::domain::foundation::{BadgeColor, PaperId};

/// Label shown for papers the progress list has no entry for.
pub const AWAITING_UPDATE_LABEL: &str = "待更新";

/// Where one paper currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub current_stage: &'static str,
    pub state: StageState,
    pub state_text: &'static str,
    pub color: BadgeColor,
}

impl ProgressSummary {
    fn from_timeline(timeline: &ProgressTimeline) -> Self {
        let (state, color) = timeline
            .active_stage()
            .map(|s| (s.status, s.color))
            .unwrap_or((StageState::Current, BadgeColor::Blue));
        Self {
            current_stage: timeline.current_stage_label(),
            state,
            state_text: state.text(),
            color,
        }
    }
}

/// Lookup from paper id to progress summary.
#[derive(Debug, Clone, Default)]
pub struct ProgressIndex {
    entries: HashMap<PaperId, ProgressSummary>,
}

impl ProgressIndex {
    /// Indexes already-decoded records. Records without a paper id are skipped.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ProgressRecord>) -> Self {
        let entries = records
            .into_iter()
            .filter_map(|record| {
                let id = record.paper_id()?.clone();
                let timeline = ProgressTimeline::from_record(Some(record));
                Some((id, ProgressSummary::from_timeline(&timeline)))
            })
            .collect();
        Self { entries }
    }

    /// Indexes raw progress list items.
    pub fn from_values(items: &[Value]) -> Self {
        let records: Vec<ProgressRecord> = items.iter().map(ProgressRecord::from_value).collect();
        Self::from_records(records.iter())
    }

    pub fn get(&self, paper_id: &PaperId) -> Option<&ProgressSummary> {
        self.entries.get(paper_id)
    }

    /// Current stage label for a paper, with a placeholder when unknown.
    pub fn stage_label(&self, paper_id: &PaperId) -> &'static str {
        self.get(paper_id)
            .map(|s| s.current_stage)
            .unwrap_or(AWAITING_UPDATE_LABEL)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn indexes_by_string_normalized_id() {
        let items = vec![
            json!({ "paper_id": 1, "submission": true }),
            json!({ "id": "2", "submission": true, "initial_review": true }),
        ];
        let index = ProgressIndex::from_values(&items);
        assert_eq!(index.len(), 2);

        let first = index.get(&PaperId::new("1").unwrap()).unwrap();
        assert_eq!(first.current_stage, "初审");
        assert_eq!(first.state, StageState::Current);
        assert_eq!(first.state_text, "进行中");
        assert_eq!(first.color, BadgeColor::Blue);

        assert_eq!(index.stage_label(&PaperId::from_number(2)), "同行评审");
    }

    #[test]
    fn entries_without_id_are_skipped() {
        let items = vec![json!({ "submission": true }), json!("garbage")];
        assert!(ProgressIndex::from_values(&items).is_empty());
    }

    #[test]
    fn unknown_paper_gets_placeholder_label() {
        let index = ProgressIndex::default();
        assert_eq!(index.stage_label(&PaperId::from_number(5)), "待更新");
    }

    #[test]
    fn fully_published_paper_reports_finished_last_stage() {
        let item = json!({
            "paper_id": 9,
            "submission": true, "initial_review": true, "peer_review": true,
            "revision": true, "final_decision": true, "payment": true,
            "scheduling": true, "published": true,
        });
        let index = ProgressIndex::from_values(&[item]);
        let summary = index.get(&PaperId::from_number(9)).unwrap();
        assert_eq!(summary.current_stage, "发表");
        assert_eq!(summary.state, StageState::Finished);
        assert_eq!(summary.color, BadgeColor::Green);
    }
}
