//! IndexProgressHandler - joins paper lists with their pipeline progress.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::adapters::api::ListPayload;
use crate::domain::foundation::{BadgeColor, PaperId, Timestamp};
use crate::domain::progress::{
    ProgressIndex, ProgressRecord, ProgressTimeline, StageState, AWAITING_UPDATE_LABEL,
};
use crate::domain::status::{ProgressStatus, StatusFilter, StatusVocabulary};

/// One row of a paper list with its progress columns filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperProgressRow {
    pub paper_id: PaperId,
    pub title: String,
    pub status: ProgressStatus,
    pub status_label: Cow<'static, str>,
    pub status_color: BadgeColor,
    pub current_stage: Cow<'static, str>,
    /// State of the current stage, when the progress list knows the paper.
    pub stage_state: Option<StageState>,
    pub stage_color: BadgeColor,
}

/// Handler building progress views from list payloads.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndexProgressHandler;

impl IndexProgressHandler {
    pub fn new() -> Self {
        Self
    }

    /// Indexes a progress list payload of any list shape.
    pub fn handle(&self, progress_payload: &Value) -> ProgressIndex {
        let payload = ListPayload::decode(progress_payload);
        if payload.is_absent() {
            debug!("progress payload carries no list");
        }
        let index = ProgressIndex::from_values(payload.items());
        debug!(papers = index.len(), "progress index built");
        index
    }

    /// Timeline of one paper. A null or non-object record yields the
    /// starting timeline; the paper's submission date fills a missing
    /// submission time.
    pub fn timeline(&self, record: &Value, submitted_at: Option<Timestamp>) -> ProgressTimeline {
        let record = record.is_object().then(|| ProgressRecord::from_value(record));
        ProgressTimeline::from_record(record.as_ref()).with_submission_fallback(submitted_at)
    }

    /// Paper list rows with status and current stage, filtered by status.
    ///
    /// Papers are keyed by `paper_id`, falling back to `id`; papers with
    /// neither are skipped. Papers missing from the progress list show their
    /// own `current_stage` text, else the awaiting-update label, in gray.
    pub fn rows(
        &self,
        papers_payload: &Value,
        progress_payload: &Value,
        filter: &StatusFilter<ProgressStatus>,
    ) -> Vec<PaperProgressRow> {
        let index = self.handle(progress_payload);
        let papers = ListPayload::decode(papers_payload);
        papers
            .items()
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|paper| {
                let paper_id = paper
                    .get("paper_id")
                    .and_then(PaperId::from_value)
                    .or_else(|| paper.get("id").and_then(PaperId::from_value))?;
                let raw_status = paper.get("status").and_then(Value::as_str);
                if !filter.matches(raw_status) {
                    return None;
                }
                let status = ProgressStatus::normalize(raw_status);
                let (current_stage, stage_state, stage_color) = match index.get(&paper_id) {
                    Some(summary) => (
                        Cow::Borrowed(summary.current_stage),
                        Some(summary.state),
                        summary.color,
                    ),
                    None => (paper_stage_text(paper), None, BadgeColor::Gray),
                };
                Some(PaperProgressRow {
                    paper_id,
                    title: paper_title(paper),
                    status,
                    status_label: ProgressStatus::display_label(raw_status),
                    status_color: status.color(),
                    current_stage,
                    stage_state,
                    stage_color,
                })
            })
            .collect()
    }
}

fn paper_stage_text(paper: &Map<String, Value>) -> Cow<'static, str> {
    paper
        .get("current_stage")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Cow::Owned(s.to_string()))
        .unwrap_or(Cow::Borrowed(AWAITING_UPDATE_LABEL))
}

fn paper_title(paper: &Map<String, Value>) -> String {
    ["title_zh", "title_en", "title"]
        .iter()
        .filter_map(|key| paper.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|t| !t.is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::progress::ProgressStage;
    use serde_json::json;

    #[test]
    fn indexes_wrapped_progress_list() {
        let handler = IndexProgressHandler::new();
        let index = handler.handle(&json!({"items": [
            {"paper_id": 1, "submission": true},
            {"paper_id": "2"},
        ]}));
        assert_eq!(index.len(), 2);
        assert_eq!(index.stage_label(&PaperId::from_number(1)), "初审");
        assert_eq!(index.stage_label(&PaperId::from_number(2)), "投稿");
    }

    #[test]
    fn malformed_progress_payload_gives_empty_index() {
        assert!(IndexProgressHandler::new().handle(&json!({"error": "oops"})).is_empty());
        assert!(IndexProgressHandler::new().handle(&json!(null)).is_empty());
    }

    #[test]
    fn timeline_falls_back_to_submission_date() {
        let submitted = Timestamp::parse("2024-03-01").unwrap();
        let timeline = IndexProgressHandler::new().timeline(&json!(null), Some(submitted));
        let first = &timeline.stages()[0];
        assert_eq!(first.key, ProgressStage::Submission);
        assert_eq!(first.status, StageState::Current);
        assert_eq!(first.time, Some(submitted));
    }

    #[test]
    fn rows_join_status_and_stage() {
        let papers = json!({"data": [
            {"id": 1, "title_zh": "论文一", "status": "Reviewing"},
            {"id": "2", "title_en": "Paper Two", "status": "Brand New Stage"},
            {"id": 3, "title": "Three", "status": null},
            {"title_zh": "no id"},
        ]});
        let progress = json!([
            {"paper_id": 1, "submission": true, "initial_review": true},
        ]);

        let rows = IndexProgressHandler::new().rows(&papers, &progress, &StatusFilter::All);
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].title, "论文一");
        assert_eq!(rows[0].status, ProgressStatus::Reviewing);
        assert_eq!(rows[0].current_stage, "同行评审");

        assert_eq!(rows[1].title, "Paper Two");
        assert_eq!(rows[1].status, ProgressStatus::Unknown);
        assert_eq!(rows[1].status_label, "Brand New Stage");
        assert_eq!(rows[1].current_stage, AWAITING_UPDATE_LABEL);

        assert_eq!(rows[2].status_label, "未知状态");
    }

    #[test]
    fn rows_prefer_paper_id_over_id() {
        let papers = json!([{"id": 5, "paper_id": 1, "title_zh": "论文", "status": "Reviewing"}]);
        let progress = json!([{"paper_id": 1, "submission": true}]);

        let rows = IndexProgressHandler::new().rows(&papers, &progress, &StatusFilter::All);
        assert_eq!(rows[0].paper_id, PaperId::from_number(1));
        assert_eq!(rows[0].current_stage, "初审");
        assert_eq!(rows[0].stage_state, Some(StageState::Current));
        assert_eq!(rows[0].stage_color, BadgeColor::Blue);
    }

    #[test]
    fn rows_without_progress_use_paper_stage_then_placeholder() {
        let papers = json!([
            {"paper_id": 8, "current_stage": " 外审 "},
            {"paper_id": 9, "current_stage": ""},
        ]);

        let rows = IndexProgressHandler::new().rows(&papers, &json!({"items": []}), &StatusFilter::All);
        assert_eq!(rows[0].current_stage, "外审");
        assert_eq!(rows[1].current_stage, AWAITING_UPDATE_LABEL);
        for row in &rows {
            assert_eq!(row.stage_state, None);
            assert_eq!(row.stage_color, BadgeColor::Gray);
        }
    }

    #[test]
    fn rows_respect_status_filter() {
        let papers = json!([
            {"id": 1, "status": "Published"},
            {"id": 2, "status": "paying"},
            {"id": 3, "status": "PUBLISHED"},
        ]);
        let filter = StatusFilter::parse(Some("published"));
        let rows = IndexProgressHandler::new().rows(&papers, &json!([]), &filter);
        let ids: Vec<&str> = rows.iter().map(|r| r.paper_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
