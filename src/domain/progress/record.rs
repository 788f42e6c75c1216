//! ProgressRecord - per-stage completion signals for one paper.
//!
//! Each stage may carry a completion flag under its key (`peer_review`) and a
//! completion time under `<key>_time` or `<key>_at`. Flags arrive as booleans,
//! 0/1 numbers, or words; unreadable values count as absent.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::ProgressStage;
use crate::domain::foundation::{PaperId, Timestamp};

/// Completion signal of a single stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageSignal {
    /// Explicit flag, when the backend sent one.
    pub flag: Option<bool>,
    /// Completion time, when the backend sent one.
    pub time: Option<Timestamp>,
}

impl StageSignal {
    /// An explicit flag decides; without one, a completion time implies done.
    pub fn is_complete(&self) -> bool {
        self.flag.unwrap_or(self.time.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.flag.is_none() && self.time.is_none()
    }
}

/// Progress signals for one paper.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressRecord {
    paper_id: Option<PaperId>,
    signals: BTreeMap<ProgressStage, StageSignal>,
}

impl ProgressRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a record from a JSON object. Never fails; non-objects yield an
    /// empty record.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(map),
            _ => Self::default(),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let paper_id = map
            .get("paper_id")
            .and_then(PaperId::from_value)
            .or_else(|| map.get("id").and_then(PaperId::from_value));

        let signals = ProgressStage::ALL
            .iter()
            .filter_map(|stage| {
                let key = stage.key();
                let flag = map.get(key).and_then(read_flag);
                let time = [format!("{key}_time"), format!("{key}_at")]
                    .iter()
                    .find_map(|k| map.get(k).and_then(read_time))
                    .or_else(|| map.get(key).and_then(read_time));
                let signal = StageSignal { flag, time };
                (!signal.is_empty()).then_some((*stage, signal))
            })
            .collect();

        Self { paper_id, signals }
    }

    /// Marks a stage finished, optionally at a given time.
    pub fn with_finished(mut self, stage: ProgressStage, time: Option<Timestamp>) -> Self {
        self.signals.insert(
            stage,
            StageSignal {
                flag: Some(true),
                time,
            },
        );
        self
    }

    /// Marks a stage explicitly not finished.
    pub fn with_unfinished(mut self, stage: ProgressStage) -> Self {
        self.signals.insert(
            stage,
            StageSignal {
                flag: Some(false),
                time: None,
            },
        );
        self
    }

    pub fn with_paper_id(mut self, paper_id: PaperId) -> Self {
        self.paper_id = Some(paper_id);
        self
    }

    pub fn paper_id(&self) -> Option<&PaperId> {
        self.paper_id.as_ref()
    }

    /// Signal of a stage; absent stages have an empty signal.
    pub fn signal(&self, stage: ProgressStage) -> StageSignal {
        self.signals.get(&stage).copied().unwrap_or_default()
    }

    pub fn is_complete(&self, stage: ProgressStage) -> bool {
        self.signal(stage).is_complete()
    }

    /// Returns true if no stage carries any signal.
    pub fn is_empty(&self) -> bool {
        self.signals.values().all(StageSignal::is_empty)
    }
}

impl<'de> Deserialize<'de> for ProgressRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(ProgressRecord::from_value(&value))
    }
}

fn read_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "done" | "finished" | "completed" => Some(true),
            "false" | "0" | "no" | "pending" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn read_time(value: &Value) -> Option<Timestamp> {
    match value {
        Value::String(s) => Timestamp::parse(s),
        _ => None,
    }
}
