//! Tipos de evento de una ejecución y estructura `StoryEvent`.
//!
//! Cada intento de ejecución (`run_id`) emite eventos append-only a un
//! `EventStore`. Permiten auditar qué oraciones corrieron, cuándo se tomaron
//! y restauraron snapshots y qué aserciones fallaron, sin inspeccionar el
//! estado del sujeto.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sentence::Keyword;
use crate::snapshot::SnapshotReason;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoryEventKind {
    /// Primer evento de un `run_id`: fija el sujeto y el fingerprint del script.
    RunStarted {
        subject: String,
        story_hash: String,
        line_count: usize,
    },
    /// El fallback reintenta la historia sobre un tipo anidado.
    FallbackAttempted { parent: String, nested: String },
    SentenceStarted {
        line: usize,
        keyword: Keyword,
        template_key: String,
    },
    SnapshotCaptured { line: usize, reason: SnapshotReason },
    SnapshotRestored { line: usize, from_line: usize },
    ThenPassed { line: usize },
    /// Un handler emitió una señal de comparación; no detiene la historia.
    ComparisonFailed {
        line: usize,
        expected: String,
        actual: String,
        fail_count: usize,
    },
    RunSucceeded,
    RunFailed { fail_count: usize },
    /// La ejecución terminó por un error fatal (parse, resolución, handler).
    RunAborted { error: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryEvent {
    pub seq: u64, // orden de append dentro del run
    pub run_id: Uuid,
    pub kind: StoryEventKind,
    pub ts: DateTime<Utc>, // metadato, no entra en el fingerprint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kinds_roundtrip_through_json() {
        let ev = StoryEvent { seq: 3,
                              run_id: Uuid::new_v4(),
                              kind: StoryEventKind::SnapshotCaptured { line: 2,
                                                                       reason: SnapshotReason::WhenBlock },
                              ts: Utc::now() };
        let json = serde_json::to_value(&ev).expect("serialize");
        assert_eq!(json["kind"]["SnapshotCaptured"]["reason"], "WhenBlock");
        let back: StoryEvent = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back.kind, ev.kind);
        assert_eq!(back.run_id, ev.run_id);
    }
}
