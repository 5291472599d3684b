//! Reporte de una ejecución, en texto o JSON.
use serde::Serialize;
use uuid::Uuid;

use story_core::{StoryError, StoryFailure};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Failed,
    Error,
}

#[derive(Debug, Serialize)]
pub struct StoryReport {
    pub subject: String,
    pub outcome: Outcome,
    pub run_id: Option<Uuid>,
    pub events: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<StoryFailure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StoryReport {
    pub fn new(subject: &str, result: &Result<(), StoryError>, run_id: Option<Uuid>, events: usize) -> Self {
        let (outcome, failure, error) = match result {
            Ok(()) => (Outcome::Passed, None, None),
            Err(StoryError::StoryFailed(f)) => (Outcome::Failed, Some(f.clone()), None),
            Err(other) => (Outcome::Error, None, Some(other.to_string())),
        };
        Self { subject: subject.to_string(),
               outcome,
               run_id,
               events,
               failure,
               error }
    }

    /// Código de salida del proceso: 0 éxito, 1 historia fallida, 2 error.
    pub fn exit_code(&self) -> i32 {
        match self.outcome {
            Outcome::Passed => 0,
            Outcome::Failed => 1,
            Outcome::Error => 2,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        match (&self.outcome, &self.failure, &self.error) {
            (Outcome::Failed, Some(f), _) => format!("[{}] FAILED {}", self.subject, f),
            (Outcome::Error, _, Some(e)) => format!("[{}] ERROR {}", self.subject, e),
            _ => format!("[{}] PASSED ({} events)", self.subject, self.events),
        }
    }
}
