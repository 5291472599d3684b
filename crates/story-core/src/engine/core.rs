//! `StoryTester`: punto de entrada para ejecutar historias.

use uuid::Uuid;

use super::fallback;
use super::run::RunRecorder;
use crate::errors::StoryError;
use crate::event::{EventStore, InMemoryEventStore, StoryEvent, StoryEventKind};
use crate::subject::StoryTarget;

/// Ejecutor de historias.
///
/// Responsable de validar argumentos, abrir un `run_id` por intento y
/// registrar los eventos de cada ejecución en su `EventStore`.
#[derive(Debug)]
pub struct StoryTester<E: EventStore = InMemoryEventStore> {
    events: E,
}

impl StoryTester<InMemoryEventStore> {
    /// Crea un tester con store en memoria
    pub fn new() -> Self {
        Self::with_store(InMemoryEventStore::default())
    }
}

impl Default for StoryTester<InMemoryEventStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EventStore> StoryTester<E> {
    pub fn with_store(events: E) -> Self {
        Self { events }
    }

    pub fn event_store(&self) -> &E {
        &self.events
    }

    /// Ejecuta la historia directamente sobre `subject`, sin fallback.
    ///
    /// # Ejemplo
    /// ```ignore
    /// tester.run_against_type("Given a Cat of age 3\nThen the kaki size is 0", &cat_story)?;
    /// ```
    pub fn run_against_type(&mut self, script: &str, subject: &dyn StoryTarget) -> Result<(), StoryError> {
        validate_script(script)?;
        let mut recorder = RunRecorder::new(&mut self.events);
        subject.execute(script, &mut recorder)
    }

    /// Ejecuta la historia sobre `subject` o, si no tiene el `Given`, sobre
    /// el primero de sus tipos anidados que lo tenga.
    pub fn run_with_fallback(&mut self, script: &str, subject: &dyn StoryTarget) -> Result<(), StoryError> {
        validate_script(script)?;
        fallback::run_with_fallback(&mut self.events, script, subject)
    }

    /// Id del último run registrado (el último intento, si hubo fallback).
    pub fn last_run_id(&self) -> Option<Uuid> {
        self.events.runs().last().copied()
    }

    /// Eventos del último run.
    pub fn events(&self) -> Vec<StoryEvent> {
        self.last_run_id().map(|id| self.events.list(id)).unwrap_or_default()
    }

    /// Variante compacta de eventos del último run.
    pub fn event_variants(&self) -> Vec<&'static str> {
        self.events()
            .iter()
            .map(|e| match e.kind {
                StoryEventKind::RunStarted { .. } => "I",
                StoryEventKind::FallbackAttempted { .. } => "B",
                StoryEventKind::SentenceStarted { .. } => "S",
                StoryEventKind::SnapshotCaptured { .. } => "P",
                StoryEventKind::SnapshotRestored { .. } => "R",
                StoryEventKind::ThenPassed { .. } => "T",
                StoryEventKind::ComparisonFailed { .. } => "X",
                StoryEventKind::RunSucceeded => "C",
                StoryEventKind::RunFailed { .. } => "F",
                StoryEventKind::RunAborted { .. } => "A",
            })
            .collect()
    }
}

fn validate_script(script: &str) -> Result<(), StoryError> {
    if script.trim().is_empty() {
        return Err(StoryError::InvalidArgument("story script is empty".into()));
    }
    Ok(())
}
