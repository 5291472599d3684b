//! Máquina de estados de una ejecución de historia.
//!
//! Una ejecución (`StoryRun`) es dueña exclusiva de la instancia del sujeto y
//! del snapshot vivo. Procesa una línea a la vez:
//! parse -> resolve -> bookkeeping de snapshots -> invoke -> agregación.

use log::{debug, info, warn};
use uuid::Uuid;

use crate::errors::{StoryError, StoryFailure};
use crate::event::{EventStore, StoryEventKind};
use crate::hashing::story_fingerprint;
use crate::sentence::{parse_sentence, Keyword, Sentence};
use crate::snapshot::{capture, restore, Snapshot, SnapshotReason};
use crate::subject::{resolve, ComparisonFailure, HandlerError, Invocation, SubjectType};

/// Estado de una ejecución.
///
/// Transiciones válidas: `Idle` -> `Running` -> (`Succeeded` | `Failed`).
/// Un error fatal deja la ejecución en `Running`: no hay resultado que
/// reportar, sólo el error propagado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunState {
    Idle,
    Running,
    Succeeded,
    Failed,
}

/// Destino de los eventos de un intento de ejecución.
pub struct RunRecorder<'a> {
    events: &'a mut dyn EventStore,
    run_id: Uuid,
}

impl<'a> RunRecorder<'a> {
    pub fn new(events: &'a mut dyn EventStore) -> Self {
        Self { events,
               run_id: Uuid::new_v4() }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn record(&mut self, kind: StoryEventKind) {
        let _ = self.events.append_kind(self.run_id, kind);
    }
}

pub(crate) struct StoryRun<'t, 'r, 'e, S: 'static> {
    subject_type: &'t SubjectType<S>,
    recorder: &'r mut RunRecorder<'e>,
    subject: S,
    /// Único snapshot vivo: el último tomado.
    snapshot: Option<Snapshot<S>>,
    in_when_block: bool,
    failure: Option<StoryFailure>,
    state: RunState,
}

impl<'t, 'r, 'e, S: 'static> StoryRun<'t, 'r, 'e, S> {
    pub(crate) fn new(subject_type: &'t SubjectType<S>, recorder: &'r mut RunRecorder<'e>) -> Self {
        Self { subject: subject_type.instantiate(),
               subject_type,
               recorder,
               snapshot: None,
               in_when_block: false,
               failure: None,
               state: RunState::Idle }
    }

    pub(crate) fn drive(&mut self, script: &str) -> Result<(), StoryError> {
        debug_assert_eq!(self.state, RunState::Idle, "a StoryRun is single-use");
        self.state = RunState::Running;

        let subject_name = crate::subject::StoryTarget::name(self.subject_type).to_string();
        let line_count = script.lines().count();
        info!("story run {} started on {} ({} lines)", self.recorder.run_id(), subject_name, line_count);
        self.recorder.record(StoryEventKind::RunStarted { subject: subject_name,
                                                          story_hash: story_fingerprint(script),
                                                          line_count });

        for (idx, line) in script.lines().enumerate() {
            self.step(idx + 1, line)?;
        }

        match self.failure.clone() {
            Some(failure) => {
                self.state = RunState::Failed;
                info!("story run {} failed: {}", self.recorder.run_id(), failure);
                self.recorder.record(StoryEventKind::RunFailed { fail_count: failure.fail_count });
                Err(StoryError::StoryFailed(failure))
            }
            None => {
                self.state = RunState::Succeeded;
                info!("story run {} succeeded", self.recorder.run_id());
                self.recorder.record(StoryEventKind::RunSucceeded);
                Ok(())
            }
        }
    }

    fn step(&mut self, line_no: usize, line: &str) -> Result<(), StoryError> {
        let sentence = parse_sentence(line)?;
        debug!("line {line_no}: {} {:?} <- {}", sentence.keyword, sentence.template_key, sentence.parameter);
        self.recorder.record(StoryEventKind::SentenceStarted { line: line_no,
                                                               keyword: sentence.keyword,
                                                               template_key: sentence.template_key.clone() });

        let subject_type = self.subject_type;
        let handler = resolve(subject_type, sentence.keyword, &sentence.template_key)?;

        match sentence.keyword {
            Keyword::When if !self.in_when_block => {
                self.in_when_block = true;
                self.take_snapshot(line_no, SnapshotReason::WhenBlock);
            }
            Keyword::Then => {
                self.in_when_block = false;
                self.take_snapshot(line_no, SnapshotReason::BeforeThen);
            }
            Keyword::Given | Keyword::When => {}
        }

        match handler.invoke(&mut self.subject, &sentence.parameter) {
            Invocation::ParameterMismatch => {
                return Err(StoryError::ParameterMismatch { sentence: sentence.text,
                                                           expected: handler.param_kind(),
                                                           found: sentence.parameter.raw().to_string() })
            }
            Invocation::Completed(Ok(())) => {
                if sentence.keyword == Keyword::Then {
                    self.recorder.record(StoryEventKind::ThenPassed { line: line_no });
                    self.restore_latest(line_no);
                }
            }
            Invocation::Completed(Err(HandlerError::Comparison(signal))) => {
                self.on_comparison_failure(line_no, &sentence, signal);
            }
            Invocation::Completed(Err(HandlerError::Other(source))) => {
                return Err(StoryError::Handler { sentence: sentence.text,
                                                 source })
            }
        }
        Ok(())
    }

    fn on_comparison_failure(&mut self, line_no: usize, sentence: &Sentence, signal: ComparisonFailure) {
        let fail_count = match self.failure.as_mut() {
            Some(record) => {
                record.fail_count += 1;
                record.fail_count
            }
            None => {
                self.failure = Some(StoryFailure::first(&sentence.text, signal.expected.clone(), signal.actual.clone()));
                1
            }
        };
        warn!("line {line_no}: {:?} failed: {}", sentence.text, signal);
        self.recorder.record(StoryEventKind::ComparisonFailed { line: line_no,
                                                                expected: signal.expected,
                                                                actual: signal.actual,
                                                                fail_count });
        // Las oraciones siguientes continúan desde una línea base limpia.
        self.restore_latest(line_no);
    }

    fn take_snapshot(&mut self, line_no: usize, reason: SnapshotReason) {
        debug!("line {line_no}: snapshot ({reason:?})");
        self.snapshot = Some(capture(self.subject_type, &self.subject, line_no, reason));
        self.recorder.record(StoryEventKind::SnapshotCaptured { line: line_no,
                                                                reason });
    }

    fn restore_latest(&mut self, line_no: usize) {
        match &self.snapshot {
            Some(snapshot) => {
                restore(self.subject_type, &mut self.subject, snapshot);
                self.recorder.record(StoryEventKind::SnapshotRestored { line: line_no,
                                                                        from_line: snapshot.line() });
            }
            None => debug!("line {line_no}: no snapshot to restore"),
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> RunState {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn subject(&self) -> &S {
        &self.subject
    }
}

/// Ejecuta `script` sobre una instancia nueva de `subject_type`.
pub(crate) fn execute_story<S: 'static>(subject_type: &SubjectType<S>,
                                        script: &str,
                                        recorder: &mut RunRecorder<'_>)
                                        -> Result<(), StoryError> {
    let result = StoryRun::new(subject_type, recorder).drive(script);
    if let Err(err) = &result {
        if err.failure().is_none() {
            recorder.record(StoryEventKind::RunAborted { error: err.to_string() });
        }
    }
    result
}
