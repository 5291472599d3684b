//! Snapshot store del sujeto.
//!
//! `capture` construye una instancia nueva del mismo tipo sujeto (con su
//! contenedora, si es anidado) y le transfiere cada campo registrado en
//! cada layer según su `CopyPolicy`. `restore` hace la transferencia
//! inversa sobre la instancia viva. El snapshot no se modifica nunca, así
//! que puede restaurarse más de una vez.

use serde::{Deserialize, Serialize};

use crate::subject::SubjectType;

/// Motivo por el que el engine tomó un snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapshotReason {
    /// Línea base tomada al abrir un bloque `When`.
    WhenBlock,
    /// Tomado inmediatamente antes de evaluar un `Then`.
    BeforeThen,
}

/// Copia independiente del estado del sujeto en un punto de la historia.
pub struct Snapshot<S> {
    state: S,
    line: usize,
    reason: SnapshotReason,
}

impl<S> Snapshot<S> {
    /// Línea del script (base 1) en la que se tomó.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn reason(&self) -> SnapshotReason {
        self.reason
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

pub fn capture<S: 'static>(subject_type: &SubjectType<S>, live: &S, line: usize, reason: SnapshotReason) -> Snapshot<S> {
    let mut state = subject_type.instantiate();
    for slot in subject_type.layers().iter().flat_map(|l| l.fields()) {
        slot.transfer(live, &mut state);
    }
    Snapshot { state, line, reason }
}

pub fn restore<S: 'static>(subject_type: &SubjectType<S>, live: &mut S, snapshot: &Snapshot<S>) {
    for slot in subject_type.layers().iter().flat_map(|l| l.fields()) {
        slot.transfer(&snapshot.state, live);
    }
}
