use log::warn;

use super::run::RunRecorder;
use crate::errors::StoryError;
use crate::event::{EventStore, StoryEventKind};
use crate::subject::StoryTarget;

/// Ejecuta la historia sobre `target`; si falla con `GivenNotFound`,
/// reintenta sobre cada tipo anidado directamente, en orden de declaración.
///
/// Se detiene en el primer anidado que no devuelva `GivenNotFound` y
/// devuelve su resultado tal cual (éxito, `StoryFailed` u otro error). Si
/// ninguno tiene el `Given`, devuelve el `GivenNotFound` del intento directo.
pub(crate) fn run_with_fallback(events: &mut dyn EventStore,
                                script: &str,
                                target: &dyn StoryTarget)
                                -> Result<(), StoryError> {
    let mut recorder = RunRecorder::new(&mut *events);
    let direct = target.execute(script, &mut recorder);
    let parent_run = recorder.run_id();

    let given_not_found = match direct {
        Err(err) if err.is_given_not_found() => err,
        other => return other,
    };

    for nested in target.nested_targets() {
        warn!("{}: no matching Given ({}), retrying on nested {}", target.name(), given_not_found, nested.name());
        let _ = events.append_kind(parent_run,
                                   StoryEventKind::FallbackAttempted { parent: target.name().to_string(),
                                                                       nested: nested.name().to_string() });
        let mut nested_recorder = RunRecorder::new(&mut *events);
        match nested.execute(script, &mut nested_recorder) {
            Err(err) if err.is_given_not_found() => continue,
            other => return other,
        }
    }

    Err(given_not_found)
}
