//! Errores del motor de historias.
//!
//! `StoryError` cubre todas las condiciones que una ejecución puede devolver.
//! Sólo `StoryFailed` es diferido (se acumula durante la ejecución y se
//! devuelve al final); el resto aborta la ejecución en cuanto ocurre.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sentence::ParamKind;

/// Registro agregado de fallos de una historia.
///
/// Se crea una única vez, con los datos del primer `Then` fallido, y sólo
/// `fail_count` crece después.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryFailure {
    pub sentence: String,
    pub expected: String,
    pub actual: String,
    pub fail_count: usize,
}

impl StoryFailure {
    pub(crate) fn first(sentence: &str, expected: String, actual: String) -> Self {
        Self { sentence: sentence.to_string(),
               expected,
               actual,
               fail_count: 1 }
    }

    /// Texto completo de la primera oración `Then` que falló.
    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    /// Valor esperado según la historia (el parámetro del script).
    pub fn story_expected(&self) -> &str {
        &self.expected
    }

    /// Valor efectivamente calculado por el sujeto.
    pub fn test_result(&self) -> &str {
        &self.actual
    }

    /// Número total de oraciones que fallaron.
    pub fn num_fail(&self) -> usize {
        self.fail_count
    }
}

impl std::fmt::Display for StoryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{:?} expected {:?} but got {:?} ({} failing sentence(s))",
               self.sentence, self.expected, self.actual, self.fail_count)
    }
}

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("malformed sentence {line:?}: {reason}")]
    MalformedSentence { line: String, reason: String },
    #[error("no Given handler matches {template:?}")]
    GivenNotFound { template: String },
    #[error("no When handler matches {template:?}")]
    WhenNotFound { template: String },
    #[error("no Then handler matches {template:?}")]
    ThenNotFound { template: String },
    #[error("parameter {found:?} of {sentence:?} cannot be passed as {expected:?}")]
    ParameterMismatch { sentence: String, expected: ParamKind, found: String },
    /// Error no comparativo de un handler. El error original se conserva sin
    /// modificar y se obtiene con `std::error::Error::source()`.
    #[error("handler for {sentence:?} failed: {source}")]
    Handler {
        sentence: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("story failed: {0}")]
    StoryFailed(StoryFailure),
}

impl StoryError {
    /// `true` sólo para `GivenNotFound`, la señal que observa el fallback de
    /// sujetos anidados.
    pub fn is_given_not_found(&self) -> bool {
        matches!(self, StoryError::GivenNotFound { .. })
    }

    /// Registro de fallos si la historia terminó con aserciones fallidas.
    pub fn failure(&self) -> Option<&StoryFailure> {
        match self {
            StoryError::StoryFailed(f) => Some(f),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_accessors_expose_recorded_values() {
        let f = StoryFailure::first("Then the kaki size is 6", "6".into(), "5".into());
        assert_eq!(f.sentence(), "Then the kaki size is 6");
        assert_eq!(f.story_expected(), "6");
        assert_eq!(f.test_result(), "5");
        assert_eq!(f.num_fail(), 1);
    }

    #[test]
    fn story_failed_display_mentions_count() {
        let err = StoryError::StoryFailed(StoryFailure { sentence: "Then x is 1".into(),
                                                         expected: "1".into(),
                                                         actual: "2".into(),
                                                         fail_count: 3 });
        let msg = err.to_string();
        assert!(msg.contains("Then x is 1"));
        assert!(msg.contains("3 failing"));
        assert!(err.failure().is_some());
    }

    #[test]
    fn handler_error_exposes_the_original_as_source() {
        use std::error::Error;

        let err = StoryError::Handler { sentence: "When it breaks 1".into(),
                                        source: Box::new(std::io::Error::other("disk full")) };
        let source = err.source().expect("source");
        assert_eq!(source.to_string(), "disk full");
        assert!(source.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn only_given_not_found_is_flagged() {
        assert!(StoryError::GivenNotFound { template: "a".into() }.is_given_not_found());
        assert!(!StoryError::WhenNotFound { template: "a".into() }.is_given_not_found());
        assert!(!StoryError::InvalidArgument("x".into()).is_given_not_found());
    }
}
