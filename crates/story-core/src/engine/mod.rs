//! Engine de historias.
//!
//! Provee el tester, la máquina de estados por ejecución y el fallback de
//! sujetos anidados.

pub mod core;
mod fallback;
pub mod run;

pub use self::core::StoryTester;
pub use run::RunRecorder;

use crate::errors::StoryError;
use crate::subject::StoryTarget;

/// Ejecuta `script` sobre `subject` con un tester efímero en memoria.
pub fn run_against_type(script: &str, subject: &dyn StoryTarget) -> Result<(), StoryError> {
    StoryTester::new().run_against_type(script, subject)
}

/// Igual que `run_against_type`, con fallback a tipos anidados.
pub fn run_with_fallback(script: &str, subject: &dyn StoryTarget) -> Result<(), StoryError> {
    StoryTester::new().run_with_fallback(script, subject)
}
