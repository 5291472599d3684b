//! Oraciones del script.
//!
//! Una historia es una secuencia de líneas `<Keyword> <palabras...> <param>`.
//! Este módulo define:
//! - `Keyword`: categoría de la oración (`Given`, `When`, `Then`).
//! - `Param` / `ParamKind`: el único parámetro final, ya tipado.
//! - `Sentence` y `parse_sentence`: descomposición de una línea.

mod keyword;
mod param;
mod parser;

pub use keyword::Keyword;
pub use param::{Param, ParamKind, StoryParam};
pub use parser::{parse_sentence, split_template, Sentence};
