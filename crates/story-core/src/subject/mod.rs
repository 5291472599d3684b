//! Registro de capacidades de los tipos sujeto.
//!
//! En lugar de introspección en tiempo de ejecución, cada tipo sujeto
//! declara explícitamente:
//! - `Handler`: plantilla de oración + función sobre el estado.
//! - `FieldSlot`: campo a copiar en snapshots, con su `CopyPolicy`.
//! - `Layer`: un nivel de la cadena de ancestros (handlers + campos).
//! - `SubjectType`: fábrica, layers y tipos anidados.
//!
//! `resolve` implementa la búsqueda de handlers sobre esa tabla.

mod field;
mod handler;
mod layer;
pub mod resolve;
mod types;

pub use field::{CopyPolicy, FieldSlot};
pub(crate) use handler::Invocation;
pub use handler::{ComparisonFailure, Handler, HandlerError, HandlerResult};
pub use layer::Layer;
pub use resolve::resolve;
pub use types::{StoryTarget, SubjectType};
