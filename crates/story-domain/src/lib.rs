//! story-domain: sujetos de ejemplo y catálogo por nombre.
//!
//! Este crate provee:
//! - `Cat`, el modelo de dominio sobre el que escriben las historias.
//! - Tipos sujeto listos para usar: `CatStory`, `NoWhen`, `NoThen`,
//!   `VetVisitStory` (hereda los handlers de `CatStory`) y `Kennel` (sin
//!   `Given` propio; delega en sus tipos anidados).
//! - `SubjectCatalog`, que registra tipos por nombre para la CLI.
//!
//! Nota: el core no conoce nada de gatos. Todo lo que aquí se declara pasa
//! por `Layer` y `SubjectType`.

pub mod cat;
pub mod catalog;
pub mod kennel;
pub mod stories;

pub use cat::Cat;
pub use catalog::SubjectCatalog;
pub use kennel::{kennel, Kennel, KennelInner, KennelNoThen};
pub use stories::{cat_story, no_then, no_when, vet_visit_story, CatStory, NoThen, NoWhen, VetVisitStory};
