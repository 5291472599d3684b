//! Eventos de ejecución de historias y trait EventStore.

mod store;
mod types;

pub use store::{EventStore, InMemoryEventStore};
pub use types::{StoryEvent, StoryEventKind};
