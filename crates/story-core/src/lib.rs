//! story-core: motor de historias Given/When/Then sobre sujetos tipados.
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod macros;
pub mod sentence;
pub mod snapshot;
pub mod subject;

pub use engine::{run_against_type, run_with_fallback, StoryTester};
pub use errors::{StoryError, StoryFailure};
pub use event::{EventStore, InMemoryEventStore, StoryEvent, StoryEventKind};
pub use sentence::{Keyword, Param, ParamKind, StoryParam};
pub use snapshot::SnapshotReason;
pub use subject::{ComparisonFailure, CopyPolicy, Handler, HandlerError, HandlerResult, Layer, StoryTarget, SubjectType};
