//! Hash helpers: fingerprint determinista de historias.

mod hash;

pub use hash::{hash_str, story_fingerprint};
