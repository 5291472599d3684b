//! Storyflow Rust Library
//!
//! Este crate actúa como la capa de aplicación sobre `story-core`:
//! - Expone `config` con la configuración por entorno (`CONFIG`).
//! - Expone `cli` para interpretar flags y `report` para el resultado.
//! - `run_story` ejecuta un script sobre el catálogo estándar.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod cli;
pub mod config;
pub mod errors;
pub mod report;

use story_core::StoryTester;
use story_domain::SubjectCatalog;

use crate::config::StoryConfig;
use crate::report::StoryReport;

/// Ejecuta `script` según `cfg` sobre `catalog` y arma el reporte.
pub fn run_story(catalog: &SubjectCatalog, cfg: &StoryConfig, script: &str) -> StoryReport {
    let mut tester = StoryTester::new();
    let result = catalog.run(&mut tester, &cfg.subject, script, cfg.nested_fallback);
    StoryReport::new(&cfg.subject, &result, tester.last_run_id(), tester.events().len())
}
