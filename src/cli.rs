//! CLI mínima: `main-story [--file <PATH>] [--subject <NAME>] [--direct] [--json] [--list]`.
use std::path::PathBuf;

use crate::config::StoryConfig;
use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Lista los tipos sujeto del catálogo.
    List,
    /// Ejecuta una historia con la configuración resultante.
    Run(StoryConfig),
}

/// Aplica los flags de `args` (sin el nombre del binario) sobre `defaults`.
pub fn parse_args(args: &[String], defaults: &StoryConfig) -> Result<Command, AppError> {
    let mut cfg = defaults.clone();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--list" => return Ok(Command::List),
            "--file" => {
                i += 1;
                cfg.file = Some(PathBuf::from(value_for("--file", args.get(i))?));
            }
            "--subject" => {
                i += 1;
                cfg.subject = value_for("--subject", args.get(i))?.to_string();
            }
            "--direct" => cfg.nested_fallback = false,
            "--json" => cfg.json_report = true,
            other => return Err(AppError::Config(format!("flag desconocido: {other}"))),
        }
        i += 1;
    }
    Ok(Command::Run(cfg))
}

fn value_for<'a>(flag: &str, value: Option<&'a String>) -> Result<&'a str, AppError> {
    match value {
        Some(v) if !v.starts_with("--") => Ok(v.as_str()),
        _ => Err(AppError::Config(format!("{flag} requiere un valor"))),
    }
}
