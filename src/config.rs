//! Configuración central de la aplicación.
//! Lee variables de entorno (cargadas de `.env` por `main`) y expone una
//! estructura inmutable (`CONFIG`). Los flags de línea de comandos pueden
//! sobrescribir cada valor (ver `cli`).
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

/// Configuración global de la aplicación.
pub struct AppConfig {
    pub story: StoryConfig,
}

/// Parámetros por defecto de una ejecución de historia.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryConfig {
    /// Archivo con el script (`STORY_FILE`). `None` lee de stdin.
    pub file: Option<PathBuf>,
    /// Tipo sujeto del catálogo (`STORY_SUBJECT`).
    pub subject: String,
    /// Probar tipos anidados si el sujeto no tiene el `Given` (`STORY_NESTED`).
    pub nested_fallback: bool,
    /// Reporte en JSON en lugar de texto (`STORY_JSON`).
    pub json_report: bool,
}

pub const DEFAULT_SUBJECT: &str = "CatStory";

impl Default for StoryConfig {
    fn default() -> Self {
        Self { file: None,
               subject: DEFAULT_SUBJECT.to_string(),
               nested_fallback: true,
               json_report: false }
    }
}

impl StoryConfig {
    /// Construye la configuración a partir de un lookup de variables.
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        Self { file: lookup("STORY_FILE").filter(|v| !v.trim().is_empty()).map(PathBuf::from),
               subject: lookup("STORY_SUBJECT").filter(|v| !v.trim().is_empty()).unwrap_or(defaults.subject),
               nested_fallback: lookup("STORY_NESTED").and_then(|v| parse_flag(&v)).unwrap_or(defaults.nested_fallback),
               json_report: lookup("STORY_JSON").and_then(|v| parse_flag(&v)).unwrap_or(defaults.json_report) }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| AppConfig { story: StoryConfig::from_env() });

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(StoryConfig::from_lookup(|_| None), StoryConfig::default());
    }

    #[test]
    fn env_values_override_defaults() {
        let cfg = StoryConfig::from_lookup(lookup_from(&[("STORY_FILE", "stories/cat.story"),
                                                         ("STORY_SUBJECT", "Kennel"),
                                                         ("STORY_NESTED", "no"),
                                                         ("STORY_JSON", "1")]));
        assert_eq!(cfg.file, Some(PathBuf::from("stories/cat.story")));
        assert_eq!(cfg.subject, "Kennel");
        assert!(!cfg.nested_fallback);
        assert!(cfg.json_report);
    }

    #[test]
    fn unparseable_flags_and_blank_values_fall_back_to_defaults() {
        let cfg = StoryConfig::from_lookup(lookup_from(&[("STORY_SUBJECT", " "), ("STORY_NESTED", "maybe"), ("STORY_FILE", "")]));
        assert_eq!(cfg, StoryConfig::default());
    }
}
