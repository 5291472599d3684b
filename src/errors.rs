use thiserror::Error;

use story_core::StoryError;

/// Errores de la aplicación (CLI y configuración).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error de historia: {0}")]
    Story(#[from] StoryError),
    #[error("Error serializando reporte: {0}")]
    Json(#[from] serde_json::Error),
}
