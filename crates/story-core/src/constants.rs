//! Constantes del motor de historias.
//!
//! `ENGINE_VERSION` participa en el fingerprint de cada historia: un cambio
//! incompatible en la semántica del motor debe reflejarse aquí para que los
//! fingerprints registrados en eventos previos dejen de coincidir.

/// Versión lógica del motor. Mantener estable mientras no haya cambios
/// incompatibles en parsing, resolución o política de snapshots.
pub const ENGINE_VERSION: &str = "S1.0";

/// Separador único admitido entre palabras de una oración.
pub const WORD_SEPARATOR: char = ' ';

/// Prefijo de la palabra marcador con la que termina toda plantilla.
pub const PLACEHOLDER_PREFIX: char = '&';
