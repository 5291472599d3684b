//! Hash helpers – abstracción para permitir cambiar de algoritmo sin tocar resto del core.

use blake3::Hasher;

use crate::constants::ENGINE_VERSION;

/// Hashea un string y devuelve hex.
pub fn hash_str(input: &str) -> String {
    let mut h = Hasher::new();
    h.update(input.as_bytes());
    h.finalize().to_hex().to_string()
}

/// Fingerprint de un script: independiente del fin de línea (`\n` / `\r\n`)
/// y de un salto final, dependiente de la versión del motor.
pub fn story_fingerprint(script: &str) -> String {
    let canonical: Vec<&str> = script.lines().collect();
    hash_str(&format!("{ENGINE_VERSION}\n{}", canonical.join("\n")))
}
