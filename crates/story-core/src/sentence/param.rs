use std::fmt;

use serde::{Deserialize, Serialize};

/// Tipo de parámetro que espera un handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamKind {
    Int,
    Text,
}

/// Parámetro final de una oración.
///
/// Se interpreta como entero cuando el token es numérico; en caso contrario
/// se conserva como texto. `raw` guarda el token original para poder
/// entregarlo tal cual a un handler de texto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Param {
    Int { value: i64, raw: String },
    Text(String),
}

impl Param {
    pub fn parse(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(value) => Param::Int { value,
                                      raw: token.to_string() },
            Err(_) => Param::Text(token.to_string()),
        }
    }

    pub fn kind(&self) -> ParamKind {
        match self {
            Param::Int { .. } => ParamKind::Int,
            Param::Text(_) => ParamKind::Text,
        }
    }

    /// Token tal como apareció en el script.
    pub fn raw(&self) -> &str {
        match self {
            Param::Int { raw, .. } => raw,
            Param::Text(s) => s,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Param::Int { value, .. } => Some(*value),
            Param::Text(_) => None,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw())
    }
}

/// Tipos Rust aceptados como parámetro de un handler.
///
/// `KIND` se fija estáticamente al registrar el handler; `from_param` hace
/// la coerción (`None` si el parámetro no es convertible).
pub trait StoryParam: Sized + 'static {
    const KIND: ParamKind;

    fn from_param(param: &Param) -> Option<Self>;
}

impl StoryParam for i64 {
    const KIND: ParamKind = ParamKind::Int;

    fn from_param(param: &Param) -> Option<Self> {
        param.as_int()
    }
}

impl StoryParam for i32 {
    const KIND: ParamKind = ParamKind::Int;

    fn from_param(param: &Param) -> Option<Self> {
        param.as_int().and_then(|v| i32::try_from(v).ok())
    }
}

impl StoryParam for String {
    const KIND: ParamKind = ParamKind::Text;

    fn from_param(param: &Param) -> Option<Self> {
        Some(param.raw().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_tokens_become_ints() {
        assert_eq!(Param::parse("5").as_int(), Some(5));
        assert_eq!(Param::parse("-12").as_int(), Some(-12));
        assert_eq!(Param::parse("+3").as_int(), Some(3));
        assert_eq!(Param::parse("5a").kind(), ParamKind::Text);
        assert_eq!(Param::parse("clean").kind(), ParamKind::Text);
    }

    #[test]
    fn text_handlers_receive_the_raw_token() {
        let p = Param::parse("+07");
        assert_eq!(String::from_param(&p).as_deref(), Some("+07"));
        assert_eq!(i64::from_param(&p), Some(7));
    }

    #[test]
    fn int_handlers_reject_text_and_overflow() {
        assert_eq!(i64::from_param(&Param::parse("dirty")), None);
        assert_eq!(i32::from_param(&Param::parse("9999999999")), None);
        assert_eq!(i32::from_param(&Param::parse("42")), Some(42));
    }
}
