use serde::{Deserialize, Serialize};

use super::{Keyword, Param};
use crate::constants::WORD_SEPARATOR;
use crate::errors::StoryError;

/// Una línea del script ya descompuesta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub keyword: Keyword,
    /// Texto sin keyword ni parámetro final; clave de búsqueda del handler.
    pub template_key: String,
    pub parameter: Param,
    /// Línea completa, tal como se reporta en un `StoryFailure`.
    pub text: String,
}

/// Separa un texto en `(prefijo, última palabra)`.
///
/// Se usa tanto para las oraciones del script como para las plantillas
/// declaradas por los handlers (`"a Cat of age &age"` -> `"a Cat of age"`).
pub fn split_template(text: &str) -> Option<(&str, &str)> {
    let (prefix, last) = text.rsplit_once(WORD_SEPARATOR)?;
    if prefix.is_empty() || last.is_empty() {
        return None;
    }
    Some((prefix, last))
}

/// Parsea una línea `<Keyword> <palabras...> <param>`.
pub fn parse_sentence(line: &str) -> Result<Sentence, StoryError> {
    let malformed = |reason: &str| StoryError::MalformedSentence { line: line.to_string(),
                                                                   reason: reason.to_string() };

    let (head, rest) = line.split_once(WORD_SEPARATOR)
                           .ok_or_else(|| malformed("expected at least two words after the keyword"))?;
    let keyword = head.parse::<Keyword>()
                      .map_err(|_| malformed("keyword must be Given, When or Then"))?;
    let (template_key, token) =
        split_template(rest).ok_or_else(|| malformed("expected at least two words after the keyword"))?;

    Ok(Sentence { keyword,
                  template_key: template_key.to_string(),
                  parameter: Param::parse(token),
                  text: line.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentence::ParamKind;

    #[test]
    fn splits_keyword_template_and_parameter() {
        let s = parse_sentence("When the Cat did kaki of size 5").expect("parse");
        assert_eq!(s.keyword, Keyword::When);
        assert_eq!(s.template_key, "the Cat did kaki of size");
        assert_eq!(s.parameter.as_int(), Some(5));
        assert_eq!(s.text, "When the Cat did kaki of size 5");
    }

    #[test]
    fn keeps_text_parameters() {
        let s = parse_sentence("Then the house condition is clean").expect("parse");
        assert_eq!(s.keyword, Keyword::Then);
        assert_eq!(s.template_key, "the house condition is");
        assert_eq!(s.parameter.kind(), ParamKind::Text);
        assert_eq!(s.parameter.raw(), "clean");
    }

    #[test]
    fn template_keeps_inner_punctuation() {
        let s = parse_sentence("When the Cat is not taken out for a walk, the number of hours is 3").expect("parse");
        assert_eq!(s.template_key, "the Cat is not taken out for a walk, the number of hours is");
    }

    #[test]
    fn rejects_unknown_keyword() {
        let err = parse_sentence("Suppose a Cat of age 3").unwrap_err();
        assert!(matches!(err, StoryError::MalformedSentence { .. }));
        // Sensible a mayúsculas
        assert!(parse_sentence("given a Cat of age 3").is_err());
    }

    #[test]
    fn rejects_lines_with_too_few_words() {
        for line in ["Given", "Given 3", "Given  3", "Then x ", ""] {
            let err = parse_sentence(line).unwrap_err();
            assert!(matches!(err, StoryError::MalformedSentence { .. }), "line {line:?} should be malformed");
        }
    }

    #[test]
    fn split_template_strips_placeholder() {
        assert_eq!(split_template("a Cat of age &age"), Some(("a Cat of age", "&age")));
        assert_eq!(split_template("&age"), None);
    }
}
