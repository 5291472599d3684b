use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use crate::constants::PLACEHOLDER_PREFIX;
use crate::sentence::{split_template, Keyword, Param, ParamKind, StoryParam};

/// Señal de comparación fallida emitida por un handler (normalmente `Then`).
///
/// Convención: `expected` es el valor declarado en la historia y `actual`
/// el valor calculado por el sujeto.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected:?} but was {actual:?}")]
pub struct ComparisonFailure {
    pub expected: String,
    pub actual: String,
}

impl ComparisonFailure {
    pub fn new(expected: impl ToString, actual: impl ToString) -> Self {
        Self { expected: expected.to_string(),
               actual: actual.to_string() }
    }

    /// Compara y devuelve la señal si los valores difieren.
    pub fn check<T>(expected: T, actual: T) -> Result<(), ComparisonFailure>
        where T: PartialEq + fmt::Display
    {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::new(expected, actual))
        }
    }
}

/// Error devuelto por un handler.
///
/// Sólo `Comparison` es un resultado esperado de una aserción; cualquier
/// otro error se considera un defecto del sujeto y aborta la historia.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Comparison(#[from] ComparisonFailure),
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl HandlerError {
    pub fn other<E>(err: E) -> Self
        where E: Into<Box<dyn std::error::Error + Send + Sync>>
    {
        HandlerError::Other(err.into())
    }
}

pub type HandlerResult = Result<(), HandlerError>;

/// Resultado interno de invocar un handler con un parámetro ya parseado.
pub(crate) enum Invocation {
    Completed(HandlerResult),
    /// El parámetro no es convertible al tipo que espera el handler.
    ParameterMismatch,
}

type InvokeFn<S> = Rc<dyn Fn(&mut S, &Param) -> Invocation>;

/// Capacidad declarada por un tipo sujeto: una plantilla de oración ligada a
/// una función sobre el estado `S`.
pub struct Handler<S> {
    keyword: Keyword,
    template: String,
    template_key: String,
    param_kind: ParamKind,
    invoke: InvokeFn<S>,
}

impl<S> Clone for Handler<S> {
    fn clone(&self) -> Self {
        Self { keyword: self.keyword,
               template: self.template.clone(),
               template_key: self.template_key.clone(),
               param_kind: self.param_kind,
               invoke: Rc::clone(&self.invoke) }
    }
}

impl<S> fmt::Debug for Handler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
         .field("keyword", &self.keyword)
         .field("template", &self.template)
         .field("param_kind", &self.param_kind)
         .finish()
    }
}

impl<S: 'static> Handler<S> {
    /// Declara un handler. La plantilla debe terminar en una palabra
    /// marcador (`&age`, `&size`, ...) que se descarta para formar la clave.
    ///
    /// # Panics
    /// Si la plantilla no termina en una palabra marcador: una plantilla así
    /// nunca puede coincidir con una oración.
    pub fn new<P, F>(keyword: Keyword, template: &str, f: F) -> Self
        where P: StoryParam,
              F: Fn(&mut S, P) -> HandlerResult + 'static
    {
        let template_key = match split_template(template) {
            Some((key, marker)) if marker.starts_with(PLACEHOLDER_PREFIX) && marker.len() > 1 => key.to_string(),
            _ => panic!("template {template:?} must end in a placeholder word such as `&value`"),
        };

        let invoke: InvokeFn<S> = Rc::new(move |subject: &mut S, param: &Param| match P::from_param(param) {
                                      Some(value) => Invocation::Completed(f(subject, value)),
                                      None => Invocation::ParameterMismatch,
                                  });

        Self { keyword,
               template: template.to_string(),
               template_key,
               param_kind: P::KIND,
               invoke }
    }

    pub fn keyword(&self) -> Keyword {
        self.keyword
    }

    /// Plantilla declarada, con su marcador.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn template_key(&self) -> &str {
        &self.template_key
    }

    pub fn param_kind(&self) -> ParamKind {
        self.param_kind
    }

    pub fn matches(&self, keyword: Keyword, template_key: &str) -> bool {
        self.keyword == keyword && self.template_key == template_key
    }

    pub(crate) fn invoke(&self, subject: &mut S, param: &Param) -> Invocation {
        (self.invoke)(subject, param)
    }

    /// Eleva el handler a un estado derivado `D` que contiene a `S`.
    pub(crate) fn embed<D: 'static>(self, project_mut: fn(&mut D) -> &mut S) -> Handler<D> {
        let inner = self.invoke;
        Handler { keyword: self.keyword,
                  template: self.template,
                  template_key: self.template_key,
                  param_kind: self.param_kind,
                  invoke: Rc::new(move |derived: &mut D, param: &Param| inner(project_mut(derived), param)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        total: i64,
    }

    #[test]
    fn template_key_drops_placeholder() {
        let h = Handler::new(Keyword::When, "the counter grows by &n", |c: &mut Counter, n: i64| {
            c.total += n;
            Ok(())
        });
        assert_eq!(h.template_key(), "the counter grows by");
        assert_eq!(h.param_kind(), ParamKind::Int);
        assert!(h.matches(Keyword::When, "the counter grows by"));
        assert!(!h.matches(Keyword::Then, "the counter grows by"));
    }

    #[test]
    #[should_panic(expected = "must end in a placeholder word")]
    fn placeholder_in_the_middle_is_rejected() {
        let _ = Handler::new(Keyword::Then, "the counter has &n items", |_: &mut Counter, _n: i64| Ok(()));
    }

    #[test]
    #[should_panic(expected = "must end in a placeholder word")]
    fn template_without_placeholder_is_rejected() {
        let _ = Handler::new(Keyword::Then, "the counter is", |_: &mut Counter, _n: i64| Ok(()));
    }

    #[test]
    fn invoke_coerces_or_reports_mismatch() {
        let h = Handler::new(Keyword::When, "add &n", |c: &mut Counter, n: i64| {
            c.total += n;
            Ok(())
        });
        let mut c = Counter::default();
        assert!(matches!(h.invoke(&mut c, &Param::parse("4")), Invocation::Completed(Ok(()))));
        assert_eq!(c.total, 4);
        assert!(matches!(h.invoke(&mut c, &Param::parse("four")), Invocation::ParameterMismatch));
        assert_eq!(c.total, 4);
    }

    #[test]
    fn comparison_check_uses_story_value_as_expected() {
        let err = ComparisonFailure::check(6, 5).unwrap_err();
        assert_eq!(err.expected, "6");
        assert_eq!(err.actual, "5");
        assert!(ComparisonFailure::check("a", "a").is_ok());
        let as_handler: HandlerError = err.into();
        assert!(matches!(as_handler, HandlerError::Comparison(_)));
    }
}
