//! Macro utilitaria para declarar layers sin repetir el tipo de estado en
//! cada closure.
//!
//! ```ignore
//! let layer = story_core::story_layer!(Counter => "Counter" {
//!     given "a counter at &n" => |c, n: i64| { c.value = n; Ok(()) },
//!     then "the counter is &n" => |c, n: i64| { ComparisonFailure::check(n, c.value)?; Ok(()) },
//! } fields { value });
//! ```

/// Declara un `Layer<$state>`.
///
/// Cada entrada es `given|when|then "template" => |sujeto, param: Tipo| { ... }`.
/// El bloque opcional `fields { a, b }` registra campos `Clone` con política
/// `Duplicate`; campos con otra política se añaden luego con los métodos del
/// propio `Layer`.
#[macro_export]
macro_rules! story_layer {
    (
        $state:ty => $name:literal {
            $( $kw:ident $tmpl:literal => |$s:ident, $p:ident : $pty:ty| $body:block ),* $(,)?
        }
        $( fields { $($f:ident),* $(,)? } )?
    ) => {{
        let layer = $crate::subject::Layer::<$state>::new($name);
        $( let layer = layer.$kw($tmpl, |$s: &mut $state, $p: $pty| -> $crate::subject::HandlerResult { $body }); )*
        $($( let layer = layer.field(stringify!($f), |s: &$state| &s.$f, |s: &mut $state| &mut s.$f); )*)?
        layer
    }};
}
