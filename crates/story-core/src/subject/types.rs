//! Tipos sujeto: la tabla de capacidades de un estado `S`.
//!
//! Un `SubjectType<S>` reúne:
//! - una fábrica que construye instancias nuevas (resolviendo la instancia
//!   contenedora si el tipo está anidado),
//! - la cadena de layers (el propio primero, luego ancestros hacia afuera),
//! - los tipos anidados, en orden de declaración, ya borrados como
//!   `dyn StoryTarget`.

use std::fmt;
use std::rc::Rc;

use super::layer::Layer;
use crate::engine::run::{execute_story, RunRecorder};
use crate::errors::StoryError;

/// Interfaz neutra usada por el engine y por el fallback de anidados.
pub trait StoryTarget {
    /// Nombre estable del tipo sujeto.
    fn name(&self) -> &str;

    /// Tipos anidados directamente, en orden de declaración.
    fn nested_targets(&self) -> Vec<&dyn StoryTarget>;

    /// Ejecuta la historia completa sobre una instancia nueva de este tipo.
    fn execute(&self, script: &str, recorder: &mut RunRecorder<'_>) -> Result<(), StoryError>;
}

type Factory<S> = Rc<dyn Fn() -> S>;

pub struct SubjectType<S> {
    name: String,
    factory: Factory<S>,
    layers: Vec<Layer<S>>,
    nested: Vec<Box<dyn StoryTarget>>,
}

impl<S> fmt::Debug for SubjectType<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubjectType")
         .field("name", &self.name)
         .field("layers", &self.layers.iter().map(|l| l.name()).collect::<Vec<_>>())
         .field("nested", &self.nested.iter().map(|n| n.name()).collect::<Vec<_>>())
         .finish()
    }
}

impl<S: 'static> SubjectType<S> {
    /// Tipo sujeto con constructor por defecto propio.
    pub fn new<F>(name: impl Into<String>, ctor: F) -> Self
        where F: Fn() -> S + 'static
    {
        Self { name: name.into(),
               factory: Rc::new(ctor),
               layers: Vec::new(),
               nested: Vec::new() }
    }

    pub fn with_default(name: impl Into<String>) -> Self
        where S: Default
    {
        Self::new(name, S::default)
    }

    /// Tipo anidado que necesita una instancia contenedora para construirse.
    ///
    /// Cada construcción (inicio de historia y cada snapshot) crea primero
    /// una instancia nueva de `enclosing` y se la entrega a `ctor`.
    pub fn enclosed_by<O, F>(name: impl Into<String>, enclosing: &SubjectType<O>, ctor: F) -> Self
        where O: 'static,
              F: Fn(O) -> S + 'static
    {
        let outer = Rc::clone(&enclosing.factory);
        Self::new(name, move || ctor(outer()))
    }

    /// Añade un layer al final de la cadena. El primero registrado es el
    /// del propio tipo; los siguientes son sus ancestros, hacia afuera.
    pub fn layer(mut self, layer: Layer<S>) -> Self {
        self.layers.push(layer);
        self
    }

    /// Declara un tipo anidado directamente dentro de éste.
    pub fn nest(mut self, nested: impl StoryTarget + 'static) -> Self {
        self.nested.push(Box::new(nested));
        self
    }

    pub fn layers(&self) -> &[Layer<S>] {
        &self.layers
    }

    /// Construye una instancia nueva con la fábrica registrada.
    pub fn instantiate(&self) -> S {
        (self.factory)()
    }
}

impl<S: 'static> StoryTarget for SubjectType<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn nested_targets(&self) -> Vec<&dyn StoryTarget> {
        self.nested.iter().map(|n| n.as_ref()).collect()
    }

    fn execute(&self, script: &str, recorder: &mut RunRecorder<'_>) -> Result<(), StoryError> {
        execute_story(self, script, recorder)
    }
}
