use std::rc::Rc;

use super::field::FieldSlot;
use super::handler::{Handler, HandlerResult};
use crate::sentence::{Keyword, StoryParam};

/// Un nivel de la cadena de ancestros de un sujeto.
///
/// Aporta handlers (en orden de declaración) y campos (los que el snapshot
/// debe copiar). Un `Layer` escrito para un estado base `B` puede reutilizarse
/// en un estado derivado `D` con `embed`.
#[derive(Debug)]
pub struct Layer<S> {
    name: String,
    handlers: Vec<Handler<S>>,
    fields: Vec<FieldSlot<S>>,
}

impl<S> Clone for Layer<S> {
    fn clone(&self) -> Self {
        Self { name: self.name.clone(),
               handlers: self.handlers.clone(),
               fields: self.fields.clone() }
    }
}

impl<S> Layer<S> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handlers(&self) -> &[Handler<S>] {
        &self.handlers
    }

    pub fn fields(&self) -> &[FieldSlot<S>] {
        &self.fields
    }
}

impl<S: 'static> Layer<S> {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               handlers: Vec::new(),
               fields: Vec::new() }
    }

    pub fn handler(mut self, handler: Handler<S>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn given<P, F>(self, template: &str, f: F) -> Self
        where P: StoryParam,
              F: Fn(&mut S, P) -> HandlerResult + 'static
    {
        self.handler(Handler::new(Keyword::Given, template, f))
    }

    pub fn when<P, F>(self, template: &str, f: F) -> Self
        where P: StoryParam,
              F: Fn(&mut S, P) -> HandlerResult + 'static
    {
        self.handler(Handler::new(Keyword::When, template, f))
    }

    pub fn then<P, F>(self, template: &str, f: F) -> Self
        where P: StoryParam,
              F: Fn(&mut S, P) -> HandlerResult + 'static
    {
        self.handler(Handler::new(Keyword::Then, template, f))
    }

    pub fn field_slot(mut self, slot: FieldSlot<S>) -> Self {
        self.fields.push(slot);
        self
    }

    pub fn field<T>(self, name: &'static str, get: fn(&S) -> &T, get_mut: fn(&mut S) -> &mut T) -> Self
        where T: Clone + 'static
    {
        self.field_slot(FieldSlot::duplicated(name, get, get_mut))
    }

    pub fn field_with<T>(self,
                         name: &'static str,
                         get: fn(&S) -> &T,
                         get_mut: fn(&mut S) -> &mut T,
                         copy: fn(&T) -> T)
                         -> Self
        where T: 'static
    {
        self.field_slot(FieldSlot::copied_with(name, get, get_mut, copy))
    }

    pub fn optional_field_with<T>(self,
                                  name: &'static str,
                                  get: fn(&S) -> &Option<T>,
                                  get_mut: fn(&mut S) -> &mut Option<T>,
                                  copy: fn(&T) -> T)
                                  -> Self
        where T: 'static
    {
        self.field_slot(FieldSlot::optional_copied_with(name, get, get_mut, copy))
    }

    pub fn shared_field<T>(self, name: &'static str, get: fn(&S) -> &Rc<T>, get_mut: fn(&mut S) -> &mut Rc<T>) -> Self
        where T: ?Sized + 'static
    {
        self.field_slot(FieldSlot::shared(name, get, get_mut))
    }

    /// Reutiliza este layer en un estado derivado `D` que contiene un `S`.
    ///
    /// Handlers y campos se proyectan a través de `project`/`project_mut`;
    /// nombre y orden de declaración se conservan.
    pub fn embed<D: 'static>(self, project: fn(&D) -> &S, project_mut: fn(&mut D) -> &mut S) -> Layer<D> {
        Layer { name: self.name,
                handlers: self.handlers.into_iter().map(|h| h.embed(project_mut)).collect(),
                fields: self.fields.into_iter().map(|f| f.embed(project, project_mut)).collect() }
    }
}
