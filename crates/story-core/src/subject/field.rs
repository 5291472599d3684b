//! Descriptores de campos para snapshot/restore.
//!
//! Cada campo registrado lleva una política de copia fijada estáticamente al
//! registrarlo. El snapshot store no inspecciona tipos en tiempo de
//! ejecución: sólo aplica la función de transferencia de cada descriptor.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Política de copia de un campo, en orden de preferencia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyPolicy {
    /// Copia independiente vía `Clone`.
    Duplicate,
    /// Copia independiente vía una función explícita `fn(&T) -> T`.
    CopyConstruct,
    /// Comparte la misma referencia (`Rc`); el valor se trata como inmutable
    /// durante la historia.
    Share,
}

type TransferFn<S> = Rc<dyn Fn(&S, &mut S)>;

pub struct FieldSlot<S> {
    name: &'static str,
    policy: CopyPolicy,
    transfer: TransferFn<S>,
}

impl<S> Clone for FieldSlot<S> {
    fn clone(&self) -> Self {
        Self { name: self.name,
               policy: self.policy,
               transfer: Rc::clone(&self.transfer) }
    }
}

impl<S> fmt::Debug for FieldSlot<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSlot")
         .field("name", &self.name)
         .field("policy", &self.policy)
         .finish()
    }
}

impl<S: 'static> FieldSlot<S> {
    /// Campo copiado con `Clone`. Un `Option<T>` en `None` se copia como `None`.
    pub fn duplicated<T>(name: &'static str, get: fn(&S) -> &T, get_mut: fn(&mut S) -> &mut T) -> Self
        where T: Clone + 'static
    {
        Self { name,
               policy: CopyPolicy::Duplicate,
               transfer: Rc::new(move |from: &S, to: &mut S| *get_mut(to) = get(from).clone()) }
    }

    /// Campo copiado con un constructor de copia explícito.
    pub fn copied_with<T>(name: &'static str,
                          get: fn(&S) -> &T,
                          get_mut: fn(&mut S) -> &mut T,
                          copy: fn(&T) -> T)
                          -> Self
        where T: 'static
    {
        Self { name,
               policy: CopyPolicy::CopyConstruct,
               transfer: Rc::new(move |from: &S, to: &mut S| *get_mut(to) = copy(get(from))) }
    }

    /// Variante opcional de `copied_with`: `None` se copia como `None` sin
    /// invocar al constructor de copia.
    pub fn optional_copied_with<T>(name: &'static str,
                                   get: fn(&S) -> &Option<T>,
                                   get_mut: fn(&mut S) -> &mut Option<T>,
                                   copy: fn(&T) -> T)
                                   -> Self
        where T: 'static
    {
        Self { name,
               policy: CopyPolicy::CopyConstruct,
               transfer: Rc::new(move |from: &S, to: &mut S| *get_mut(to) = get(from).as_ref().map(copy)) }
    }

    /// Campo compartido por referencia.
    pub fn shared<T>(name: &'static str, get: fn(&S) -> &Rc<T>, get_mut: fn(&mut S) -> &mut Rc<T>) -> Self
        where T: ?Sized + 'static
    {
        Self { name,
               policy: CopyPolicy::Share,
               transfer: Rc::new(move |from: &S, to: &mut S| *get_mut(to) = Rc::clone(get(from))) }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn policy(&self) -> CopyPolicy {
        self.policy
    }

    /// Sobrescribe el campo de `to` con una copia (según la política) del de `from`.
    pub(crate) fn transfer(&self, from: &S, to: &mut S) {
        (self.transfer)(from, to)
    }

    pub(crate) fn embed<D: 'static>(self, project: fn(&D) -> &S, project_mut: fn(&mut D) -> &mut S) -> FieldSlot<D> {
        let inner = self.transfer;
        FieldSlot { name: self.name,
                    policy: self.policy,
                    transfer: Rc::new(move |from: &D, to: &mut D| inner(project(from), project_mut(to))) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Litter {
        sizes: Vec<i64>,
    }

    impl Litter {
        fn copy_of(other: &Litter) -> Litter {
            Litter { sizes: other.sizes.clone() }
        }
    }

    struct State {
        tags: Vec<String>,
        litter: Litter,
        maybe: Option<Litter>,
        name: Rc<str>,
    }

    fn state() -> State {
        State { tags: vec!["a".into()],
                litter: Litter { sizes: vec![1, 2] },
                maybe: None,
                name: Rc::from("tom") }
    }

    #[test]
    fn duplicated_and_copied_fields_are_independent() {
        let tags = FieldSlot::duplicated("tags", |s: &State| &s.tags, |s: &mut State| &mut s.tags);
        let litter = FieldSlot::copied_with("litter", |s: &State| &s.litter, |s: &mut State| &mut s.litter, Litter::copy_of);
        let src = state();
        let mut dst = state();
        dst.tags.clear();
        dst.litter.sizes.clear();

        tags.transfer(&src, &mut dst);
        litter.transfer(&src, &mut dst);
        dst.tags.push("b".into());
        dst.litter.sizes.push(3);

        assert_eq!(src.tags, vec!["a".to_string()]);
        assert_eq!(src.litter.sizes, vec![1, 2]);
        assert_eq!(tags.policy(), CopyPolicy::Duplicate);
        assert_eq!(litter.policy(), CopyPolicy::CopyConstruct);
    }

    #[test]
    fn optional_none_stays_none() {
        let maybe = FieldSlot::optional_copied_with("maybe",
                                                    |s: &State| &s.maybe,
                                                    |s: &mut State| &mut s.maybe,
                                                    Litter::copy_of);
        let src = state();
        let mut dst = state();
        dst.maybe = Some(Litter { sizes: vec![9] });
        maybe.transfer(&src, &mut dst);
        assert!(dst.maybe.is_none());
    }

    #[test]
    fn shared_fields_point_to_the_same_value() {
        let name = FieldSlot::shared("name", |s: &State| &s.name, |s: &mut State| &mut s.name);
        let src = state();
        let mut dst = state();
        name.transfer(&src, &mut dst);
        assert!(Rc::ptr_eq(&src.name, &dst.name));
        assert_eq!(name.policy(), CopyPolicy::Share);
    }
}
