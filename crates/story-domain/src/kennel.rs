//! `Kennel`: sujeto sin `Given` propio cuyos tipos anidados sí lo tienen.
//!
//! Orden de anidados (importa para el fallback):
//! 1. `KennelNoThen`: historias de cachorros, sin `Then`.
//! 2. `Kennel.Inner`: historias de gatos; se construye siempre sobre una
//!    instancia nueva de `Kennel`.

use std::rc::Rc;

use story_core::subject::{HandlerError, Layer, SubjectType};
use story_core::ComparisonFailure;

use crate::Cat;

pub const KENNEL_NAME: &str = "Paws";

#[derive(Debug)]
pub struct Kennel {
    pub name: Rc<str>,
    pub cleanings: i64,
}

impl Kennel {
    pub fn new() -> Self {
        Self { name: Rc::from(KENNEL_NAME),
               cleanings: 0 }
    }
}

impl Default for Kennel {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct KennelNoThen {
    pub puppy_age: Option<i64>,
    pub minutes_walked: i64,
}

#[derive(Debug)]
pub struct KennelInner {
    pub kennel: Kennel,
    pub cats: Vec<Cat>,
}

impl KennelInner {
    pub fn new(kennel: Kennel) -> Self {
        Self { kennel,
               cats: Vec::new() }
    }

    fn last_cat(&mut self) -> Result<&mut Cat, HandlerError> {
        self.cats
            .last_mut()
            .ok_or_else(|| HandlerError::other("the kennel has no cats yet"))
    }
}

#[allow(clippy::ptr_arg)]
fn copy_cats(cats: &Vec<Cat>) -> Vec<Cat> {
    cats.iter().map(Cat::copy_of).collect()
}

fn kennel_layer() -> Layer<Kennel> {
    Layer::new("Kennel").when("the kennel is cleaned &times", |k: &mut Kennel, times: i64| {
                            k.cleanings += times;
                            Ok(())
                        })
                        .then("the kennel was cleaned &times", |k: &mut Kennel, times: i64| {
                            ComparisonFailure::check(times, k.cleanings)?;
                            Ok(())
                        })
                        .shared_field("name", |k: &Kennel| &k.name, |k: &mut Kennel| &mut k.name)
                        .field("cleanings", |k: &Kennel| &k.cleanings, |k: &mut Kennel| &mut k.cleanings)
}

fn kennel_no_then() -> SubjectType<KennelNoThen> {
    let layer = Layer::new("KennelNoThen").given("a puppy of age &age", |p: &mut KennelNoThen, age: i64| {
                                              p.puppy_age = Some(age);
                                              Ok(())
                                          })
                                          .when("the puppy walks for &minutes", |p: &mut KennelNoThen, minutes: i64| {
                                              p.minutes_walked += minutes;
                                              Ok(())
                                          })
                                          .field("puppy_age", |p: &KennelNoThen| &p.puppy_age, |p: &mut KennelNoThen| &mut p.puppy_age)
                                          .field("minutes_walked",
                                                 |p: &KennelNoThen| &p.minutes_walked,
                                                 |p: &mut KennelNoThen| &mut p.minutes_walked);
    SubjectType::with_default("KennelNoThen").layer(layer)
}

fn kennel_inner(enclosing: &SubjectType<Kennel>) -> SubjectType<KennelInner> {
    let layer = Layer::new("Kennel.Inner").given("a Cat of age &age", |i: &mut KennelInner, age: i64| {
                                              i.cats.push(Cat::new(age));
                                              Ok(())
                                          })
                                          .when("the Cat did kaki of size &size", |i: &mut KennelInner, size: i64| {
                                              i.last_cat()?.did_kaki(size);
                                              Ok(())
                                          })
                                          .then("the kennel cat count is &count", |i: &mut KennelInner, count: i64| {
                                              ComparisonFailure::check(count, i.cats.len() as i64)?;
                                              Ok(())
                                          })
                                          .then("the total kaki is &size", |i: &mut KennelInner, size: i64| {
                                              ComparisonFailure::check(size, i.cats.iter().map(Cat::kaki).sum::<i64>())?;
                                              Ok(())
                                          })
                                          .then("the kennel is &name", |i: &mut KennelInner, name: String| {
                                              ComparisonFailure::check(name.as_str(), &*i.kennel.name)?;
                                              Ok(())
                                          })
                                          .field_with("cats", |i: &KennelInner| &i.cats, |i: &mut KennelInner| &mut i.cats, copy_cats)
                                          .shared_field("kennel.name",
                                                        |i: &KennelInner| &i.kennel.name,
                                                        |i: &mut KennelInner| &mut i.kennel.name);
    SubjectType::enclosed_by("Kennel.Inner", enclosing, KennelInner::new).layer(layer)
}

/// Tipo `Kennel` con sus dos anidados ya registrados.
pub fn kennel() -> SubjectType<Kennel> {
    let base = SubjectType::with_default("Kennel").layer(kennel_layer());
    let inner = kennel_inner(&base);
    base.nest(kennel_no_then()).nest(inner)
}
