//! Tipos sujeto sobre `Cat`.
//!
//! Todos guardan el gato en un `Option<Cat>`: vale `None` hasta que un
//! `Given` lo crea, y se copia en los snapshots con `Cat::copy_of`.

use story_core::subject::{HandlerError, Layer, SubjectType};
use story_core::{story_layer, ComparisonFailure};

use crate::Cat;

fn cat_mut(slot: &mut Option<Cat>) -> Result<&mut Cat, HandlerError> {
    slot.as_mut()
        .ok_or_else(|| HandlerError::other("no Cat yet: the story must start with a Given"))
}

#[derive(Debug, Default)]
pub struct CatStory {
    pub cat: Option<Cat>,
}

pub fn cat_story_layer() -> Layer<CatStory> {
    story_layer!(CatStory => "CatStory" {
        given "a Cat of age &age" => |s, age: i64| {
            s.cat = Some(Cat::new(age));
            Ok(())
        },
        when "the Cat is not taken out for a walk, the number of hours is &hours" => |s, hours: i64| {
            cat_mut(&mut s.cat)?.not_taken_for_a_walk(hours);
            Ok(())
        },
        when "the Cat did kaki of size &size" => |s, size: i64| {
            cat_mut(&mut s.cat)?.did_kaki(size);
            Ok(())
        },
        when "backup &dor" => |_s, _dor: i64| { Ok(()) },
        then "the kaki size is &size" => |s, size: i64| {
            let actual = cat_mut(&mut s.cat)?.kaki();
            ComparisonFailure::check(size, actual)?;
            Ok(())
        },
        then "the house condition is &condition" => |s, condition: String| {
            let actual = cat_mut(&mut s.cat)?.house_condition();
            ComparisonFailure::check(condition.as_str(), actual)?;
            Ok(())
        },
    })
    .optional_field_with("cat", |s: &CatStory| &s.cat, |s: &mut CatStory| &mut s.cat, Cat::copy_of)
}

pub fn cat_story() -> SubjectType<CatStory> {
    SubjectType::with_default("CatStory").layer(cat_story_layer())
}

/// Sólo `Given` y `Then`.
#[derive(Debug, Default)]
pub struct NoWhen {
    pub cat: Option<Cat>,
}

pub fn no_when() -> SubjectType<NoWhen> {
    let layer = Layer::new("NoWhen").given("a Cat of age &age", |s: &mut NoWhen, age: i64| {
                                        s.cat = Some(Cat::new(age));
                                        Ok(())
                                    })
                                    .then("the house condition is &condition", |s: &mut NoWhen, condition: String| {
                                        let actual = cat_mut(&mut s.cat)?.house_condition();
                                        ComparisonFailure::check(condition.as_str(), actual)?;
                                        Ok(())
                                    })
                                    .optional_field_with("cat", |s: &NoWhen| &s.cat, |s: &mut NoWhen| &mut s.cat, Cat::copy_of);
    SubjectType::with_default("NoWhen").layer(layer)
}

/// Sólo `Given` y `When`.
#[derive(Debug, Default)]
pub struct NoThen {
    pub cat: Option<Cat>,
}

pub fn no_then() -> SubjectType<NoThen> {
    let layer = Layer::new("NoThen").given("a Cat of age &age", |s: &mut NoThen, age: i64| {
                                        s.cat = Some(Cat::new(age));
                                        Ok(())
                                    })
                                    .when("the Cat is not taken out for a walk, the number of hours is &hours",
                                          |s: &mut NoThen, hours: i64| {
                                              cat_mut(&mut s.cat)?.not_taken_for_a_walk(hours);
                                              Ok(())
                                          })
                                    .optional_field_with("cat", |s: &NoThen| &s.cat, |s: &mut NoThen| &mut s.cat, Cat::copy_of);
    SubjectType::with_default("NoThen").layer(layer)
}

/// `CatStory` más una visita al veterinario. Hereda todos los handlers de
/// `CatStory`; el `Then` de la condición de la casa se redefine porque una
/// visita al veterinario deja la casa "clean".
#[derive(Debug, Default)]
pub struct VetVisitStory {
    pub story: CatStory,
    pub bill: i64,
    pub visited: bool,
}

pub fn vet_visit_story() -> SubjectType<VetVisitStory> {
    let own = Layer::new("VetVisitStory").when("the Cat visits the vet, the bill is &amount", |s: &mut VetVisitStory, amount: i64| {
                                             cat_mut(&mut s.story.cat)?;
                                             s.bill += amount;
                                             s.visited = true;
                                             Ok(())
                                         })
                                         .then("the vet bill is &amount", |s: &mut VetVisitStory, amount: i64| {
                                             ComparisonFailure::check(amount, s.bill)?;
                                             Ok(())
                                         })
                                         .then("the house condition is &condition", |s: &mut VetVisitStory, condition: String| {
                                             let actual = if s.visited { "clean" } else { cat_mut(&mut s.story.cat)?.house_condition() };
                                             ComparisonFailure::check(condition.as_str(), actual)?;
                                             Ok(())
                                         })
                                         .field("bill", |s: &VetVisitStory| &s.bill, |s: &mut VetVisitStory| &mut s.bill)
                                         .field("visited", |s: &VetVisitStory| &s.visited, |s: &mut VetVisitStory| &mut s.visited);
    SubjectType::with_default("VetVisitStory").layer(own)
                                              .layer(cat_story_layer().embed(|s: &VetVisitStory| &s.story,
                                                                             |s: &mut VetVisitStory| &mut s.story))
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_core::{run_against_type, StoryError};

    #[test]
    fn cat_story_passes_a_clean_script() {
        run_against_type("Given a Cat of age 3\nWhen the Cat did kaki of size 5\nThen the kaki size is 5", &cat_story()).expect("passes");
    }

    #[test]
    fn when_before_given_is_a_handler_error() {
        let err = run_against_type("When the Cat did kaki of size 5", &cat_story()).unwrap_err();
        assert!(matches!(err, StoryError::Handler { .. }));
    }

    #[test]
    fn vet_visit_inherits_and_overrides() {
        let ty = vet_visit_story();
        assert_eq!(ty.layers().len(), 2);
        run_against_type("Given a Cat of age 2\nWhen the Cat did kaki of size 1\nThen the house condition is dirty\nWhen the Cat visits the vet, the bill is 40\nWhen the Cat visits the vet, the bill is 2\nThen the vet bill is 42\nThen the kaki size is 1\nThen the house condition is clean",
                         &ty).expect("passes");
    }
}
