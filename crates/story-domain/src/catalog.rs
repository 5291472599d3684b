//! Catálogo de tipos sujeto por nombre.

use indexmap::IndexMap;
use log::debug;
use story_core::{EventStore, StoryError, StoryTarget, StoryTester};

/// Registro de tipos sujeto en orden de inserción.
#[derive(Default)]
pub struct SubjectCatalog {
    targets: IndexMap<String, Box<dyn StoryTarget>>,
}

impl SubjectCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catálogo con todos los sujetos de este crate.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register(crate::cat_story());
        catalog.register(crate::no_when());
        catalog.register(crate::no_then());
        catalog.register(crate::vet_visit_story());
        catalog.register(crate::kennel());
        catalog
    }

    /// Registra `target` bajo su nombre. Un nombre repetido reemplaza al
    /// anterior conservando su posición.
    pub fn register(&mut self, target: impl StoryTarget + 'static) {
        let name = target.name().to_string();
        debug!("registering subject type {name}");
        self.targets.insert(name, Box::new(target));
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&dyn StoryTarget> {
        self.targets.get(name).map(|t| t.as_ref())
    }

    fn lookup(&self, name: &str) -> Result<&dyn StoryTarget, StoryError> {
        if name.trim().is_empty() {
            return Err(StoryError::InvalidArgument("subject type name is empty".into()));
        }
        self.get(name)
            .ok_or_else(|| StoryError::InvalidArgument(format!("unknown subject type {name:?}")))
    }

    /// Ejecuta `script` sobre el tipo `name`; con `nested_fallback` prueba
    /// también sus tipos anidados si el tipo no tiene el `Given`.
    pub fn run<E: EventStore>(&self,
                              tester: &mut StoryTester<E>,
                              name: &str,
                              script: &str,
                              nested_fallback: bool)
                              -> Result<(), StoryError> {
        let target = self.lookup(name)?;
        if nested_fallback {
            tester.run_with_fallback(script, target)
        } else {
            tester.run_against_type(script, target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_keeps_insertion_order() {
        let catalog = SubjectCatalog::standard();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["CatStory", "NoWhen", "NoThen", "VetVisitStory", "Kennel"]);
    }

    #[test]
    fn unknown_or_empty_names_are_invalid_arguments() {
        let catalog = SubjectCatalog::standard();
        let mut tester = StoryTester::new();
        for name in ["", "  ", "Dog"] {
            let err = catalog.run(&mut tester, name, "Given a Cat of age 1", true).unwrap_err();
            assert!(matches!(err, StoryError::InvalidArgument(_)), "{name:?}");
        }
        assert!(tester.last_run_id().is_none());
    }

    #[test]
    fn runs_by_name_with_and_without_fallback() {
        let catalog = SubjectCatalog::standard();
        let mut tester = StoryTester::new();
        let script = "Given a Cat of age 3\nThen the kennel cat count is 1";
        assert!(catalog.run(&mut tester, "Kennel", script, false).unwrap_err().is_given_not_found());
        catalog.run(&mut tester, "Kennel", script, true).expect("Kennel.Inner handles it");
    }
}
