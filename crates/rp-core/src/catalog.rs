use serde_json::{Map, Value};

use crate::class::{CharacterClass, ClassRecord};
use crate::error::{CoreError, CoreResult};

/// Class list shipped with the crate, in the game's character-creation order.
const BUILTIN_CLASSES: &str = include_str!("../data/characters.json");

/// An ordered, non-empty set of starting classes.
///
/// Order is the order the classes were defined in the backing data and is
/// what [`next`](Self::next) and [`previous`](Self::previous) cycle through.
/// Lookups by name ignore ASCII case.
#[derive(Debug, Clone)]
pub struct ClassCatalog {
    classes: Vec<CharacterClass>,
}

impl ClassCatalog {
    /// Build a catalog from classes in order.
    pub fn new(classes: Vec<CharacterClass>) -> CoreResult<Self> {
        if classes.is_empty() {
            return Err(CoreError::Empty);
        }
        for (i, class) in classes.iter().enumerate() {
            class.validate()?;
            if classes[..i]
                .iter()
                .any(|c| c.name.eq_ignore_ascii_case(&class.name))
            {
                return Err(CoreError::DuplicateClass(class.name.clone()));
            }
        }
        Ok(Self { classes })
    }

    /// Parse a catalog from a JSON object keyed by class name.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let entries: Map<String, Value> = serde_json::from_str(json)?;
        let classes = entries
            .into_iter()
            .map(|(key, value)| {
                let record: ClassRecord = serde_json::from_value(value)?;
                record.into_class(&key)
            })
            .collect::<CoreResult<Vec<_>>>()?;
        let catalog = Self::new(classes)?;
        tracing::debug!(classes = catalog.len(), "loaded class catalog");
        Ok(catalog)
    }

    /// The embedded ten-class catalog.
    pub fn builtin() -> CoreResult<Self> {
        Self::from_json(BUILTIN_CLASSES)
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always false; an empty catalog cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate classes in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CharacterClass> {
        self.classes.iter()
    }

    /// Class names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.name.as_str()).collect()
    }

    /// The first class in catalog order.
    pub fn first(&self) -> &CharacterClass {
        &self.classes[0]
    }

    /// Position of `name` in catalog order.
    pub fn index_of(&self, name: &str) -> CoreResult<usize> {
        self.classes
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::NotFound(name.to_string()))
    }

    /// Look up a class by name.
    pub fn get(&self, name: &str) -> CoreResult<&CharacterClass> {
        self.index_of(name).map(|i| &self.classes[i])
    }

    /// The class `delta` positions away from `name`, wrapping at both ends.
    pub fn step(&self, name: &str, delta: isize) -> CoreResult<&CharacterClass> {
        let current = self.index_of(name)? as isize;
        let n = self.classes.len() as isize;
        let index = (current + delta).rem_euclid(n) as usize;
        Ok(&self.classes[index])
    }

    /// The class after `name`; the last class wraps to the first.
    pub fn next(&self, name: &str) -> CoreResult<&CharacterClass> {
        self.step(name, 1)
    }

    /// The class before `name`; the first class wraps to the last.
    pub fn previous(&self, name: &str) -> CoreResult<&CharacterClass> {
        self.step(name, -1)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::attribute::AttributeSet;

    fn builtin() -> ClassCatalog {
        ClassCatalog::builtin().unwrap()
    }

    #[test]
    fn builtin_order_matches_data() {
        let catalog = builtin();
        assert_eq!(
            catalog.names(),
            [
                "vagabond",
                "warrior",
                "hero",
                "bandit",
                "astrologer",
                "prophet",
                "samurai",
                "prisoner",
                "confessor",
                "wretch"
            ]
        );
    }

    #[test]
    fn builtin_levels_match_attribute_totals() {
        // Every class sits at level 1 plus its points over the 79-point floor.
        for class in builtin().iter() {
            assert_eq!(class.level, class.base_attributes.total() - 79, "{}", class.name);
        }
    }

    #[test]
    fn get_is_case_insensitive() {
        let catalog = builtin();
        assert_eq!(catalog.get("Samurai").unwrap().name, "samurai");
        assert_eq!(catalog.get("WRETCH").unwrap().level, 1);
    }

    #[test]
    fn get_unknown_class() {
        let err = builtin().get("paladin").unwrap_err();
        assert!(matches!(err, CoreError::NotFound(ref n) if n == "paladin"));
    }

    #[test]
    fn next_wraps_last_to_first() {
        let catalog = builtin();
        assert_eq!(catalog.next("wretch").unwrap().name, "vagabond");
        assert_eq!(catalog.next("vagabond").unwrap().name, "warrior");
    }

    #[test]
    fn previous_wraps_first_to_last() {
        let catalog = builtin();
        assert_eq!(catalog.previous("vagabond").unwrap().name, "wretch");
        assert_eq!(catalog.previous("wretch").unwrap().name, "confessor");
    }

    #[test]
    fn navigation_unknown_class() {
        let catalog = builtin();
        assert!(matches!(catalog.next("paladin"), Err(CoreError::NotFound(_))));
        assert!(matches!(
            catalog.previous("paladin"),
            Err(CoreError::NotFound(_))
        ));
    }

    #[test]
    fn single_class_catalog_wraps_to_itself() {
        let catalog =
            ClassCatalog::new(vec![CharacterClass::new("solo", 1, AttributeSet::uniform(10))])
                .unwrap();
        assert_eq!(catalog.next("solo").unwrap().name, "solo");
        assert_eq!(catalog.previous("solo").unwrap().name, "solo");
    }

    #[test]
    fn empty_catalog_rejected() {
        assert!(matches!(ClassCatalog::new(vec![]), Err(CoreError::Empty)));
        assert!(matches!(ClassCatalog::from_json("{}"), Err(CoreError::Empty)));
    }

    #[test]
    fn duplicate_names_rejected() {
        let classes = vec![
            CharacterClass::new("hero", 7, AttributeSet::uniform(10)),
            CharacterClass::new("Hero", 7, AttributeSet::uniform(10)),
        ];
        assert!(matches!(
            ClassCatalog::new(classes),
            Err(CoreError::DuplicateClass(ref n)) if n == "Hero"
        ));
    }

    #[test]
    fn from_json_malformed() {
        assert!(matches!(
            ClassCatalog::from_json("{ not json"),
            Err(CoreError::Parse(_))
        ));
        assert!(matches!(
            ClassCatalog::from_json(r#"{"a": {"class": "a", "level": 1}}"#),
            Err(CoreError::Parse(_))
        ));
    }

    #[test]
    fn from_json_keeps_document_order() {
        let json = r#"{
            "zeta": {"class": "zeta", "level": 1, "playerStats": {
                "vigor": 10, "mind": 10, "endurance": 10, "strength": 10,
                "dexterity": 10, "intelligence": 10, "faith": 10, "arcane": 10}},
            "alpha": {"class": "alpha", "level": 2, "playerStats": {
                "vigor": 11, "mind": 10, "endurance": 10, "strength": 10,
                "dexterity": 10, "intelligence": 10, "faith": 10, "arcane": 10}}
        }"#;
        let catalog = ClassCatalog::from_json(json).unwrap();
        assert_eq!(catalog.names(), ["zeta", "alpha"]);
        assert_eq!(catalog.first().name, "zeta");
    }

    proptest! {
        #[test]
        fn next_and_previous_are_inverse(index in 0usize..10) {
            let catalog = builtin();
            let name = catalog.names()[index].to_string();
            let forward = catalog.next(&name).unwrap().name.clone();
            prop_assert_eq!(&catalog.previous(&forward).unwrap().name, &name);
            let backward = catalog.previous(&name).unwrap().name.clone();
            prop_assert_eq!(&catalog.next(&backward).unwrap().name, &name);
        }

        #[test]
        fn step_is_periodic(index in 0usize..10, delta in -50isize..50) {
            let catalog = builtin();
            let name = catalog.names()[index];
            let n = catalog.len() as isize;
            prop_assert_eq!(
                &catalog.step(name, delta).unwrap().name,
                &catalog.step(name, delta + n).unwrap().name
            );
        }
    }
}
