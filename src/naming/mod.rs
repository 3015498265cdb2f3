//! Naming: the ability name table, external collaborators, and the
//! selection rules that keep generation deterministic and de-duplicated.
//!
//! ## Resolution order for ability names
//!
//! 1. Name table hit on the identity key: uniform draw among entries
//! 2. Table miss: ask the `NameGenerator` collaborator
//! 3. Collaborator failure: the literal fallback name
//!
//! Card names come from a `CardNamer`; candidates are sanitized, names the
//! collection has already used are dropped (widening back to all candidates
//! when every one is taken), and the shortest survivor wins, ties broken
//! lexicographically so runs stay reproducible.

pub mod collaborators;
pub mod table;

pub use collaborators::{
    CardNamer, NameGenerator, NamingError, PlaceholderNamer, FALLBACK_ABILITY_NAME,
    FALLBACK_CARD_NAME, FALLBACK_DESCRIPTION,
};
pub use table::NameTable;

use rustc_hash::FxHashSet;

use crate::core::GenRng;
use crate::mechanics::Ability;

/// Strip a raw candidate down to letters, spaces and hyphens, then
/// capitalize each word. Collapses runs of whitespace.
#[must_use]
pub fn sanitize_name(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_alphabetic() || *c == ' ' || *c == '-')
        .collect();

    kept.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve an ability's display name.
///
/// Table hits draw uniformly among the entries using the collection
/// stream. On a miss the generator collaborator is asked for one name; if
/// it fails (or none is wired up) the fallback name is used.
pub fn resolve_ability_name(
    table: &NameTable,
    generator: Option<&mut (dyn NameGenerator + '_)>,
    ability: &Ability,
    rng: &mut GenRng,
) -> String {
    let key = ability.identity_key();

    if let Some(names) = table.get(&key) {
        if let Some(name) = rng.pick(names) {
            return name.clone();
        }
    }

    log::warn!("no ability name table entry for {key}");
    if let Some(generator) = generator {
        match generator.generate_names(&ability.element, ability.cost, ability.is_mixed_element, 1)
        {
            Ok(names) => {
                for raw in names {
                    let name = sanitize_name(&raw);
                    if !name.is_empty() {
                        return name;
                    }
                }
                log::warn!("name generator returned no usable candidates for {key}");
            }
            Err(error) => log::warn!("name generator failed for {key}: {error}"),
        }
    }

    FALLBACK_ABILITY_NAME.to_string()
}

/// Pick a card name from collaborator candidates.
///
/// Candidates are sanitized; ones already in `seen_names` are dropped
/// unless that empties the pool. The shortest survivor wins, ties broken
/// lexicographically. Returns `None` when no candidate survives
/// sanitization.
#[must_use]
pub fn select_card_name(candidates: &[String], seen_names: &FxHashSet<String>) -> Option<String> {
    let mut cleaned: Vec<String> = candidates
        .iter()
        .map(|raw| sanitize_name(raw))
        .filter(|name| !name.is_empty())
        .collect();
    cleaned.sort();
    cleaned.dedup();

    if cleaned.is_empty() {
        return None;
    }

    let unseen: Vec<String> = cleaned
        .iter()
        .filter(|name| !seen_names.contains(*name))
        .cloned()
        .collect();
    let pool = if unseen.is_empty() { cleaned } else { unseen };

    pool.into_iter().min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanics::Element;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("  ember fox!! "), "Ember Fox");
        assert_eq!(sanitize_name("FLAME-tail 9000"), "Flame-tail");
        assert_eq!(sanitize_name("123"), "");
    }

    #[test]
    fn test_select_shortest() {
        let seen = FxHashSet::default();
        let candidates = vec!["Emberclaw".to_string(), "Fyr".to_string(), "Ashling".to_string()];
        assert_eq!(select_card_name(&candidates, &seen).as_deref(), Some("Fyr"));
    }

    #[test]
    fn test_select_tie_break_lexicographic() {
        let seen = FxHashSet::default();
        let candidates = vec!["Zed".to_string(), "Abe".to_string()];
        assert_eq!(select_card_name(&candidates, &seen).as_deref(), Some("Abe"));
    }

    #[test]
    fn test_select_skips_seen_names() {
        let mut seen = FxHashSet::default();
        seen.insert("Fyr".to_string());
        let candidates = vec!["Emberclaw".to_string(), "Fyr".to_string()];
        assert_eq!(select_card_name(&candidates, &seen).as_deref(), Some("Emberclaw"));
    }

    #[test]
    fn test_select_widens_when_all_seen() {
        let mut seen = FxHashSet::default();
        seen.insert("Fyr".to_string());
        seen.insert("Emberclaw".to_string());
        let candidates = vec!["Emberclaw".to_string(), "Fyr".to_string()];
        // Every candidate is taken; the shortest is reused rather than failing.
        assert_eq!(select_card_name(&candidates, &seen).as_deref(), Some("Fyr"));
    }

    #[test]
    fn test_select_none_when_nothing_survives() {
        let seen = FxHashSet::default();
        let candidates = vec!["123".to_string(), "!!!".to_string()];
        assert_eq!(select_card_name(&candidates, &seen), None);
    }

    #[test]
    fn test_resolve_from_table_is_deterministic() {
        let mut table = NameTable::new();
        table.insert("fire_2_pure_standard", ["Ember".to_string(), "Flame Burst".to_string()]);
        let ability = Ability::new("x", Element::new("Fire"), 2, false);

        let mut rng1 = GenRng::new(42);
        let mut rng2 = GenRng::new(42);
        let name1 = resolve_ability_name(&table, None, &ability, &mut rng1);
        let name2 = resolve_ability_name(&table, None, &ability, &mut rng2);
        assert_eq!(name1, name2);
        assert!(["Ember", "Flame Burst"].contains(&name1.as_str()));
    }

    struct FixedGenerator(Vec<String>);

    impl NameGenerator for FixedGenerator {
        fn generate_names(
            &mut self,
            _element: &Element,
            _cost: u32,
            _is_mixed: bool,
            _count: usize,
        ) -> Result<Vec<String>, NamingError> {
            Ok(self.0.clone())
        }
    }

    struct FailingGenerator;

    impl NameGenerator for FailingGenerator {
        fn generate_names(
            &mut self,
            _element: &Element,
            _cost: u32,
            _is_mixed: bool,
            _count: usize,
        ) -> Result<Vec<String>, NamingError> {
            Err(NamingError::Unavailable("offline".to_string()))
        }
    }

    #[test]
    fn test_resolve_miss_uses_generator() {
        let table = NameTable::new();
        let ability = Ability::new("x", Element::new("Fire"), 2, false);
        let mut generator = FixedGenerator(vec!["blazing strike!".to_string()]);
        let mut rng = GenRng::new(42);

        let name = resolve_ability_name(&table, Some(&mut generator), &ability, &mut rng);
        assert_eq!(name, "Blazing Strike");
    }

    #[test]
    fn test_resolve_generator_failure_falls_back() {
        let table = NameTable::new();
        let ability = Ability::new("x", Element::new("Fire"), 2, false);
        let mut generator = FailingGenerator;
        let mut rng = GenRng::new(42);

        let name = resolve_ability_name(&table, Some(&mut generator), &ability, &mut rng);
        assert_eq!(name, FALLBACK_ABILITY_NAME);
    }

    #[test]
    fn test_resolve_without_generator_falls_back() {
        let table = NameTable::new();
        let ability = Ability::new("x", Element::new("Fire"), 2, false);
        let mut rng = GenRng::new(42);

        let name = resolve_ability_name(&table, None, &ability, &mut rng);
        assert_eq!(name, FALLBACK_ABILITY_NAME);
    }
}
