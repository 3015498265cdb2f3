//! Collections - the aggregate root of a generation run.
//!
//! A `Collection` owns the generated cards, the de-duplication sets, and
//! the single RNG stream. Generation is synchronous and single-threaded;
//! for a fixed seed and a fixed request sequence the produced cards are
//! identical run to run (excluding text sourced from live collaborators).

use rustc_hash::FxHashSet;

use crate::content::{Style, Theme};
use crate::core::GenRng;
use crate::generator::{
    compose_style, generate_abilities, hp_value, points_budget, split_ability_costs, split_hp,
    ComposeRequest, BASE_POINTS, MAX_ABILITY_POINTS,
};
use crate::mechanics::{Card, Element, Rarity};
use crate::naming::{
    resolve_ability_name, select_card_name, CardNamer, NameGenerator, NameTable,
    FALLBACK_CARD_NAME, FALLBACK_DESCRIPTION,
};
use crate::prompt::{image_prompt, visual_description};

/// Longest supported evolutionary series.
pub const MAX_SERIES_LEN: usize = 3;

/// A run of generated cards plus the state that keeps them coherent.
pub struct Collection {
    /// Collection name (export metadata).
    pub name: String,

    /// The theme this run generates under.
    pub theme: Theme,

    /// Generated cards in append order; `card.index` is 1-based.
    pub cards: Vec<Card>,

    /// Subject archetype names and detail texts already used.
    pub subjects_seen: FxHashSet<String>,

    /// Final card names already used.
    pub card_names_seen: FxHashSet<String>,

    rng: GenRng,
    ability_names: NameTable,
    name_generator: Option<Box<dyn NameGenerator>>,
    card_namer: Option<Box<dyn CardNamer>>,
}

impl Collection {
    /// Start building a collection.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> CollectionBuilder {
        CollectionBuilder::new(name)
    }

    /// The seed this run was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Generate a random series (length uniform in 1-3) for an element.
    ///
    /// With no element given, one is drawn from the theme. Returns the
    /// newly appended cards.
    pub fn generate_random(
        &mut self,
        element: Option<&Element>,
        subject_override: Option<&str>,
    ) -> &[Card] {
        let element = match element {
            Some(element) => element.clone(),
            None => self
                .rng
                .pick(&self.theme.elements)
                .expect("theme has no elements")
                .clone(),
        };
        let n = self.rng.roll_inclusive(1, MAX_SERIES_LEN as u32) as usize;
        self.generate_series(&element, n, subject_override)
    }

    /// Generate an n-card evolutionary series.
    ///
    /// The starting rarity is drawn so the last card lands on the highest
    /// feasible tier; each later card is one tier stronger, clamped at the
    /// top. The first card's style becomes the inherited baseline for the
    /// rest. Panics when `n` is outside `[1, 3]`.
    pub fn generate_series(
        &mut self,
        element: &Element,
        n: usize,
        subject_override: Option<&str>,
    ) -> &[Card] {
        assert!(
            (1..=MAX_SERIES_LEN).contains(&n),
            "series length {n} outside [1, {MAX_SERIES_LEN}]"
        );

        let rarity_range = self.theme.rarities.len().saturating_sub(n);
        let starting_rarity_index = if rarity_range > 0 {
            self.rng.roll_inclusive(0, rarity_range as u32) as usize
        } else {
            0
        };

        let first_new = self.cards.len();
        let mut inherited: Option<Style> = None;

        for i in 0..n {
            let rarity_index = (starting_rarity_index + i).min(self.theme.max_rarity_index());
            let rarity = self.theme.rarities[rarity_index].clone();
            let series_position = if n > 1 { Some(i + 1) } else { None };

            let style = self.generate_card(
                element,
                &rarity,
                inherited.as_ref(),
                series_position,
                subject_override,
            );
            if i == 0 {
                inherited = Some(style);
            }
        }

        &self.cards[first_new..]
    }

    /// Generate a single card and append it to the collection.
    ///
    /// Returns the composed style (the series assembler snapshots the
    /// first card's style as the baseline for the rest).
    fn generate_card(
        &mut self,
        element: &Element,
        rarity: &Rarity,
        inherited: Option<&Style>,
        series_position: Option<usize>,
        subject_override: Option<&str>,
    ) -> Style {
        let budget = points_budget(rarity.index, series_position.unwrap_or(1));
        let split = split_hp(budget, &mut self.rng);
        let costs = split_ability_costs(split.ability_points, rarity.index, &mut self.rng);
        let mut abilities = generate_abilities(&self.theme, element, &costs, &mut self.rng);

        for ability in &mut abilities {
            ability.name = resolve_ability_name(
                &self.ability_names,
                self.name_generator.as_deref_mut(),
                ability,
                &mut self.rng,
            );
        }

        let hp = hp_value(budget, split.hp_points);

        let request = ComposeRequest {
            inherited,
            element,
            rarity,
            series_position,
            subject_override,
        };
        let style = compose_style(&self.theme, &request, &mut self.subjects_seen, &mut self.rng);

        let mut card = Card {
            index: self.cards.len() + 1,
            name: FALLBACK_CARD_NAME.to_string(),
            element: element.clone(),
            rarity: rarity.clone(),
            hp,
            abilities,
            description: FALLBACK_DESCRIPTION.to_string(),
            part_of_series: series_position.is_some(),
            style: style.clone(),
            image_prompt: String::new(),
            visual_description: String::new(),
        };

        // The namer reads the rendered description, so render before
        // naming and again after the name lands in the prompt.
        card.image_prompt = image_prompt(&card);
        card.visual_description = visual_description(&card);

        if let Some(namer) = self.card_namer.as_deref_mut() {
            match namer.name_candidates(&card) {
                Ok(candidates) => {
                    if let Some(name) = select_card_name(&candidates, &self.card_names_seen) {
                        card.name = name;
                    } else {
                        log::warn!("card namer produced no usable candidates, keeping placeholder");
                    }
                }
                Err(error) => log::warn!("card namer failed: {error}, keeping placeholder"),
            }
            match namer.describe(&card) {
                Ok(description) => card.description = description.trim().to_string(),
                Err(error) => log::warn!("card describer failed: {error}, keeping placeholder"),
            }
        }

        card.image_prompt = image_prompt(&card);
        card.visual_description = visual_description(&card);

        log::debug!(
            "generated card {} ({}, {}, budget {budget}, {} abilities)",
            card.index,
            element.name,
            rarity.name,
            card.abilities.len()
        );

        self.card_names_seen.insert(card.name.clone());
        self.cards.push(card);
        style
    }

    /// Export the whole collection in its stable serialized form.
    #[must_use]
    pub fn export_json(&self) -> serde_json::Value {
        serde_json::json!({
            "collection_name": self.name,
            "cards": self.cards.iter().map(Card::export_json).collect::<Vec<_>>(),
        })
    }

    /// A plain-text sheet of every card's image prompt, for handing to an
    /// image renderer in bulk.
    #[must_use]
    pub fn image_prompt_sheet(&self) -> String {
        let mut sheet = String::new();
        for card in &self.cards {
            sheet.push_str(&format!("[{:03}] {}\n", card.index, card.name));
            sheet.push_str(&card.image_prompt);
            sheet.push_str("\n\n");
        }
        sheet
    }
}

/// Builder for a collection run.
///
/// ## Example
///
/// ```
/// use monster_forge::collection::Collection;
/// use monster_forge::themes::classic_theme;
///
/// let mut collection = Collection::builder("classic")
///     .theme(classic_theme())
///     .seed(42)
///     .build();
///
/// let element = collection.theme.element_by_name("fire").unwrap().clone();
/// let cards = collection.generate_series(&element, 3, None);
/// assert_eq!(cards.len(), 3);
/// ```
pub struct CollectionBuilder {
    name: String,
    theme: Option<Theme>,
    seed: u64,
    ability_names: NameTable,
    name_generator: Option<Box<dyn NameGenerator>>,
    card_namer: Option<Box<dyn CardNamer>>,
}

impl CollectionBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            theme: None,
            seed: 0,
            ability_names: NameTable::new(),
            name_generator: None,
            card_namer: None,
        }
    }

    /// Set the theme (required).
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the RNG seed for the run.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the ability name table.
    #[must_use]
    pub fn ability_names(mut self, table: NameTable) -> Self {
        self.ability_names = table;
        self
    }

    /// Wire up the fallback ability-name generator.
    #[must_use]
    pub fn name_generator(mut self, generator: Box<dyn NameGenerator>) -> Self {
        self.name_generator = Some(generator);
        self
    }

    /// Wire up the card naming/description collaborator.
    #[must_use]
    pub fn card_namer(mut self, namer: Box<dyn CardNamer>) -> Self {
        self.card_namer = Some(namer);
        self
    }

    /// Build the collection.
    ///
    /// Panics when no theme was given, the theme has no elements or
    /// rarities, or the rarity ladder is tall enough that a full-length
    /// series could exceed the splitter's ability-point cap. All
    /// misconfiguration fails here, never mid-generation.
    #[must_use]
    pub fn build(self) -> Collection {
        let theme = self.theme.expect("collection requires a theme");
        assert!(!theme.elements.is_empty(), "theme must define elements");
        assert!(!theme.rarities.is_empty(), "theme must define rarities");

        let worst_case_budget =
            BASE_POINTS + theme.max_rarity_index() as u32 + (MAX_SERIES_LEN as u32 - 1);
        assert!(
            worst_case_budget <= MAX_ABILITY_POINTS,
            "rarity ladder too tall: a full series can reach budget {worst_case_budget}, \
             above the ability-point cap {MAX_ABILITY_POINTS}"
        );

        Collection {
            name: self.name,
            theme,
            cards: Vec::new(),
            subjects_seen: FxHashSet::default(),
            card_names_seen: FxHashSet::default(),
            rng: GenRng::new(self.seed),
            ability_names: self.ability_names,
            name_generator: self.name_generator,
            card_namer: self.card_namer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Archetype, Catalog, Detail};
    use crate::naming::PlaceholderNamer;

    fn fire() -> Element {
        Element::new("Fire")
    }

    fn mini_theme() -> Theme {
        let catalog = Catalog::new()
            .with_archetypes(
                fire(),
                [
                    Archetype::new("wolf").with_details([Detail::with("claws"), Detail::with("fur")]),
                    Archetype::new("dragon").with_details([Detail::with("scales")]),
                    Archetype::new("fox").with_details([Detail::with("fur"), Detail::with("tail").quantified("a")]),
                ],
            )
            .with_environments(fire(), ["volcano", "desert"])
            .with_ambience(fire(), ["red lighting", "lava background", "orange galaxy background"])
            .with_global_detail_adjectives(["golden", "ancient"])
            .with_detail_adjectives(fire(), ["fiery"]);

        Theme::new("mini")
            .with_style(Style::theme_base("monster", "--niji"))
            .with_elements([Element::new("Neutral").neutral(), fire()])
            .with_rarities([
                Rarity::new("common", 0),
                Rarity::new("uncommon", 1),
                Rarity::new("rare", 2),
            ])
            .with_catalog(catalog)
    }

    fn collection(seed: u64) -> Collection {
        Collection::builder("test")
            .theme(mini_theme())
            .seed(seed)
            .card_namer(Box::new(PlaceholderNamer))
            .build()
    }

    #[test]
    fn test_indices_are_gap_free() {
        let mut collection = collection(42);
        let element = fire();
        collection.generate_series(&element, 3, None);
        collection.generate_series(&element, 2, None);

        let indices: Vec<usize> = collection.cards.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_series_rarity_non_decreasing() {
        for seed in 0..20 {
            let mut collection = collection(seed);
            let element = fire();
            let cards = collection.generate_series(&element, 3, None);

            for pair in cards.windows(2) {
                assert!(pair[0].rarity.index <= pair[1].rarity.index);
            }
            // Three cards over a three-tier ladder always end at the top.
            assert_eq!(cards.last().unwrap().rarity.index, 2);
        }
    }

    #[test]
    fn test_series_shares_lineage() {
        let mut collection = collection(42);
        let element = fire();
        let cards = collection.generate_series(&element, 3, None);

        let first = &cards[0];
        for card in cards {
            assert_eq!(card.style.subject, first.style.subject);
            assert_eq!(card.style.detail, first.style.detail);
            assert_eq!(card.style.environment, first.style.environment);
            assert_eq!(card.element, first.element);
            assert!(card.part_of_series);
        }
    }

    #[test]
    fn test_single_card_is_standalone() {
        let mut collection = collection(42);
        let element = fire();
        let cards = collection.generate_series(&element, 1, None);
        assert_eq!(cards.len(), 1);
        assert!(!cards[0].part_of_series);
    }

    #[test]
    fn test_hp_and_abilities_within_budget() {
        for seed in 0..20 {
            let mut collection = collection(seed);
            let element = fire();
            let cards = collection.generate_series(&element, 3, None);

            for (i, card) in cards.iter().enumerate() {
                let budget = points_budget(card.rarity.index, i + 1);
                let cost_total: u32 = card.abilities.iter().map(|a| a.cost).sum();

                // HP floor is the budget alone; ceiling is full sacrifice.
                assert!(card.hp >= 10 * budget);
                assert!(card.hp <= 10 * (budget + (budget / 2) * 2));
                assert!(cost_total >= budget - budget / 2 - 1);
                assert!((1..=2).contains(&card.abilities.len()));
            }
        }
    }

    #[test]
    fn test_determinism_same_seed() {
        let mut run1 = collection(99);
        let mut run2 = collection(99);
        let element = fire();

        for _ in 0..5 {
            run1.generate_random(Some(&element), None);
            run2.generate_random(Some(&element), None);
        }

        assert_eq!(run1.export_json(), run2.export_json());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut run1 = collection(1);
        let mut run2 = collection(2);
        let element = fire();

        for _ in 0..5 {
            run1.generate_random(Some(&element), None);
            run2.generate_random(Some(&element), None);
        }

        assert_ne!(run1.export_json(), run2.export_json());
    }

    #[test]
    fn test_subjects_deduplicated_until_exhausted() {
        let mut collection = collection(7);
        let element = fire();

        // Three archetypes in the theme: the first three standalone cards
        // must use three distinct subjects.
        for _ in 0..3 {
            collection.generate_series(&element, 1, None);
        }
        let subjects: FxHashSet<_> = collection
            .cards
            .iter()
            .map(|c| c.style.subject.clone().unwrap())
            .collect();
        assert_eq!(subjects.len(), 3);

        // A fourth card still generates, repeating an archetype.
        collection.generate_series(&element, 1, None);
        assert_eq!(collection.cards.len(), 4);
    }

    #[test]
    fn test_export_shape() {
        let mut collection = collection(42);
        let element = fire();
        collection.generate_series(&element, 2, None);

        let json = collection.export_json();
        assert_eq!(json["collection_name"], "test");
        assert_eq!(json["cards"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_prompt_sheet_lists_every_card() {
        let mut collection = collection(42);
        let element = fire();
        collection.generate_series(&element, 2, None);

        let sheet = collection.image_prompt_sheet();
        assert!(sheet.contains("[001]"));
        assert!(sheet.contains("[002]"));
    }

    #[test]
    #[should_panic(expected = "outside [1, 3]")]
    fn test_series_length_zero_rejected() {
        let mut collection = collection(0);
        let element = fire();
        collection.generate_series(&element, 0, None);
    }

    #[test]
    #[should_panic(expected = "requires a theme")]
    fn test_build_without_theme() {
        let _ = Collection::builder("broken").build();
    }

    #[test]
    #[should_panic(expected = "rarity ladder too tall")]
    fn test_build_rejects_tall_rarity_ladder() {
        // Four tiers let a 3-card series reach budget 9, past the cap.
        let theme = mini_theme().with_rarities([
            Rarity::new("common", 0),
            Rarity::new("uncommon", 1),
            Rarity::new("rare", 2),
            Rarity::new("mythic", 3),
        ]);
        let _ = Collection::builder("broken").theme(theme).build();
    }

    #[test]
    fn test_build_accepts_full_height_ladder() {
        // Three tiers sit exactly at the cap and must stay buildable.
        let mut collection = collection(5);
        let element = fire();
        let cards = collection.generate_series(&element, 3, None);
        assert_eq!(cards.len(), 3);
    }
}
