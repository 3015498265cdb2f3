//! The classic monster theme.
//!
//! Six elements (Neutral first), a three-tier rarity ladder, and the full
//! creature/environment/ambience content tables. Kept as a ready-made
//! reference configuration; collections for other universes build their
//! own `Theme` the same way.

use crate::content::{Archetype, Catalog, Detail, Style, Theme};
use crate::mechanics::{Element, Rarity};

fn neutral() -> Element {
    Element::new("Neutral").with_color("\x1b[37m").neutral()
}

fn fire() -> Element {
    Element::new("Fire").with_color("\x1b[31m")
}

fn water() -> Element {
    Element::new("Water").with_color("\x1b[34m")
}

fn grass() -> Element {
    Element::new("Grass").with_color("\x1b[32m")
}

fn electric() -> Element {
    Element::new("Electric").with_color("\x1b[33m")
}

fn psychic() -> Element {
    Element::new("Psychic").with_color("\x1b[35m")
}

fn body_wearables() -> Vec<Detail> {
    vec![
        Detail::wearing("armor"),
        Detail::wearing("bracers"),
        Detail::wearing("gemstones"),
    ]
}

fn head_wearables() -> Vec<Detail> {
    vec![
        Detail::wearing("mask").quantified("a"),
        Detail::wearing("crown").quantified("a"),
        Detail::wearing("crystal headband").quantified("a"),
    ]
}

fn wearables() -> Vec<Detail> {
    let mut details = body_wearables();
    details.extend(head_wearables());
    details
}

fn weapons() -> Vec<Detail> {
    vec![
        Detail::holding("sword").quantified("a"),
        Detail::holding("bow").quantified("a"),
        Detail::holding("staff").quantified("a"),
        Detail::holding("shield").quantified("a"),
        Detail::holding("axe").quantified("an"),
        Detail::holding("dagger").quantified("a"),
        Detail::holding("spear").quantified("a"),
        Detail::holding("mace").quantified("a"),
        Detail::holding("hammer").quantified("a"),
        Detail::holding("club").quantified("a"),
        Detail::holding("lance").quantified("a"),
        Detail::holding("whip").quantified("a"),
        Detail::holding("glaive").quantified("a"),
    ]
}

fn with_tail() -> Detail {
    Detail::with("tail").quantified("a")
}

fn crystal_core() -> Detail {
    Detail::with("crystal core").quantified("a")
}

/// A furred/hooved creature: its own traits plus every wearable.
fn beast(name: &str, traits: impl IntoIterator<Item = Detail>) -> Archetype {
    Archetype::new(name).with_details(traits).with_details(wearables())
}

/// A creature with hands: traits, wearables, and holdable weapons.
fn wielder(name: &str, traits: impl IntoIterator<Item = Detail>) -> Archetype {
    beast(name, traits).with_details(weapons())
}

fn lizard_details() -> Vec<Detail> {
    let mut details = vec![with_tail(), Detail::with("scales")];
    details.extend(wearables());
    details.extend(weapons());
    details
}

fn no_hand_reptile_details() -> Vec<Detail> {
    let mut details = vec![with_tail(), Detail::with("scales")];
    details.extend(wearables());
    details
}

fn bird_details() -> Vec<Detail> {
    let mut details = vec![
        with_tail(),
        Detail::with("feathers"),
        Detail::with("beak").quantified("a"),
    ];
    details.extend(wearables());
    details
}

fn land_mammals() -> Vec<Archetype> {
    vec![
        beast("wolf", [with_tail(), Detail::with("claws"), Detail::with("fur")]),
        beast("bear", [Detail::with("claws"), Detail::with("fur")]),
        wielder("monkey", [with_tail(), Detail::with("fur")]),
        wielder("gorilla", [with_tail(), Detail::with("fur")]),
        beast("bull", [Detail::with("horns"), Detail::with("hooves"), Detail::with("skin")]),
        beast("bison", [Detail::with("horns"), Detail::with("hooves"), Detail::with("skin")]),
        beast("elephant", [Detail::with("hooves"), Detail::with("tusks"), Detail::with("skin")]),
        beast("boar", [Detail::with("hooves"), Detail::with("tusks"), Detail::with("skin")]),
        beast("tiger", [Detail::with("claws"), Detail::with("fur")]),
        beast("lynx", [Detail::with("claws"), Detail::with("fur")]),
        beast("lion", [Detail::with("claws"), Detail::with("fur")]),
        wielder("rabbit", [Detail::with("fur")]),
        beast("fox", [with_tail(), Detail::with("fur")]),
        beast("deer", [Detail::with("hooves"), Detail::with("antlers")]),
        beast("ibex", [Detail::with("hooves"), Detail::with("antlers")]),
        beast("goat", [Detail::with("hooves"), Detail::with("antlers")]),
        beast("horse", [Detail::with("hooves")]),
        beast("cat", [Detail::with("claws"), Detail::with("fur")]),
    ]
}

fn marine_creatures() -> Vec<Archetype> {
    vec![
        beast("reptile", [with_tail(), Detail::with("skin")]),
        Archetype::new("clam").with_details([Detail::with("shell"), crystal_core()]),
        wielder("penguin", [with_tail(), Detail::with("fur")]),
        Archetype::new("shark").with_details([
            with_tail(),
            Detail::with("fins"),
            Detail::wearing("armor"),
        ]),
        Archetype::new("squid").with_details([crystal_core(), Detail::with("tentacles")]),
        Archetype::new("crustacean").with_details([
            Detail::with("claws"),
            Detail::with("shell"),
            Detail::wearing("armor"),
            crystal_core(),
            Detail::with("carapace"),
        ]),
        beast("tortoise", [with_tail(), Detail::with("shell"), Detail::with("carapace")]),
        beast("sea-horse", [with_tail(), Detail::with("shell")]),
        Archetype::new("fish").with_details([
            with_tail(),
            Detail::with("scales"),
            Detail::wearing("armor"),
        ]),
        Archetype::new("octopus")
            .with_details([Detail::with("tentacles"), Detail::wearing("armor")]),
        Archetype::new("serpent").with_details(no_hand_reptile_details()),
        Archetype::new("crocodile").with_details(no_hand_reptile_details()),
        Archetype::new("swan").with_details(bird_details()),
    ]
}

fn birds() -> Vec<Archetype> {
    ["bird", "parrot", "owl", "eagle", "hawk", "falcon", "crow", "ostrich", "swan"]
        .into_iter()
        .map(|name| Archetype::new(name).with_details(bird_details()))
        .collect()
}

fn reptiles() -> Vec<Archetype> {
    vec![
        Archetype::new("dragon")
            .with_details(lizard_details())
            .with_details([crystal_core()]),
        Archetype::new("lizard").with_details(lizard_details()),
        Archetype::new("chameleon").with_details(lizard_details()),
        Archetype::new("frilled-lizard").with_details(no_hand_reptile_details()),
        Archetype::new("serpent").with_details(no_hand_reptile_details()),
        Archetype::new("gecko").with_details(lizard_details()),
    ]
}

fn insects() -> Vec<Archetype> {
    ["mantis", "beetle", "ladybug", "dragonfly", "spider"]
        .into_iter()
        .map(|name| Archetype::new(name).with_details([crystal_core(), Detail::with("wings")]))
        .collect()
}

fn joined(groups: &[Vec<Archetype>]) -> Vec<Archetype> {
    groups.iter().flatten().cloned().collect()
}

/// Build the classic theme.
#[must_use]
pub fn classic_theme() -> Theme {
    let catalog = Catalog::new()
        .with_archetypes(neutral(), joined(&[birds(), land_mammals()]))
        .with_archetypes(fire(), joined(&[land_mammals(), reptiles()]))
        .with_archetypes(water(), joined(&[marine_creatures(), reptiles()]))
        .with_archetypes(grass(), joined(&[insects(), reptiles(), land_mammals()]))
        .with_archetypes(electric(), joined(&[land_mammals(), reptiles(), birds()]))
        .with_archetypes(psychic(), joined(&[insects(), land_mammals(), reptiles(), birds()]))
        .with_environments(neutral(), ["village", "field", "grassland"])
        .with_environments(fire(), ["volcano", "desert"])
        .with_environments(water(), ["ocean", "lake", "river"])
        .with_environments(grass(), ["forest", "jungle", "woods"])
        .with_environments(electric(), ["mountain", "city", "thunderstorm"])
        .with_environments(psychic(), ["castle", "cave", "crypt"])
        .with_ambience(
            neutral(),
            [
                "pastel colors",
                "bright lighting",
                "soft ambient light",
                "faded prismatic bokeh background",
                "silver galaxy background",
            ],
        )
        .with_ambience(
            fire(),
            [
                "red and purple ambient lighting",
                "blue and red ambient lighting",
                "lava texture background",
                "orange galaxy background",
            ],
        )
        .with_ambience(
            water(),
            [
                "teal and blue ambient lighting",
                "aurora background",
                "sparkling blue background",
                "gleaming bubble background",
                "sapphire blue galaxy background",
            ],
        )
        .with_ambience(
            grass(),
            [
                "green and orange ambient lighting",
                "green and teal ambient lighting",
                "emerald bokeh lighting",
                "sunlight ray ambience",
                "emerald galaxy background",
            ],
        )
        .with_ambience(
            electric(),
            [
                "yellow and teal ambient lighting",
                "lightning background",
                "orange galaxy background",
            ],
        )
        .with_ambience(
            psychic(),
            [
                "pink bokeh lighting",
                "violet shadows",
                "dreamy background",
                "galaxy background",
            ],
        )
        .with_global_detail_adjectives(["white", "dark", "golden", "regal", "ornate", "ancient"])
        .with_detail_adjectives(neutral(), ["white", "shiny", "prismatic", "opal", "diamond"])
        .with_detail_adjectives(fire(), ["red and white", "orange and black", "fiery", "ruby"])
        .with_detail_adjectives(
            water(),
            [
                "blue and white",
                "white and black",
                "teal and navy",
                "blue crystal",
                "cyan glittering",
                "sapphire",
            ],
        )
        .with_detail_adjectives(
            grass(),
            ["green and brown", "white and green", "stone", "wooden", "leafy", "green runic"],
        )
        .with_detail_adjectives(
            electric(),
            ["yellow and teal", "yellow and black", "golden", "lightning-charged"],
        )
        .with_detail_adjectives(
            psychic(),
            ["amethyst", "purple cosmic", "galaxy-pattern", "violet hypnotic"],
        );

    Theme::new("classic")
        .with_style(Style::theme_base("monster", "--niji"))
        .with_elements([neutral(), fire(), water(), grass(), electric(), psychic()])
        .with_rarities([
            Rarity::new("common", 0),
            Rarity::new("uncommon", 1),
            Rarity::new("rare", 2),
        ])
        .with_catalog(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_is_default_element() {
        let theme = classic_theme();
        assert_eq!(theme.default_element().name, "Neutral");
        assert!(theme.default_element().is_neutral);
        assert_eq!(theme.elements.len(), 6);
    }

    #[test]
    fn test_rarity_ladder() {
        let theme = classic_theme();
        assert_eq!(theme.rarities.len(), 3);
        assert_eq!(theme.rarity_by_name("common").unwrap().index, 0);
        assert_eq!(theme.rarity_by_name("rare").unwrap().index, 2);
    }

    #[test]
    fn test_every_element_has_content() {
        let theme = classic_theme();
        for element in &theme.elements {
            assert!(
                !theme.catalog.archetypes(element).is_empty(),
                "{} has no archetypes",
                element.name
            );
            assert!(
                !theme.catalog.environments(element).is_empty(),
                "{} has no environments",
                element.name
            );
            // At least one open entry plus the reserved final-form entry.
            assert!(
                theme.catalog.ambience(element).len() >= 2,
                "{} ambience too short",
                element.name
            );
        }
    }

    #[test]
    fn test_every_archetype_has_details() {
        let theme = classic_theme();
        for element in &theme.elements {
            for archetype in theme.catalog.archetypes(element) {
                assert!(!archetype.details.is_empty(), "{} has no details", archetype.name);
            }
        }
    }

    #[test]
    fn test_water_deduplicates_serpent() {
        let theme = classic_theme();
        let water = theme.element_by_name("water").unwrap();
        let serpents = theme
            .catalog
            .archetypes(water)
            .iter()
            .filter(|a| a.name == "serpent")
            .count();
        assert_eq!(serpents, 1);
    }

    #[test]
    fn test_known_subjects_resolve() {
        let theme = classic_theme();
        assert_eq!(theme.catalog.resolve_subject("dragon").name, "dragon");
        assert_eq!(theme.catalog.resolve_subject("Wolf").name, "wolf");
    }
}
