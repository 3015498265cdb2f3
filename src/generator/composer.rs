//! Style composer.
//!
//! Builds (or continues) a card's visual/narrative style: subject and
//! physical detail drawn from the catalog with collection-wide
//! de-duplication, environment, ambience, and the adjective stack keyed by
//! rarity and series position. Series members after the first inherit the
//! subject, detail and environment of the first card so the series reads
//! as one evolving creature.

use rustc_hash::FxHashSet;

use crate::content::{Archetype, Style, Theme};
use crate::core::GenRng;
use crate::mechanics::{Element, Rarity};

/// Adjectives for a rarity tier.
#[must_use]
pub fn rarity_adjectives(rarity_index: usize) -> &'static [&'static str] {
    match rarity_index {
        0 => &["simple", "basic"],
        1 => &["strong", "rare", "special"],
        2 => &["legendary", "epic", "mythical"],
        _ => &[""],
    }
}

/// Adjectives for a 1-based series position.
#[must_use]
pub fn series_adjectives(series_position: usize) -> &'static [&'static str] {
    match series_position {
        1 => &["chibi cute", "chibi young"],
        2 => &["young", "", "dynamic"],
        3 => &["gigantic", "massive"],
        _ => &[""],
    }
}

/// Art-phase suffix for a series position.
///
/// Early series cards render as sketches, the final card as finished art.
#[must_use]
pub fn phase_suffix(series_position: Option<usize>) -> &'static str {
    match series_position {
        Some(1) => "anime chibi drawing style, pastel background",
        Some(2) => "anime sketch with watercolor",
        Some(3) => "polished final by studio ghibli",
        _ => "anime sketch",
    }
}

/// Inputs for composing one card's style.
#[derive(Clone, Copy, Debug)]
pub struct ComposeRequest<'a> {
    /// First card's style when continuing a series.
    pub inherited: Option<&'a Style>,

    /// The card's element.
    pub element: &'a Element,

    /// The card's rarity.
    pub rarity: &'a Rarity,

    /// 1-based position within a multi-card series; `None` for standalone.
    pub series_position: Option<usize>,

    /// Explicit subject request, resolved against the catalog.
    pub subject_override: Option<&'a str>,
}

/// Compose a card style.
///
/// `subjects_seen` is the collection's de-duplication set; chosen subject
/// names and detail texts are recorded into it so later cards prefer fresh
/// content. All fallbacks widen the candidate pool instead of failing.
pub fn compose_style(
    theme: &Theme,
    request: &ComposeRequest<'_>,
    subjects_seen: &mut FxHashSet<String>,
    rng: &mut GenRng,
) -> Style {
    let mut style = Style {
        subject_type: theme.style.subject_type.clone(),
        style_prefix: theme.style.style_prefix.clone(),
        style_suffix: theme.style.style_suffix.clone(),
        ..Style::default()
    };

    if let Some(inherited) = request.inherited {
        // Value copy, not aliasing: later mutation of this style must not
        // touch the first card.
        style.subject = inherited.subject.clone();
        style.detail = inherited.detail.clone();
        style.detail_adjective = inherited.detail_adjective.clone();
        style.environment = inherited.environment.clone();
    } else {
        let archetype = choose_archetype(theme, request, subjects_seen, rng);
        style.subject = Some(archetype.name.clone());

        if let Some((detail_text, adjective)) =
            choose_detail(theme, &archetype, request.element, subjects_seen, rng)
        {
            style.detail = Some(detail_text);
            style.detail_adjective = Some(adjective);
        }

        style.environment = rng.pick(theme.catalog.environments(request.element)).cloned();
    }

    style.subject_adjectives = subject_adjectives(theme, request, rng);
    style.ambience = choose_ambience(theme, request, rng);
    style.style_suffix = format!(
        "{} {}",
        phase_suffix(request.series_position),
        theme.style.style_suffix
    );

    style
}

/// Pick the card's subject archetype.
///
/// An override resolves against the catalog (never fails); otherwise a
/// uniform draw over the element's archetypes, preferring ones not yet in
/// `subjects_seen` and widening to the full list once exhausted.
fn choose_archetype(
    theme: &Theme,
    request: &ComposeRequest<'_>,
    subjects_seen: &mut FxHashSet<String>,
    rng: &mut GenRng,
) -> Archetype {
    if let Some(subject_override) = request.subject_override {
        return theme.catalog.resolve_subject(subject_override);
    }

    let pool = theme.catalog.archetypes(request.element);
    assert!(
        !pool.is_empty(),
        "theme has no archetypes for element {}",
        request.element.name
    );

    let fresh: Vec<&Archetype> = pool
        .iter()
        .filter(|a| !subjects_seen.contains(&a.name))
        .collect();
    let candidates: Vec<&Archetype> = if fresh.is_empty() {
        pool.iter().collect()
    } else {
        fresh
    };

    let chosen = (*rng
        .pick(&candidates)
        .expect("candidate pool is never empty"))
    .clone();
    subjects_seen.insert(chosen.name.clone());
    chosen
}

/// Pick a physical detail and fold in a detail adjective.
///
/// Returns `None` when the archetype carries no details. The bare detail
/// text (without the adjective) is what gets de-duplicated.
fn choose_detail(
    theme: &Theme,
    archetype: &Archetype,
    element: &Element,
    subjects_seen: &mut FxHashSet<String>,
    rng: &mut GenRng,
) -> Option<(String, String)> {
    if archetype.details.is_empty() {
        return None;
    }

    let fresh: Vec<_> = archetype
        .details
        .iter()
        .filter(|d| !subjects_seen.contains(&d.text(None)))
        .collect();
    let candidates: Vec<_> = if fresh.is_empty() {
        archetype.details.iter().collect()
    } else {
        fresh
    };

    let detail = *rng.pick(&candidates).expect("candidate pool is never empty");
    subjects_seen.insert(detail.text(None));

    let adjective_pool = theme.catalog.detail_adjective_pool(element);
    let adjective = rng.pick(&adjective_pool).cloned().unwrap_or_default();

    if adjective.is_empty() {
        Some((detail.text(None), adjective))
    } else {
        Some((detail.text(Some(&adjective)), adjective))
    }
}

/// Build the ordered adjective stack for the subject clause.
fn subject_adjectives(theme: &Theme, request: &ComposeRequest<'_>, rng: &mut GenRng) -> Vec<String> {
    let rarity_adjective = rng
        .pick(rarity_adjectives(request.rarity.index))
        .copied()
        .unwrap_or_default()
        .to_string();

    // No draw for standalone cards; the stream only moves when the series
    // adjective can be used.
    let size_adjective = match request.series_position {
        Some(position) => {
            let series_adjective = rng
                .pick(series_adjectives(position))
                .copied()
                .unwrap_or_default()
                .to_string();
            if request.rarity.index >= 2 {
                format!("{series_adjective} {rarity_adjective}")
            } else {
                series_adjective
            }
        }
        None => rarity_adjective,
    };

    let element_adjective = format!("{}-type", request.element.name.to_lowercase());

    let mut adjectives = theme.style.subject_adjectives.clone();
    adjectives.push(size_adjective);
    adjectives.push(element_adjective);
    adjectives
}

/// Pick the ambience phrase.
///
/// The last catalog entry is reserved for the final card of a 3-card
/// series at rarity 2 or above; everyone else draws from the rest.
fn choose_ambience(theme: &Theme, request: &ComposeRequest<'_>, rng: &mut GenRng) -> Option<String> {
    let ambience = theme.catalog.ambience(request.element);
    if ambience.is_empty() {
        return None;
    }

    let is_final_form = request.rarity.index >= 2 && request.series_position == Some(3);
    if is_final_form {
        ambience.last().cloned()
    } else {
        // A one-entry list has nothing to reserve; widen to the full list.
        let open = if ambience.len() > 1 {
            &ambience[..ambience.len() - 1]
        } else {
            ambience
        };
        rng.pick(open).cloned()
    }
}
