//! Prompt rendering for the downstream image renderer.
//!
//! The image prompt format (clause order, `::N` weighting tokens, the
//! trailing aspect-ratio directive) is a compatibility surface consumed by
//! an external renderer and must be reproduced character for character.

use crate::mechanics::Card;

const ASPECT_RATIO: &str = " --ar 3:2";

/// The subject clause: `"a <adjectives> <subject> <subject_type>"`.
///
/// Empty adjectives can leave double spaces; the prompt cleanup pass
/// collapses them.
fn subject_clause(card: &Card) -> String {
    let mut parts = vec!["a".to_string()];
    parts.extend(card.style.subject_adjectives.iter().cloned());
    parts.push(card.style.subject.clone().unwrap_or_default());
    parts.push(card.style.subject_type.clone());
    parts.join(" ")
}

/// The detail clause, included only above rarity 0.
fn detail_clause(card: &Card) -> String {
    match &card.style.detail {
        Some(detail) if card.rarity.index > 0 => format!(", {detail}"),
        _ => String::new(),
    }
}

/// Render the full image prompt for a card.
///
/// Clause order: weighted name, weighted subject (+detail), environment,
/// ambience, style suffix, aspect ratio.
#[must_use]
pub fn image_prompt(card: &Card) -> String {
    let mut subject_line = subject_clause(card);

    if card.rarity.index == 1 {
        subject_line.push_str("::1.8");
    }
    if card.rarity.index >= 2 {
        subject_line.push_str("::2.5");
    }
    subject_line.push_str(&detail_clause(card));

    let mut segments = vec![subject_line];
    segments.push(format!(
        "in a {} environment",
        card.style.environment.as_deref().unwrap_or_default()
    ));
    segments.push(card.style.ambience.clone().unwrap_or_default());
    segments.push(card.style.style_suffix.clone());

    let mut message = segments.join(", ");
    message.push_str(ASPECT_RATIO);
    let message = message.replace("  ", " ").replace(" ,", ",");

    format!("{}::0 {}", card.name, message)
}

/// Render the prose visual description used by the naming collaborator.
#[must_use]
pub fn visual_description(card: &Card) -> String {
    let subject_line = format!("{}{}", subject_clause(card), detail_clause(card));
    format!(
        "{} It can be found in {}-like environments.",
        subject_line,
        card.style.environment.as_deref().unwrap_or_default()
    )
}
