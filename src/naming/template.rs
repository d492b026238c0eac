//! Template-based name composition — the dependency-free half of the
//! dual-strategy generator. No I/O, no provider, never fails; this is what
//! guarantees the caller always gets three names.

use super::lexicon;
use super::types::{GenerationContext, PreferenceRecord};
use rand::Rng;

/// How many favorite keywords the template styles draw from.
const FAVORITE_POOL: usize = 3;

/// Probability that style B swaps its suffix for a learned keyword.
const PLAYFUL_BIAS: f64 = 0.5;

/// Probability that style C becomes a keyword + noun pairing.
const DESCRIPTIVE_BIAS: f64 = 0.7;

fn random_from<'a, T>(rng: &mut impl Rng, pool: &'a [T]) -> &'a T {
    &pool[rng.random_range(0..pool.len())]
}

/// Produce exactly 3 stylistically distinct names, optionally biased by the
/// record's favorite keywords. Duplicates across the three are permitted.
pub fn generate(record: &PreferenceRecord, rng: &mut impl Rng) -> Vec<String> {
    let ctx = GenerationContext::from_record(record, FAVORITE_POOL);
    let mut names = Vec::with_capacity(3);

    // Style A ("elegant"): The {Adjective} {Noun}, never preference-biased.
    let adjective = random_from(rng, lexicon::ADJECTIVES);
    let noun = random_from(rng, lexicon::NOUNS);
    names.push(format!("The {adjective} {noun}"));

    // Style B ("playful"): {PlayfulPrefix} {Descriptor} {FoodType}, or a
    // learned keyword as the whole suffix on a fair coin.
    let playful = random_from(rng, lexicon::PLAYFUL_PREFIXES);
    let descriptor = random_from(rng, lexicon::DESCRIPTORS);
    let food = random_from(rng, lexicon::FOODS);
    if ctx.has_preferences && !ctx.favorite_keywords.is_empty() && rng.random_bool(PLAYFUL_BIAS) {
        let keyword = random_from(rng, &ctx.favorite_keywords);
        names.push(format!("{playful} {keyword}"));
    } else {
        names.push(format!("{playful} {descriptor} {food}"));
    }

    // Style C ("descriptive"): {Adjective} {Adjective} {FoodType} with two
    // distinct adjectives, or {Keyword} {Noun} once enough taste is known.
    let first_adjective = random_from(rng, lexicon::ADJECTIVES);
    let mut second_adjective = random_from(rng, lexicon::ADJECTIVES);
    while second_adjective == first_adjective {
        second_adjective = random_from(rng, lexicon::ADJECTIVES);
    }
    let second_food = random_from(rng, lexicon::FOODS);
    if ctx.favorite_keywords.len() >= 2 && rng.random_bool(DESCRIPTIVE_BIAS) {
        let keyword = random_from(rng, &ctx.favorite_keywords);
        let keyword_noun = random_from(rng, lexicon::NOUNS);
        names.push(format!("{keyword} {keyword_noun}"));
    } else {
        names.push(format!("{first_adjective} {second_adjective} {second_food}"));
    }

    names
}
