//! Static word pools for template-based name composition.
//!
//! One pool per grammatical role. The template generator draws uniformly
//! from these and from nothing else, which is what keeps the fallback path
//! dependency-free.

pub const ADJECTIVES: &[&str] = &[
    "Golden",
    "Crimson",
    "Sunset",
    "Emerald",
    "Savory",
    "Spicy",
    "Delicate",
    "Rustic",
    "Garden",
    "Summer",
    "Winter",
    "Autumn",
    "Spring",
    "Roasted",
    "Grilled",
    "Sizzling",
    "Tender",
    "Crunchy",
    "Creamy",
    "Zesty",
    "Tangy",
    "Smoky",
    "Fragrant",
    "Aromatic",
    "Herb-Kissed",
    "Glazed",
    "Caramelized",
    "Pan-Seared",
    "Oven-Baked",
    "Slow-Cooked",
    "Charred",
    "Buttery",
];

pub const NOUNS: &[&str] = &[
    "Delight",
    "Symphony",
    "Medley",
    "Fusion",
    "Feast",
    "Creation",
    "Dream",
    "Harvest",
    "Melody",
    "Paradise",
    "Wonder",
    "Celebration",
    "Journey",
    "Adventure",
    "Masterpiece",
    "Treasure",
    "Magic",
    "Bliss",
    "Fantasy",
    "Rhapsody",
    "Serenade",
    "Enchantment",
    "Odyssey",
    "Harmony",
];

pub const DESCRIPTORS: &[&str] = &[
    "Weekend",
    "Sunday",
    "Saturday",
    "Evening",
    "Morning",
    "Midnight",
    "Homestyle",
    "Classic",
    "Traditional",
    "Modern",
    "Fusion",
    "Artisan",
    "Gourmet",
    "Comfort",
    "Elegant",
    "Simple",
    "Rustic",
    "Urban",
    "Countryside",
];

pub const FOODS: &[&str] = &[
    "Curry",
    "Stir-Fry",
    "Roast",
    "Pasta",
    "Rice Bowl",
    "Noodles",
    "Soup",
    "Salad",
    "Gratin",
    "Casserole",
    "Skillet",
    "Platter",
    "Bowl",
    "Plate",
    "Dish",
    "Feast",
    "Medley",
    "Mix",
    "Blend",
];

pub const PLAYFUL_PREFIXES: &[&str] = &[
    "The Happy",
    "The Lazy",
    "The Cozy",
    "The Merry",
    "The Jolly",
    "Love Letter to",
    "Ode to",
    "Symphony of",
    "Dance of",
    "Tales of",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_are_non_empty() {
        assert!(!ADJECTIVES.is_empty());
        assert!(!NOUNS.is_empty());
        assert!(!DESCRIPTORS.is_empty());
        assert!(!FOODS.is_empty());
        assert!(!PLAYFUL_PREFIXES.is_empty());
    }

    #[test]
    fn style_c_needs_at_least_two_adjectives() {
        // Distinct-adjective resampling would never terminate otherwise.
        assert!(ADJECTIVES.len() >= 2);
    }

    #[test]
    fn pool_entries_carry_no_stray_whitespace() {
        for pool in [ADJECTIVES, NOUNS, DESCRIPTORS, FOODS, PLAYFUL_PREFIXES] {
            for word in pool {
                assert_eq!(*word, word.trim());
                assert!(!word.is_empty());
            }
        }
    }
}
