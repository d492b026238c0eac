pub mod engine;
pub mod learner;
pub mod lexicon;
pub mod template;
pub mod types;

pub use engine::{DESCRIBE_INSTRUCTION, NameEngine};
pub use learner::record_acceptance;
pub use types::{GenerationContext, NameStyle, PreferenceRecord};
