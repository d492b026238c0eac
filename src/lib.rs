#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod naming;
pub mod store;

pub use config::Config;
pub use error::{NameplateError, Result};
pub use naming::{NameEngine, NameStyle, PreferenceRecord, record_acceptance};
