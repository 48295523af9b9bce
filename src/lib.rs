//! Italian to English dictionary builder.
//!
//! The heart of the crate is [`inflection`], which regularly conjugates
//! Italian verbs, and [`irregular`], which layers curated irregular forms on
//! top. The remaining modules turn annotated word lists into dictionary
//! records.

#[macro_use]
pub mod reporter;

mod error;
pub use self::error::Error;

pub mod inflection;
pub use self::inflection::{conjugate, ConjugationTable, SimpleTense, VerbClass};

pub mod irregular;
pub use self::irregular::{Conjugations, OverrideEntry};

mod entities;
pub use self::entities::PartOfSpeech;

pub mod config;
pub mod entries;
pub mod input;
pub mod pipeline;
pub mod record;
