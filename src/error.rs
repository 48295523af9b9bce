use thiserror::Error;

use crate::inflection::SimpleTense;

/// An error raised while conjugating verbs or merging irregular forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The infinitive does not end in any recognized verb ending.
    #[error("Can't find verb class of `{0}`")]
    UnrecognizedInfinitive(Box<str>),
    /// An irregular forms row names a tense which doesn't exist.
    #[error("Unknown tense `{0}`")]
    UnknownTense(Box<str>),
    /// A tense ended up with the wrong number of forms.
    #[error("Expected {expected} forms for {tense} of `{infinitive}` but got {actual}")]
    ArityMismatch {
        infinitive: Box<str>,
        tense: SimpleTense,
        expected: usize,
        actual: usize,
    },
    /// An irregular forms row which isn't `infinitive,TENSE,form/form/..`.
    #[error("Malformed irregular forms row `{0}`")]
    MalformedOverride(Box<str>),
}
