//! Regular conjugation of Italian verbs.
//!
//! An infinitive is classified by its ending, split into a present and a
//! future stem, and combined with the suffix table of its class to produce
//! every simple tense. Irregular forms are layered on top of this by
//! [`crate::irregular`].

mod classify;
mod conjugate;
mod stem;
mod suffixes;

#[cfg(test)]
mod tests;

pub use self::classify::{classify, is_reflexive, non_reflexive, Verb};
pub use self::conjugate::{
    conditional, conjugate, future, gerund, imperfect, participle, passato_remoto, present, reflex,
    Forms,
};
pub use self::stem::{future_stem, present_stem};

use std::fmt;

use fixed_map::{Key, Map};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::Error;

/// The morphological class of a verb, which decides its suffix table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbClass {
    /// `-are` verbs, like `parlare`.
    Are,
    /// `-ere` verbs, like `credere`.
    Ere,
    /// `-ire` verbs without the `-isc-` infix, like `dormire`.
    Ire,
    /// `-ire` verbs with the `-isc-` infix, like `finire`.
    IreIsc,
    /// Contracted `-rre` verbs, like `condurre` or `porre`.
    Rre,
}

macro_rules! tense {
    ($vis:vis enum $name:ident { $({$variant:ident, $ident:literal, $arity:literal, $title:literal}),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Key)]
        $vis enum $name {
            $($variant,)*
        }

        impl $name {
            /// Every simple tense, in serialization order.
            $vis const ALL: &'static [$name] = &[
                $($name::$variant,)*
            ];

            /// Lowercase identifier used in dictionary records.
            $vis fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $ident,)*
                }
            }

            /// Number of forms a complete tense consists of.
            $vis fn arity(&self) -> usize {
                match self {
                    $($name::$variant => $arity,)*
                }
            }

            /// Human readable title.
            $vis fn title(&self) -> &'static str {
                match self {
                    $($name::$variant => $title,)*
                }
            }

            /// Parse a tense name, ignoring case.
            $vis fn parse(string: &str) -> Option<$name> {
                $(
                    if string.eq_ignore_ascii_case($ident) {
                        return Some($name::$variant);
                    }
                )*

                None
            }
        }
    }
}

tense! {
    pub enum SimpleTense {
        {Present, "present", 6, "presente / present"},
        {Imperfect, "imperfect", 6, "imperfetto / imperfect"},
        {PassatoRemoto, "passato_remoto", 6, "passato remoto / simple past"},
        {Future, "future", 6, "futuro semplice / future"},
        {Conditional, "conditional", 6, "condizionale / conditional"},
        {Gerund, "gerund", 1, "gerundio / gerund"},
        {Participle, "participle", 4, "participio passato / past participle"},
    }
}

impl fmt::Display for SimpleTense {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

/// The forms of every simple tense of a single verb.
///
/// Finite tenses are ordered `1sg, 2sg, 3sg, 1pl, 2pl, 3pl`, the participle
/// `m.sg, f.sg, m.pl, f.pl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjugationTable {
    tenses: Map<SimpleTense, Vec<String>>,
}

impl Default for ConjugationTable {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ConjugationTable {
    /// Construct an empty table.
    pub fn new() -> Self {
        Self { tenses: Map::new() }
    }

    /// Replace the forms of a tense, returning whatever was there before.
    pub fn insert<I>(&mut self, tense: SimpleTense, forms: I) -> Option<Vec<String>>
    where
        I: IntoIterator<Item = String>,
    {
        self.tenses.insert(tense, forms.into_iter().collect())
    }

    /// Get the forms of a tense.
    pub fn get(&self, tense: SimpleTense) -> Option<&[String]> {
        Some(self.tenses.get(tense)?.as_slice())
    }

    /// Number of tenses present.
    pub fn len(&self) -> usize {
        self.tenses.len()
    }

    /// Test if the table has no tenses.
    pub fn is_empty(&self) -> bool {
        self.tenses.is_empty()
    }

    /// Iterate over tenses in [`SimpleTense::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (SimpleTense, &[String])> + '_ {
        self.tenses
            .iter()
            .map(|(tense, forms)| (tense, forms.as_slice()))
    }

    /// Check that every tense present has the expected number of forms.
    pub fn validate(&self, infinitive: &str) -> Result<(), Error> {
        for (tense, forms) in self.iter() {
            if forms.len() != tense.arity() {
                return Err(Error::ArityMismatch {
                    infinitive: infinitive.into(),
                    tense,
                    expected: tense.arity(),
                    actual: forms.len(),
                });
            }
        }

        Ok(())
    }
}

/// Serialized as `{"present": "parlo/parli/..", ..}`.
impl Serialize for ConjugationTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.tenses.len()))?;

        for (tense, forms) in self.iter() {
            map.serialize_entry(tense.name(), &forms.join("/"))?;
        }

        map.end()
    }
}
