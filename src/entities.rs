use std::fmt;

use serde::Serialize;

macro_rules! entity {
    (
        $test:ident,

        $(#[$($meta:meta)*])*
        $vis:vis enum $name:ident {
            $(<$variant:ident $entity:literal $doc:literal>)*
        }
    ) => {
        $(#[$($meta)*])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        $vis enum $name {
            $(
                #[doc = $doc]
                #[serde(rename = $entity)]
                $variant,
            )*
        }

        impl $name {
            $vis const VALUES: &'static [$name] = &[
                $($name::$variant,)*
            ];

            /// The keyword used in input files and records.
            $vis fn ident(&self) -> &'static str {
                match self {
                    $($name::$variant => $entity,)*
                }
            }

            /// Help text.
            $vis fn help(&self) -> &'static str {
                match self {
                    $($name::$variant => $doc,)*
                }
            }

            /// Parse a keyword.
            $vis fn parse_keyword(string: &str) -> Option<$name> {
                match string {
                    $($entity => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        #[test]
        fn $test() {
            $(
                assert_eq!($name::parse_keyword($entity), Some($name::$variant), "Failed to parse `{}`", $entity);
            )*
        }
    }
}

entity! {
    test_part_of_speech,

    /// Part of speech of a dictionary entry.
    ///
    /// Declared in keyword order, so sorting by variant sorts by keyword.
    pub enum PartOfSpeech {
        <Adjective "adj" "adjective">
        <Adverb "adv" "adverb">
        <Article "art" "article">
        <Conjunction "conj" "conjunction">
        <Interjection "int" "interjection">
        <Noun "n" "noun">
        <Other "other" "other">
        <Particle "particle" "particle">
        <Preposition "prep" "preposition">
        <ArticulatedPreposition "prep art" "articulated preposition, like `della`">
        <Pronoun "pron" "pronoun">
        <Unknown "unknown" "unknown">
        <Verb "v" "verb">
    }
}

impl fmt::Display for PartOfSpeech {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ident().fmt(f)
    }
}
