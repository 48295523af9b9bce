use std::borrow::Cow;

use crate::inflection::VerbClass;
use crate::Error;

/// `-ire` verbs which do not take the `-isc-` infix. Must be kept sorted.
pub(super) static NON_ISC_IRE_VERBS: &[&str] = &[
    "acconsentire",
    "aprire",
    "assentire",
    "avvertire",
    "bollire",
    "convertire",
    "coprire",
    "cucire",
    "divertire",
    "dormire",
    "fuggire",
    "investire",
    "offrire",
    "partire",
    "pervertire",
    "rivestire",
    "scoprire",
    "seguire",
    "sentire",
    "servire",
    "soffrire",
    "sovvertire",
    "vestire",
];

/// Endings which mark a reflexive infinitive.
static REFLEXIVE_ENDINGS: [&str; 5] = ["arsi", "ersi", "irsi", "porsi", "dursi"];

fn is_non_isc(infinitive: &str) -> bool {
    NON_ISC_IRE_VERBS.binary_search(&infinitive).is_ok()
}

fn ire_class(infinitive: &str) -> VerbClass {
    if is_non_isc(infinitive) {
        VerbClass::Ire
    } else {
        VerbClass::IreIsc
    }
}

/// Determine the class of an infinitive from its ending.
///
/// Contracted reflexive endings are checked first, so `porsi` is an `-rre`
/// verb and not an `-ersi` one.
pub fn classify(infinitive: &str) -> Result<VerbClass, Error> {
    if infinitive.ends_with("porsi") || infinitive.ends_with("dursi") {
        return Ok(VerbClass::Rre);
    }

    if infinitive.ends_with("arsi") {
        return Ok(VerbClass::Are);
    }

    if infinitive.ends_with("ersi") {
        return Ok(VerbClass::Ere);
    }

    if let Some(base) = infinitive.strip_suffix("si") {
        if base.ends_with("ir") {
            return Ok(ire_class(&format!("{base}e")));
        }
    }

    if infinitive.ends_with("are") {
        return Ok(VerbClass::Are);
    }

    if infinitive.ends_with("ere") {
        return Ok(VerbClass::Ere);
    }

    if infinitive.ends_with("ire") {
        return Ok(ire_class(infinitive));
    }

    if infinitive.ends_with("rre") {
        return Ok(VerbClass::Rre);
    }

    Err(Error::UnrecognizedInfinitive(infinitive.into()))
}

/// Test if the infinitive is reflexive, like `lavarsi`.
pub fn is_reflexive(infinitive: &str) -> bool {
    REFLEXIVE_ENDINGS
        .iter()
        .any(|ending| infinitive.ends_with(ending))
}

/// Get the non-reflexive infinitive of a verb, `lavarsi` becomes `lavare`.
///
/// Infinitives which aren't reflexive are returned as-is.
pub fn non_reflexive(infinitive: &str) -> Cow<'_, str> {
    if let Some(base) = infinitive.strip_suffix("porsi") {
        return Cow::Owned(format!("{base}porre"));
    }

    if let Some(base) = infinitive.strip_suffix("dursi") {
        return Cow::Owned(format!("{base}durre"));
    }

    if is_reflexive(infinitive) {
        if let Some(base) = infinitive.strip_suffix("si") {
            return Cow::Owned(format!("{base}e"));
        }
    }

    Cow::Borrowed(infinitive)
}

/// A classified infinitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verb<'a> {
    /// The infinitive as given.
    pub infinitive: &'a str,
    /// The class of the verb.
    pub class: VerbClass,
    /// If the verb is reflexive.
    pub reflexive: bool,
}

impl<'a> Verb<'a> {
    /// Classify the given infinitive.
    pub fn parse(infinitive: &'a str) -> Result<Self, Error> {
        Ok(Self {
            infinitive,
            class: classify(infinitive)?,
            reflexive: is_reflexive(infinitive),
        })
    }
}
