use std::borrow::Cow;

use crate::inflection::{non_reflexive, VerbClass};
use crate::Error;

/// Endings stripped as-is to get the present stem, in order of precedence.
static PLAIN_ENDINGS: [&str; 7] = ["arsi", "ersi", "irsi", "are", "ere", "ire", "rre"];

/// Get the stem used by the present, imperfect, passato remoto, gerund and
/// participle.
///
/// Contracted reflexive verbs get their irregular stem, so `porsi` gives
/// `pong` and `ridursi` gives `riduc`.
pub fn present_stem(infinitive: &str) -> Result<Cow<'_, str>, Error> {
    if let Some(base) = infinitive.strip_suffix("porsi") {
        return Ok(Cow::Owned(format!("{base}pong")));
    }

    if let Some(base) = infinitive.strip_suffix("dursi") {
        return Ok(Cow::Owned(format!("{base}duc")));
    }

    for ending in PLAIN_ENDINGS {
        if let Some(stem) = infinitive.strip_suffix(ending) {
            return Ok(Cow::Borrowed(stem));
        }
    }

    Err(Error::UnrecognizedInfinitive(infinitive.into()))
}

/// Get the stem used by the future and the conditional.
///
/// This is derived from the non-reflexive infinitive, `-are` verbs turn into
/// `-er` (`parlare` gives `parler`) while the rest drop their final vowel
/// (`finire` gives `finir`).
pub fn future_stem(infinitive: &str, class: VerbClass) -> Result<String, Error> {
    let base = non_reflexive(infinitive);

    let stem = match class {
        VerbClass::Are => base.strip_suffix("are").map(|stem| format!("{stem}er")),
        VerbClass::Ere | VerbClass::Ire | VerbClass::IreIsc | VerbClass::Rre => {
            base.strip_suffix('e').map(str::to_owned)
        }
    };

    stem.ok_or_else(|| Error::UnrecognizedInfinitive(infinitive.into()))
}
