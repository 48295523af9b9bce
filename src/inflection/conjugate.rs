use arrayvec::ArrayVec;

use crate::inflection::suffixes::{self, are_present};
use crate::inflection::{future_stem, present_stem, ConjugationTable, SimpleTense, Verb, VerbClass};
use crate::Error;

/// The generated forms of a single tense.
pub type Forms = ArrayVec<String, 6>;

fn join<const N: usize>(stem: &str, endings: &[&str; N]) -> Forms {
    endings
        .iter()
        .map(|suffix| format!("{stem}{suffix}"))
        .collect()
}

/// Present tense, applying the -are spelling adjustment.
pub fn present(class: VerbClass, stem: &str) -> Forms {
    let table = suffixes::table(class);

    match class {
        VerbClass::Are => table
            .present
            .iter()
            .map(|suffix| are_present(stem, suffix))
            .collect(),
        VerbClass::Ere | VerbClass::Ire | VerbClass::IreIsc | VerbClass::Rre => {
            join(stem, &table.present)
        }
    }
}

/// Imperfect tense.
pub fn imperfect(class: VerbClass, stem: &str) -> Forms {
    join(stem, &suffixes::table(class).imperfect)
}

/// Passato remoto.
pub fn passato_remoto(class: VerbClass, stem: &str) -> Forms {
    join(stem, &suffixes::table(class).passato_remoto)
}

/// Future tense, built on the future stem.
pub fn future(stem: &str) -> Forms {
    join(stem, &suffixes::FUTURE)
}

/// Conditional, built on the future stem.
pub fn conditional(stem: &str) -> Forms {
    join(stem, &suffixes::CONDITIONAL)
}

/// The single gerund form.
pub fn gerund(class: VerbClass, stem: &str) -> Forms {
    join(stem, &[suffixes::table(class).gerund])
}

/// The four forms of the past participle.
pub fn participle(class: VerbClass, stem: &str) -> Forms {
    let base = format!("{stem}{}", suffixes::table(class).participle);
    join(&base, &suffixes::PARTICIPLE)
}

/// Prefix each person of a finite tense with its reflexive pronoun.
///
/// # Panics
///
/// Panics unless given exactly six forms.
pub fn reflex(forms: Forms) -> Forms {
    assert_eq!(
        forms.len(),
        6,
        "Reflexive pronouns only apply to finite tenses, got {forms:?}"
    );

    suffixes::REFLEXIVE_PRONOUNS
        .iter()
        .zip(forms)
        .map(|(pronoun, form)| format!("{pronoun} {form}"))
        .collect()
}

/// Conjugate an infinitive as a regular verb.
pub fn conjugate(infinitive: &str) -> Result<ConjugationTable, Error> {
    let verb = Verb::parse(infinitive)?;
    let stem = present_stem(infinitive)?;
    let future_stem = future_stem(infinitive, verb.class)?;

    let finite = |forms: Forms| {
        if verb.reflexive {
            reflex(forms)
        } else {
            forms
        }
    };

    let mut gerund_forms = gerund(verb.class, &stem);

    if verb.reflexive {
        for form in &mut gerund_forms {
            form.push_str("si");
        }
    }

    let mut table = ConjugationTable::new();
    table.insert(SimpleTense::Present, finite(present(verb.class, &stem)));
    table.insert(SimpleTense::Imperfect, finite(imperfect(verb.class, &stem)));
    table.insert(
        SimpleTense::PassatoRemoto,
        finite(passato_remoto(verb.class, &stem)),
    );
    table.insert(SimpleTense::Future, finite(future(&future_stem)));
    table.insert(SimpleTense::Conditional, finite(conditional(&future_stem)));
    table.insert(SimpleTense::Gerund, gerund_forms);
    table.insert(SimpleTense::Participle, participle(verb.class, &stem));

    tracing::trace!(infinitive, class = ?verb.class, reflexive = verb.reflexive, "conjugated");
    Ok(table)
}
