use crate::inflection::VerbClass;

/// Suffixes which attach to the present stem of a verb class.
#[derive(Debug, Clone, Copy)]
pub(super) struct Suffixes {
    pub(super) present: [&'static str; 6],
    pub(super) imperfect: [&'static str; 6],
    pub(super) passato_remoto: [&'static str; 6],
    pub(super) gerund: &'static str,
    pub(super) participle: &'static str,
}

/// The -are table.
pub(super) static ARE: &Suffixes = &Suffixes {
    present: ["o", "i", "a", "iamo", "ate", "ano"],
    imperfect: ["avo", "avi", "ava", "avamo", "avate", "avano"],
    passato_remoto: ["ai", "asti", "ò", "ammo", "aste", "arono"],
    gerund: "ando",
    participle: "at",
};

/// The -ere table, also used by contracted -rre verbs.
///
/// Only the `-etti` passato remoto is produced, the `-ei / -é / -erono`
/// variant is not generated.
pub(super) static ERE: &Suffixes = &Suffixes {
    present: ["o", "i", "e", "iamo", "ete", "ono"],
    imperfect: ["evo", "evi", "eva", "evamo", "evate", "evano"],
    passato_remoto: ["etti", "esti", "ette", "emmo", "este", "ettero"],
    gerund: "endo",
    participle: "ut",
};

/// The -ire table.
pub(super) static IRE: &Suffixes = &Suffixes {
    present: ["o", "i", "e", "iamo", "ite", "ono"],
    imperfect: ["ivo", "ivi", "iva", "ivamo", "ivate", "ivano"],
    passato_remoto: ["ii", "isti", "ì", "immo", "iste", "irono"],
    gerund: "endo",
    participle: "it",
};

/// The -ire table with the -isc- infix.
pub(super) static IRE_ISC: &Suffixes = &Suffixes {
    present: ["isco", "isci", "isce", "iamo", "ite", "iscono"],
    imperfect: ["ivo", "ivi", "iva", "ivamo", "ivate", "ivano"],
    passato_remoto: ["ii", "isti", "ì", "immo", "iste", "irono"],
    gerund: "endo",
    participle: "it",
};

/// Future suffixes, shared by every class.
pub(super) static FUTURE: [&str; 6] = ["ò", "ai", "à", "emo", "ete", "anno"];

/// Conditional suffixes, shared by every class.
pub(super) static CONDITIONAL: [&str; 6] = ["ei", "esti", "ebbe", "emmo", "este", "ebbero"];

/// Gender and number endings of the participle.
pub(super) static PARTICIPLE: [&str; 4] = ["o", "a", "i", "e"];

/// Reflexive pronouns by person.
pub(super) static REFLEXIVE_PRONOUNS: [&str; 6] = ["mi", "ti", "si", "ci", "vi", "si"];

/// Get the suffix table of a class.
pub(super) fn table(class: VerbClass) -> &'static Suffixes {
    match class {
        VerbClass::Are => ARE,
        VerbClass::Ere | VerbClass::Rre => ERE,
        VerbClass::Ire => IRE,
        VerbClass::IreIsc => IRE_ISC,
    }
}

/// Attach a present suffix to an -are stem.
///
/// Before a front vowel a hard `c` / `g` gets an `h` (`cerc` + `i` is
/// `cerchi`), and a stem ending in `ci`, `gi` or `gli` loses its `i`
/// (`mangi` + `iamo` is `mangiamo`).
pub(super) fn are_present(stem: &str, suffix: &str) -> String {
    if suffix.starts_with(['i', 'e']) {
        if stem.ends_with(['c', 'g']) {
            return format!("{stem}h{suffix}");
        }

        if ["ci", "gi", "gli"].iter().any(|end| stem.ends_with(end)) {
            let stem = &stem[..stem.len() - 1];
            return format!("{stem}{suffix}");
        }
    }

    format!("{stem}{suffix}")
}
