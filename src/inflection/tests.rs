use super::classify::NON_ISC_IRE_VERBS;
use super::*;

macro_rules! forms {
    ($($form:literal),* $(,)?) => {
        &[$(String::from($form)),*][..]
    };
}

fn tense(infinitive: &str, tense: SimpleTense) -> Vec<String> {
    let table = conjugate(infinitive).unwrap();
    table.get(tense).unwrap().to_vec()
}

#[test]
fn non_isc_verbs_sorted() {
    let mut sorted = NON_ISC_IRE_VERBS.to_vec();
    sorted.sort();
    assert_eq!(sorted, NON_ISC_IRE_VERBS);
}

#[test]
fn classification() {
    assert_eq!(classify("parlare"), Ok(VerbClass::Are));
    assert_eq!(classify("credere"), Ok(VerbClass::Ere));
    assert_eq!(classify("dormire"), Ok(VerbClass::Ire));
    assert_eq!(classify("finire"), Ok(VerbClass::IreIsc));
    assert_eq!(classify("condurre"), Ok(VerbClass::Rre));
    assert_eq!(classify("lavarsi"), Ok(VerbClass::Are));
    assert_eq!(classify("mettersi"), Ok(VerbClass::Ere));
    assert_eq!(classify("divertirsi"), Ok(VerbClass::Ire));
    assert_eq!(classify("pentirsi"), Ok(VerbClass::IreIsc));
    assert_eq!(classify("porsi"), Ok(VerbClass::Rre));
    assert_eq!(classify("ridursi"), Ok(VerbClass::Rre));

    assert_eq!(
        classify("casa"),
        Err(Error::UnrecognizedInfinitive("casa".into()))
    );
    assert!(conjugate("").is_err());
}

#[test]
fn reflexivity() {
    for verb in ["lavarsi", "mettersi", "vestirsi", "proporsi", "condursi"] {
        assert!(is_reflexive(verb), "{verb}");
    }

    for verb in ["lavare", "mettere", "vestire", "proporre", "condurre"] {
        assert!(!is_reflexive(verb), "{verb}");
    }

    assert_eq!(non_reflexive("lavarsi"), "lavare");
    assert_eq!(non_reflexive("vestirsi"), "vestire");
    assert_eq!(non_reflexive("proporsi"), "proporre");
    assert_eq!(non_reflexive("ridursi"), "ridurre");
    assert_eq!(non_reflexive("parlare"), "parlare");
}

#[test]
fn reflexive_stem_matches_base() {
    for verb in ["lavarsi", "mangiarsi", "mettersi", "vestirsi", "pentirsi"] {
        let base = non_reflexive(verb);
        assert_eq!(
            present_stem(verb).unwrap(),
            present_stem(&base).unwrap(),
            "{verb}"
        );
        assert_eq!(classify(verb), classify(&base), "{verb}");
    }
}

#[test]
fn stems() {
    assert_eq!(present_stem("parlare").unwrap(), "parl");
    assert_eq!(present_stem("condurre").unwrap(), "condu");
    assert_eq!(present_stem("proporsi").unwrap(), "propong");
    assert_eq!(present_stem("ridursi").unwrap(), "riduc");

    assert_eq!(future_stem("parlare", VerbClass::Are).unwrap(), "parler");
    assert_eq!(future_stem("finire", VerbClass::IreIsc).unwrap(), "finir");
    assert_eq!(future_stem("lavarsi", VerbClass::Are).unwrap(), "laver");
    assert_eq!(future_stem("proporsi", VerbClass::Rre).unwrap(), "proporr");
}

#[test]
fn finire_present() {
    assert_eq!(
        tense("finire", SimpleTense::Present),
        forms!["finisco", "finisci", "finisce", "finiamo", "finite", "finiscono"]
    );
}

#[test]
fn condurre_present() {
    assert_eq!(
        tense("condurre", SimpleTense::Present),
        forms!["conduo", "condui", "condue", "conduiamo", "conduete", "conduono"]
    );
}

#[test]
fn diversificarsi_passato_remoto() {
    assert_eq!(
        tense("diversificarsi", SimpleTense::PassatoRemoto),
        forms![
            "mi diversificai",
            "ti diversificasti",
            "si diversificò",
            "ci diversificammo",
            "vi diversificaste",
            "si diversificarono",
        ]
    );
}

#[test]
fn are_spelling() {
    assert_eq!(
        tense("cercare", SimpleTense::Present),
        forms!["cerco", "cerchi", "cerca", "cerchiamo", "cercate", "cercano"]
    );

    assert_eq!(
        tense("pagare", SimpleTense::Present),
        forms!["pago", "paghi", "paga", "paghiamo", "pagate", "pagano"]
    );

    assert_eq!(
        tense("mangiare", SimpleTense::Present),
        forms!["mangio", "mangi", "mangia", "mangiamo", "mangiate", "mangiano"]
    );

    assert_eq!(
        tense("sbagliare", SimpleTense::Present),
        forms!["sbaglio", "sbagli", "sbaglia", "sbagliamo", "sbagliate", "sbagliano"]
    );

    // Only the present is adjusted.
    assert_eq!(
        tense("cercare", SimpleTense::Imperfect),
        forms!["cercavo", "cercavi", "cercava", "cercavamo", "cercavate", "cercavano"]
    );
}

#[test]
fn ire_classes() {
    assert_eq!(
        tense("dormire", SimpleTense::Present),
        forms!["dormo", "dormi", "dorme", "dormiamo", "dormite", "dormono"]
    );

    assert_eq!(
        tense("finire", SimpleTense::Imperfect),
        forms!["finivo", "finivi", "finiva", "finivamo", "finivate", "finivano"]
    );

    assert_eq!(
        tense("dormire", SimpleTense::PassatoRemoto),
        forms!["dormii", "dormisti", "dormì", "dormimmo", "dormiste", "dormirono"]
    );
}

#[test]
fn ere_passato_remoto_etti_only() {
    assert_eq!(
        tense("credere", SimpleTense::PassatoRemoto),
        forms!["credetti", "credesti", "credette", "credemmo", "credeste", "credettero"]
    );
}

#[test]
fn future_and_conditional() {
    assert_eq!(
        tense("parlare", SimpleTense::Future),
        forms!["parlerò", "parlerai", "parlerà", "parleremo", "parlerete", "parleranno"]
    );

    assert_eq!(
        tense("finire", SimpleTense::Conditional),
        forms!["finirei", "finiresti", "finirebbe", "finiremmo", "finireste", "finirebbero"]
    );

    assert_eq!(
        tense("proporsi", SimpleTense::Future),
        forms![
            "mi proporrò",
            "ti proporrai",
            "si proporrà",
            "ci proporremo",
            "vi proporrete",
            "si proporranno",
        ]
    );
}

#[test]
fn gerund_and_participle() {
    assert_eq!(tense("parlare", SimpleTense::Gerund), forms!["parlando"]);
    assert_eq!(tense("credere", SimpleTense::Gerund), forms!["credendo"]);
    assert_eq!(tense("lavarsi", SimpleTense::Gerund), forms!["lavandosi"]);
    assert_eq!(tense("ridursi", SimpleTense::Gerund), forms!["riducendosi"]);

    assert_eq!(
        tense("parlare", SimpleTense::Participle),
        forms!["parlato", "parlata", "parlati", "parlate"]
    );
    assert_eq!(
        tense("condurre", SimpleTense::Participle),
        forms!["conduuto", "conduuta", "conduuti", "conduute"]
    );
    // Never prefixed with a pronoun.
    assert_eq!(
        tense("vestirsi", SimpleTense::Participle),
        forms!["vestito", "vestita", "vestiti", "vestite"]
    );
}

#[test]
fn reflexive_present() {
    assert_eq!(
        tense("divertirsi", SimpleTense::Present),
        forms![
            "mi diverto",
            "ti diverti",
            "si diverte",
            "ci divertiamo",
            "vi divertite",
            "si divertono",
        ]
    );

    assert_eq!(
        tense("proporsi", SimpleTense::Present),
        forms![
            "mi propongo",
            "ti propongi",
            "si proponge",
            "ci propongiamo",
            "vi propongete",
            "si propongono",
        ]
    );
}

#[test]
#[should_panic]
fn reflex_rejects_non_finite() {
    reflex(gerund(VerbClass::Are, "parl"));
}

#[test]
fn arity() {
    for verb in [
        "parlare",
        "credere",
        "dormire",
        "finire",
        "condurre",
        "lavarsi",
        "mettersi",
        "divertirsi",
        "pentirsi",
        "proporsi",
        "ridursi",
    ] {
        let table = conjugate(verb).unwrap();
        assert_eq!(table.len(), SimpleTense::ALL.len());

        for &tense in SimpleTense::ALL {
            assert_eq!(table.get(tense).unwrap().len(), tense.arity(), "{verb} {tense}");
        }

        assert_eq!(table.validate(verb), Ok(()));
    }
}

#[test]
fn parse_tense() {
    for &tense in SimpleTense::ALL {
        assert_eq!(SimpleTense::parse(tense.name()), Some(tense));
        assert_eq!(
            SimpleTense::parse(&tense.name().to_uppercase()),
            Some(tense)
        );
    }

    assert_eq!(
        SimpleTense::parse("Passato_Remoto"),
        Some(SimpleTense::PassatoRemoto)
    );
    assert_eq!(SimpleTense::parse("subjunctive"), None);
}

#[test]
fn serialize_table() {
    let table = conjugate("parlare").unwrap();
    let json = serde_json::to_string(&table).unwrap();

    assert!(json.starts_with(r#"{"present":"parlo/parli/parla/parliamo/parlate/parlano","#));
    assert!(json.ends_with(r#""gerund":"parlando","participle":"parlato/parlata/parlati/parlate"}"#));
    assert_eq!(json, serde_json::to_string(&conjugate("parlare").unwrap()).unwrap());
}
