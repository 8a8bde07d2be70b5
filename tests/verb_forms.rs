//! Conjugation scenarios across tenses, moods and auxiliary constructions.

use kazakh_morph::prelude::*;

use GrammarNumber::*;
use GrammarPerson::*;
use SentenceType::*;

fn verb(dict_form: &str) -> VerbBuilder {
    VerbBuilder::new(dict_form).unwrap()
}

fn paradigm(expected: [&str; 8], mut form: impl FnMut(GrammarPerson, GrammarNumber) -> Phrasal) {
    let mut position = 0;
    for person in GrammarPerson::ALL {
        for number in GrammarNumber::ALL {
            assert_eq!(
                form(person, number).raw(),
                expected[position],
                "{:?} {:?}",
                person,
                number
            );
            position += 1;
        }
    }
}

#[test]
fn test_present_transitive_paradigms() {
    let alu = verb("алу");
    paradigm(
        ["аламын", "аламыз", "аласың", "аласыңдар", "аласыз", "аласыздар", "алады", "алады"],
        |p, n| alu.present_transitive_form(p, n, Statement),
    );

    let kelu = verb("келу");
    paradigm(
        [
            "келмеймін",
            "келмейміз",
            "келмейсің",
            "келмейсіңдер",
            "келмейсіз",
            "келмейсіздер",
            "келмейді",
            "келмейді",
        ],
        |p, n| kelu.present_transitive_form(p, n, Negative),
    );

    let renju = verb("ренжу");
    paradigm(
        [
            "ренжимін бе?",
            "ренжиміз бе?",
            "ренжисің бе?",
            "ренжисіңдер ме?",
            "ренжисіз бе?",
            "ренжисіздер ме?",
            "ренжи ме?",
            "ренжи ме?",
        ],
        |p, n| renju.present_transitive_form(p, n, Question),
    );
}

#[test]
fn test_tricky_present_transitive() {
    let cases = [
        ("ренжу", First, Singular, Negative, "ренжімеймін"),
        ("ішу", First, Plural, Negative, "ішпейміз"),
        ("қию", First, Singular, Statement, "қиямын"),
        ("кию", First, Singular, Statement, "киемін"),
        ("кию", First, Singular, Negative, "кимеймін"),
        ("кию", Third, Plural, Question, "кие ме?"),
        ("оқу", First, Singular, Statement, "оқимын"),
        ("сүю", First, Singular, Statement, "сүйемін"),
        ("қою", First, Singular, Negative, "қоймаймын"),
        ("есту", First, Singular, Negative, "естімеймін"),
        ("даму", SecondPolite, Singular, Negative, "дамымайсыз"),
        ("тігу", First, Singular, Negative, "тікпеймін"),
    ];
    for (dict_form, person, number, sentence_type, expected) in cases {
        assert_eq!(
            verb(dict_form)
                .present_transitive_form(person, number, sentence_type)
                .raw(),
            expected,
            "{}",
            dict_form
        );
    }
}

#[test]
fn test_consonant_change_in_negative() {
    let cases = [
        ("кешігу", "кешігеді", "кешікпейді"),
        ("тігу", "тігеді", "тікпейді"),
        ("шығу", "шығады", "шықпайды"),
        ("қызығу", "қызығады", "қызықпайды"),
        ("тебу", "тебеді", "теппейді"),
        ("жабу", "жабады", "жаппайды"),
    ];
    for (dict_form, statement, negative) in cases {
        let builder = verb(dict_form);
        assert_eq!(builder.present_transitive_form(Third, Singular, Statement).raw(), statement);
        assert_eq!(builder.present_transitive_form(Third, Singular, Negative).raw(), negative);
    }
}

#[test]
fn test_optional_exceptions() {
    let cases = [
        ("ашу", "ашады", "ашиды"),
        ("еру", "ереді", "ериді"),
        ("жару", "жарады", "жариды"),
        ("құру", "құрады", "құриды"),
        ("тану", "танады", "таниды"),
    ];
    for (dict_form, regular, exceptional) in cases {
        let regular_builder = verb(dict_form);
        assert_eq!(
            regular_builder.present_transitive_form(Third, Singular, Statement).raw(),
            regular
        );
        let exceptional_builder = VerbBuilder::with_force_exceptional(dict_form, true).unwrap();
        assert_eq!(
            exceptional_builder.present_transitive_form(Third, Singular, Statement).raw(),
            exceptional
        );
    }
}

#[test]
fn test_verbs_ending_in_yu() {
    let cases = [
        ("азаю", "азай", "азаяды"),
        ("құю", "құй", "құяды"),
        ("тою", "той", "тояды"),
        ("көбею", "көбей", "көбейеді"),
        ("сүю", "сүй", "сүйеді"),
        ("баю", "байы", "байиды"),
        ("ұю", "ұйы", "ұйиды"),
        ("қию", "қи", "қияды"),
        ("балпию", "балпи", "балпияды"),
        ("кіржию", "кіржи", "кіржиеді"),
        ("итию", "ити", "итиеді"),
    ];
    for (dict_form, base, third_person) in cases {
        let builder = verb(dict_form);
        let negative = builder.present_transitive_form(Third, Singular, Negative);
        assert!(
            negative.raw().starts_with(base),
            "{} negative {} must start with {}",
            dict_form,
            negative.raw(),
            base
        );
        assert_eq!(
            builder.present_transitive_form(Third, Singular, Statement).raw(),
            third_person,
            "{}",
            dict_form
        );
    }
}

#[test]
fn test_simple_present_continuous() {
    let verbs = ["тұру", "жүру", "отыру", "жату"].map(verb);
    let first = ["тұрмын", "жүрмін", "отырмын", "жатырмын"];
    let second_plural = ["тұрсыңдар", "жүрсіңдер", "отырсыңдар", "жатырсыңдар"];
    let third = ["тұр", "жүр", "отыр", "жатыр"];
    let negative = ["тұрған жоқпын", "жүрген жоқпын", "отырған жоқпын", "жатқан жоқпын"];
    for (i, builder) in verbs.iter().enumerate() {
        assert_eq!(builder.present_simple_continuous_form(First, Singular, Statement).raw(), first[i]);
        assert_eq!(
            builder.present_simple_continuous_form(Second, Plural, Statement).raw(),
            second_plural[i]
        );
        assert_eq!(builder.present_simple_continuous_form(Third, Plural, Statement).raw(), third[i]);
        assert_eq!(builder.present_simple_continuous_form(First, Singular, Negative).raw(), negative[i]);
    }

    let unsupported = verb("алу").present_simple_continuous_form(First, Singular, Statement);
    assert!(unsupported.is_not_supported());
    assert_eq!(unsupported.raw(), "<not supported>");
}

#[test]
fn test_present_continuous_with_aux() {
    let soileu = verb("сөйлеу");
    for (aux, expected) in [
        ("тұру", "сөйлеп тұрмын"),
        ("жүру", "сөйлеп жүрмін"),
        ("отыру", "сөйлеп отырмын"),
        ("жату", "сөйлеп жатырмын"),
    ] {
        assert_eq!(
            soileu
                .present_continuous_form(First, Singular, Statement, &verb(aux), false)
                .raw(),
            expected
        );
    }

    let cases = [
        ("жуу", "тұру", Third, Plural, "жуып тұр"),
        ("қарау", "тұру", Second, Singular, "қарап тұрсың"),
        ("қыдыру", "жүру", First, Singular, "қыдырып жүрмін"),
        ("оқу", "жүру", SecondPolite, Singular, "оқып жүрсіз"),
        ("алу", "жату", Third, Singular, "алып жатыр"),
        ("бару", "жату", Third, Singular, "бара жатыр"),
        ("келу", "жату", First, Singular, "келе жатырмын"),
        ("тебу", "жүру", First, Plural, "теуіп жүрміз"),
        ("шабу", "жүру", Second, Plural, "шауып жүрсіңдер"),
        ("қою", "жату", Third, Plural, "қойып жатыр"),
        ("сүю", "жату", Third, Plural, "сүйіп жатыр"),
    ];
    for (dict_form, aux, person, number, expected) in cases {
        assert_eq!(
            verb(dict_form)
                .present_continuous_form(person, number, Statement, &verb(aux), false)
                .raw(),
            expected
        );
    }
}

#[test]
fn test_present_continuous_negative_and_question() {
    let otyru = verb("отыру");
    assert_eq!(
        verb("жазу")
            .present_continuous_form(Second, Singular, Negative, &otyru, true)
            .raw(),
        "жазып отырған жоқсың"
    );
    assert_eq!(
        verb("ішу")
            .present_continuous_form(Third, Singular, Negative, &otyru, true)
            .raw(),
        "ішіп отырған жоқ"
    );
    assert_eq!(
        verb("оқу")
            .present_continuous_form(First, Singular, Negative, &verb("жүру"), true)
            .raw(),
        "оқып жүрген жоқпын"
    );
    assert_eq!(
        verb("жазу")
            .present_continuous_form(First, Singular, Question, &otyru, false)
            .raw(),
        "жазып отырмын ба?"
    );
    assert_eq!(
        verb("бару")
            .present_continuous_form(Third, Singular, Question, &verb("жату"), false)
            .raw(),
        "бара жатыр ма?"
    );
}

#[test]
fn test_present_continuous_simple_negative() {
    assert_eq!(
        verb("жазу")
            .present_continuous_simple_negative_form(Second, Singular, &verb("отыру"))
            .raw(),
        "жазбай отырсың"
    );
    assert_eq!(
        verb("ұйықтау")
            .present_continuous_simple_negative_form(First, Plural, &verb("жату"))
            .raw(),
        "ұйықтамай жатырмыз"
    );
    assert_eq!(
        verb("алу")
            .present_continuous_simple_negative_form(First, Singular, &verb("жүру"))
            .raw(),
        "алмай жүрмін"
    );
}

#[test]
fn test_forbidden_pairing() {
    let turu = verb("тұру");
    for sentence_type in SentenceType::ALL {
        let phrasal = verb("бару").present_continuous_form(First, Singular, sentence_type, &turu, true);
        assert!(phrasal.forbidden(), "{:?}", sentence_type);
    }
    let jatu = verb("жату");
    assert!(!verb("бару")
        .present_continuous_form(First, Singular, Statement, &jatu, false)
        .forbidden());
}

#[test]
fn test_want_clause() {
    let cases = [
        ("отыру", First, Singular, Statement, VerbShak::PresentTransitive, "отырғым келеді"),
        ("көру", First, Plural, Statement, VerbShak::PresentContinuous, "көргіміз келіп жатыр"),
        ("айту", Second, Singular, Question, VerbShak::PresentContinuous, "айтқың келіп жатыр ма?"),
        ("айналысу", Second, Singular, Question, VerbShak::PresentTransitive, "айналысқың келе ме?"),
        ("жабу", Second, Plural, Statement, VerbShak::PresentTransitive, "жапқыларың келеді"),
        ("оқу", SecondPolite, Singular, Question, VerbShak::PresentTransitive, "оқығыңыз келе ме?"),
        ("тебу", First, Plural, Statement, VerbShak::PresentTransitive, "тепкіміз келеді"),
        ("жазу", SecondPolite, Plural, Negative, VerbShak::PresentTransitive, "жазғыларыңыз келмейді"),
        ("ішу", Third, Singular, Negative, VerbShak::PresentContinuous, "ішкісі келмей жатыр"),
    ];
    for (dict_form, person, number, sentence_type, shak, expected) in cases {
        assert_eq!(
            verb(dict_form)
                .want_clause(person, number, sentence_type, shak)
                .raw(),
            expected
        );
    }
}

#[test]
fn test_can_clause() {
    let cases = [
        ("аулау", First, Singular, Statement, "аулай аламын"),
        ("жазу", First, Singular, Negative, "жаза алмаймын"),
        ("пісіру", Third, Singular, Question, "пісіре ала ма?"),
        ("оқу", Third, Singular, Statement, "оқи алады"),
        ("тоқу", First, Singular, Statement, "тоқи аламын"),
        ("қою", First, Singular, Statement, "қоя аламын"),
    ];
    for (dict_form, person, number, sentence_type, expected) in cases {
        assert_eq!(verb(dict_form).can_clause(person, number, sentence_type).raw(), expected);
    }

    let jatu = verb("жату");
    assert_eq!(
        verb("көмектесу")
            .can_clause_in_present_continuous(First, Singular, Negative, &jatu)
            .raw(),
        "көмектесе алмай жатырмын"
    );
    assert_eq!(
        verb("үлгеру")
            .can_clause_in_present_continuous(Third, Singular, Negative, &jatu)
            .raw(),
        "үлгере алмай жатыр"
    );
}

#[test]
fn test_past_tense() {
    let cases = [
        ("жазу", First, Singular, Statement, "жаздым"),
        ("билеу", First, Plural, Statement, "биледік"),
        ("отыру", Second, Singular, Statement, "отырдың"),
        ("қорқу", First, Singular, Statement, "қорықтым"),
        ("пісіру", Third, Singular, Question, "пісірді ме?"),
        ("болу", Second, Plural, Question, "болдыңдар ма?"),
        ("істеу", SecondPolite, Plural, Question, "істедіңіздер ме?"),
        ("оқу", SecondPolite, Singular, Question, "оқыдыңыз ба?"),
        ("тыңдау", Third, Singular, Negative, "тыңдамады"),
        ("ішу", First, Plural, Negative, "ішпедік"),
        ("оқу", Second, Singular, Negative, "оқымадың"),
    ];
    for (dict_form, person, number, sentence_type, expected) in cases {
        assert_eq!(verb(dict_form).past_form(person, number, sentence_type).raw(), expected);
    }
}

#[test]
fn test_jazdau_clause() {
    assert_eq!(
        verb("ұмыту").jazdau_clause(First, Singular, &verb("қалу")).raw(),
        "ұмытып қала жаздадым"
    );
    assert_eq!(
        verb("айту").jazdau_clause(Third, Singular, &verb("салу")).raw(),
        "айтып сала жаздады"
    );
}

#[test]
fn test_parts_are_tagged() {
    let phrasal = verb("алу").present_transitive_form(First, Singular, Question);
    let types: Vec<PhrasalPartType> = phrasal.parts().iter().map(|p| p.part_type).collect();
    assert_eq!(types.first(), Some(&PhrasalPartType::VerbBase));
    assert_eq!(types.last(), Some(&PhrasalPartType::QuestionParticle));
    assert_eq!(phrasal.part_texts().concat(), phrasal.raw());
}

#[test]
fn test_invalid_dictionary_forms() {
    let too_long = "у".repeat(101);
    for bad in ["", "а", "алa", "Алу", "жаз", too_long.as_str()] {
        assert!(
            matches!(VerbBuilder::new(bad), Err(MorphError::InvalidVerbDictForm { .. })),
            "{:?}",
            bad
        );
    }
}
