//! Adjective comparison and pronoun declension through the public API.

use kazakh_morph::pronoun::oz_septik_form;
use kazakh_morph::prelude::*;

#[test]
fn test_comparative_degrees() {
    let cases = [
        ("үлкен", "үлкенірек", "үлкендеу"),
        ("жақсы", "жақсырақ", "жақсылау"),
        ("көп", "көбірек", "көптеу"),
        ("ақ", "ағырақ", "ақтау"),
    ];
    for (adj, rak, lau) in cases {
        let builder = AdjBuilder::new(adj);
        assert_eq!(builder.rak_form().raw(), rak, "{}", adj);
        assert_eq!(builder.lau_form().raw(), lau, "{}", adj);
    }
}

#[test]
fn test_comparative_parts() {
    let phrasal = AdjBuilder::new("көп").rak_form();
    let types: Vec<PhrasalPartType> = phrasal.parts().iter().map(|p| p.part_type).collect();
    assert_eq!(types, vec![PhrasalPartType::AdjBase, PhrasalPartType::AdjCompAffix]);
    assert_eq!(phrasal.part_texts(), vec!["көб", "ірек"]);
}

#[test]
fn test_pronoun_cases() {
    assert_eq!(pronoun_form(GrammarForm::Men, Septik::Ilik).raw(), "менің");
    assert_eq!(pronoun_form(GrammarForm::Men, Septik::Barys).raw(), "маған");
    assert_eq!(pronoun_form(GrammarForm::Sen, Septik::Barys).raw(), "саған");
    assert_eq!(pronoun_form(GrammarForm::Ol, Septik::Ilik).raw(), "оның");
    assert_eq!(pronoun_form(GrammarForm::Ol, Septik::Komektes).raw(), "онымен");
    assert_eq!(pronoun_form(GrammarForm::Olar, Septik::Shygys).raw(), "олардан");
    assert_eq!(pronoun_form(GrammarForm::Sizder, Septik::Komektes).raw(), "Сіздермен");
}

#[test]
fn test_pronoun_parts() {
    let phrasal = pronoun_form(GrammarForm::Sender, Septik::Tabys);
    assert_eq!(phrasal.raw(), "сендерді");
    assert_eq!(phrasal.part_texts(), vec!["сен", "дер", "ді"]);
    assert_eq!(phrasal.parts()[0].part_type, PhrasalPartType::PronounBase);

    let nominative = pronoun_form(GrammarForm::Biz, Septik::Atau);
    assert_eq!(nominative.part_texts(), vec!["біз"]);
}

#[test]
fn test_reflexive() {
    let expected = [
        (GrammarForm::Men, "өзім"),
        (GrammarForm::Biz, "өзіміз"),
        (GrammarForm::Sen, "өзің"),
        (GrammarForm::Sender, "өздерің"),
        (GrammarForm::Siz, "өзіңіз"),
        (GrammarForm::Sizder, "өздеріңіз"),
        (GrammarForm::Ol, "өзі"),
        (GrammarForm::Olar, "өздері"),
    ];
    for (form, text) in expected {
        assert_eq!(oz_form(form).raw(), text, "{:?}", form);
    }
    assert_eq!(oz_septik_form(GrammarForm::Ol, Septik::Barys).raw(), "өзіне");
    assert_eq!(oz_septik_form(GrammarForm::Men, Septik::Komektes).raw(), "өзіммен");
}
