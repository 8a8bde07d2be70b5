use super::{GrammarNumber, GrammarPerson};

/// A person/number pair together with its personal pronoun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GrammarForm {
    /// мен
    Men,
    /// біз
    Biz,
    /// сен
    Sen,
    /// сендер
    Sender,
    /// Сіз
    Siz,
    /// Сіздер
    Sizder,
    /// ол
    Ol,
    /// олар
    Olar,
}

impl GrammarForm {
    /// All forms, person-major, in table order.
    pub const ALL: [GrammarForm; 8] = [
        GrammarForm::Men,
        GrammarForm::Biz,
        GrammarForm::Sen,
        GrammarForm::Sender,
        GrammarForm::Siz,
        GrammarForm::Sizder,
        GrammarForm::Ol,
        GrammarForm::Olar,
    ];

    /// Form for a person and number.
    pub fn of(person: GrammarPerson, number: GrammarNumber) -> Self {
        Self::ALL[person.index() * 2 + number.index()]
    }

    /// Grammatical person.
    pub fn person(self) -> GrammarPerson {
        match self {
            GrammarForm::Men | GrammarForm::Biz => GrammarPerson::First,
            GrammarForm::Sen | GrammarForm::Sender => GrammarPerson::Second,
            GrammarForm::Siz | GrammarForm::Sizder => GrammarPerson::SecondPolite,
            GrammarForm::Ol | GrammarForm::Olar => GrammarPerson::Third,
        }
    }

    /// Grammatical number.
    pub fn number(self) -> GrammarNumber {
        match self {
            GrammarForm::Men | GrammarForm::Sen | GrammarForm::Siz | GrammarForm::Ol => {
                GrammarNumber::Singular
            }
            _ => GrammarNumber::Plural,
        }
    }

    /// Personal pronoun in the nominative.
    pub fn pronoun(self) -> &'static str {
        match self {
            GrammarForm::Men => "мен",
            GrammarForm::Biz => "біз",
            GrammarForm::Sen => "сен",
            GrammarForm::Sender => "сендер",
            GrammarForm::Siz => "Сіз",
            GrammarForm::Sizder => "Сіздер",
            GrammarForm::Ol => "ол",
            GrammarForm::Olar => "олар",
        }
    }

    /// Personal pronoun in the genitive.
    pub fn poss(self) -> &'static str {
        match self {
            GrammarForm::Men => "менің",
            GrammarForm::Biz => "біздің",
            GrammarForm::Sen => "сенің",
            GrammarForm::Sender => "сендердің",
            GrammarForm::Siz => "Сіздің",
            GrammarForm::Sizder => "Сіздердің",
            GrammarForm::Ol => "оның",
            GrammarForm::Olar => "олардың",
        }
    }
}

impl std::fmt::Display for GrammarForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.pronoun())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_matches_accessors() {
        for person in GrammarPerson::ALL {
            for number in GrammarNumber::ALL {
                let form = GrammarForm::of(person, number);
                assert_eq!(form.person(), person);
                assert_eq!(form.number(), number);
            }
        }
    }

    #[test]
    fn test_pronouns() {
        assert_eq!(GrammarForm::Siz.pronoun(), "Сіз");
        assert_eq!(GrammarForm::Olar.poss(), "олардың");
        assert_eq!(GrammarForm::Sender.to_string(), "сендер");
    }
}
