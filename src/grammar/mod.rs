//! Grammatical categories shared by every builder.
//!
//! All enums are index-stable: their declaration order is the order used by
//! affix tables, regression datasets and form enumeration
//! (`First, Second, SecondPolite, Third` × `Singular, Plural`).

mod form;

pub use form::GrammarForm;

use std::fmt;

/// Grammatical person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GrammarPerson {
    /// мен / біз
    First,
    /// сен / сендер
    Second,
    /// Сіз / Сіздер
    SecondPolite,
    /// ол / олар
    Third,
}

impl GrammarPerson {
    /// All persons in table order.
    pub const ALL: [GrammarPerson; 4] = [
        GrammarPerson::First,
        GrammarPerson::Second,
        GrammarPerson::SecondPolite,
        GrammarPerson::Third,
    ];

    /// Person by its table index.
    #[inline]
    pub fn of_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Table index of the person.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Person position (1, 2 or 3); both second persons share position 2.
    ///
    /// Used by callers pairing subjects with verb forms, never by the rules.
    #[inline]
    pub fn position(self) -> u8 {
        match self {
            GrammarPerson::First => 1,
            GrammarPerson::Second | GrammarPerson::SecondPolite => 2,
            GrammarPerson::Third => 3,
        }
    }
}

impl fmt::Display for GrammarPerson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarPerson::First => write!(f, "First"),
            GrammarPerson::Second => write!(f, "Second"),
            GrammarPerson::SecondPolite => write!(f, "SecondPolite"),
            GrammarPerson::Third => write!(f, "Third"),
        }
    }
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GrammarNumber {
    /// Singular
    Singular,
    /// Plural
    Plural,
}

impl GrammarNumber {
    /// All numbers in table order.
    pub const ALL: [GrammarNumber; 2] = [GrammarNumber::Singular, GrammarNumber::Plural];

    /// Number by its table index.
    #[inline]
    pub fn of_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Table index of the number.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for GrammarNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarNumber::Singular => write!(f, "Singular"),
            GrammarNumber::Plural => write!(f, "Plural"),
        }
    }
}

/// Sentence type, orthogonal to every tense and mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SentenceType {
    /// Affirmative statement
    Statement,
    /// Negated statement
    Negative,
    /// General question with a question particle
    Question,
}

impl SentenceType {
    /// All sentence types in table order.
    pub const ALL: [SentenceType; 3] = [
        SentenceType::Statement,
        SentenceType::Negative,
        SentenceType::Question,
    ];

    /// `Negative` when the flag is set, `Statement` otherwise.
    #[inline]
    pub fn of_negative_flag(negative: bool) -> Self {
        if negative {
            SentenceType::Negative
        } else {
            SentenceType::Statement
        }
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentenceType::Statement => write!(f, "Statement"),
            SentenceType::Negative => write!(f, "Negative"),
            SentenceType::Question => write!(f, "Question"),
        }
    }
}

/// Grammatical case (septik).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Septik {
    /// Nominative (атау)
    Atau,
    /// Genitive (ілік)
    Ilik,
    /// Dative (барыс)
    Barys,
    /// Accusative (табыс)
    Tabys,
    /// Locative (жатыс)
    Jatys,
    /// Ablative (шығыс)
    Shygys,
    /// Instrumental (көмектес)
    Komektes,
}

impl Septik {
    /// All cases in table order.
    pub const ALL: [Septik; 7] = [
        Septik::Atau,
        Septik::Ilik,
        Septik::Barys,
        Septik::Tabys,
        Septik::Jatys,
        Septik::Shygys,
        Septik::Komektes,
    ];

    /// Case by its table index.
    #[inline]
    pub fn of_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Table index of the case.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Native Kazakh name of the case.
    pub fn kazakh_name(self) -> &'static str {
        match self {
            Septik::Atau => "атау",
            Septik::Ilik => "ілік",
            Septik::Barys => "барыс",
            Septik::Tabys => "табыс",
            Septik::Jatys => "жатыс",
            Septik::Shygys => "шығыс",
            Septik::Komektes => "көмектес",
        }
    }
}

impl fmt::Display for Septik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Tenses accepted by clauses that compose an auxiliary of a caller-chosen tense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbTense {
    /// Present transitive (ауыспалы осы шақ)
    PresentTransitive,
    /// Simple past (жедел өткен шақ)
    Past,
    /// Optative mood (қалау рай)
    Optative,
}

/// Aspect of an auxiliary verb inside want- and can-clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbShak {
    /// Auxiliary in present transitive
    PresentTransitive,
    /// Auxiliary in present continuous with "жату"
    PresentContinuous,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, person) in GrammarPerson::ALL.iter().enumerate() {
            assert_eq!(person.index(), i);
            assert_eq!(GrammarPerson::of_index(i), Some(*person));
        }
        for (i, septik) in Septik::ALL.iter().enumerate() {
            assert_eq!(Septik::of_index(i), Some(*septik));
        }
        assert_eq!(Septik::of_index(7), None);
        assert_eq!(GrammarNumber::of_index(2), None);
    }

    #[test]
    fn test_person_position() {
        assert_eq!(GrammarPerson::Second.position(), 2);
        assert_eq!(GrammarPerson::SecondPolite.position(), 2);
        assert_eq!(GrammarPerson::Third.position(), 3);
    }

    #[test]
    fn test_negative_flag() {
        assert_eq!(SentenceType::of_negative_flag(true), SentenceType::Negative);
        assert_eq!(SentenceType::of_negative_flag(false), SentenceType::Statement);
    }
}
