use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

// which of the three syllogistic terms a subject or predicate refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TermRole {
    Major,
    Minor,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quality {
    Affirmative,
    Negative,
}

/// The four categorical statement types.
///
/// A: all S are P, E: no S are P, I: some S are P, O: some S are not P.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mood {
    A,
    E,
    I,
    O,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::A, Mood::E, Mood::I, Mood::O];

    pub fn from_char(c: char) -> Result<Mood> {
        match c {
            'A' => Ok(Mood::A),
            'E' => Ok(Mood::E),
            'I' => Ok(Mood::I),
            'O' => Ok(Mood::O),
            other => Err(Error::InvalidMood(other)),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Mood::A => 'A',
            Mood::E => 'E',
            Mood::I => 'I',
            Mood::O => 'O',
        }
    }

    pub fn subject_distributed(self) -> bool {
        match self {
            Mood::A | Mood::E => true,
            Mood::I | Mood::O => false,
        }
    }

    pub fn predicate_distributed(self) -> bool {
        match self {
            Mood::E | Mood::O => true,
            Mood::A | Mood::I => false,
        }
    }

    pub fn quality(self) -> Quality {
        match self {
            Mood::A | Mood::I => Quality::Affirmative,
            Mood::E | Mood::O => Quality::Negative,
        }
    }

    fn index(self) -> usize {
        match self {
            Mood::A => 0,
            Mood::E => 1,
            Mood::I => 2,
            Mood::O => 3,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One of the four classical term arrangements, numbered 1 through 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Figure(u8);

impl Figure {
    pub const ALL: [Figure; 4] = [Figure(1), Figure(2), Figure(3), Figure(4)];

    pub fn new(n: u8) -> Result<Figure> {
        match n {
            1..=4 => Ok(Figure(n)),
            other => Err(Error::InvalidFigure(other)),
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// (subject, predicate) of the major premise, then of the minor premise.
    pub fn arrangement(self) -> ((TermRole, TermRole), (TermRole, TermRole)) {
        use TermRole::{Major, Middle, Minor};
        match self.0 {
            1 => ((Middle, Major), (Minor, Middle)),
            2 => ((Major, Middle), (Minor, Middle)),
            3 => ((Middle, Major), (Middle, Minor)),
            _ => ((Major, Middle), (Middle, Minor)),
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// declaration order is the order the evaluator checks them in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fallacy {
    UndistributedMiddle,
    IllicitMajor,
    IllicitMinor,
    TwoNegativePremises,
    NegativePremiseAffirmativeConclusion,
    TwoAffirmativePremisesNegativeConclusion,
}

impl Fallacy {
    pub const ALL: [Fallacy; 6] = [
        Fallacy::UndistributedMiddle,
        Fallacy::IllicitMajor,
        Fallacy::IllicitMinor,
        Fallacy::TwoNegativePremises,
        Fallacy::NegativePremiseAffirmativeConclusion,
        Fallacy::TwoAffirmativePremisesNegativeConclusion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Fallacy::UndistributedMiddle => "UNDISTRIBUTED_MIDDLE",
            Fallacy::IllicitMajor => "ILLICIT_MAJOR",
            Fallacy::IllicitMinor => "ILLICIT_MINOR",
            Fallacy::TwoNegativePremises => "TWO_NEGATIVE_PREMISES",
            Fallacy::NegativePremiseAffirmativeConclusion => {
                "NEGATIVE_PREMISE_AFFIRMATIVE_CONCLUSION"
            }
            Fallacy::TwoAffirmativePremisesNegativeConclusion => {
                "TWO_AFFIRMATIVE_PREMISES_NEGATIVE_CONCLUSION"
            }
        }
    }
}

impl fmt::Display for Fallacy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Fallacy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Fallacy> {
        Fallacy::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownFallacy(s.to_owned()))
    }
}

/// A syllogism form identifier such as `AAA-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Form {
    pub major: Mood,
    pub minor: Mood,
    pub conclusion: Mood,
    pub figure: Figure,
}

impl Form {
    pub fn new(major: Mood, minor: Mood, conclusion: Mood, figure: Figure) -> Form {
        Form {
            major,
            minor,
            conclusion,
            figure,
        }
    }

    /// All 256 forms, figure varying fastest, then conclusion, minor, major.
    pub fn all() -> impl Iterator<Item = Form> {
        (0..256).map(Form::from_ordinal)
    }

    fn from_ordinal(n: usize) -> Form {
        Form::new(
            Mood::ALL[n / 64 % 4],
            Mood::ALL[n / 16 % 4],
            Mood::ALL[n / 4 % 4],
            Figure::ALL[n % 4],
        )
    }

    // position of this form in `Form::all()`
    pub fn ordinal(&self) -> usize {
        let moods = (self.major.index() * 4 + self.minor.index()) * 4 + self.conclusion.index();
        moods * 4 + (self.figure.number() as usize - 1)
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}{}-{}",
            self.major, self.minor, self.conclusion, self.figure
        )
    }
}

#[test]
fn mood_table() {
    use Quality::{Affirmative, Negative};
    let rows: Vec<(bool, bool, Quality)> = Mood::ALL
        .iter()
        .map(|m| (m.subject_distributed(), m.predicate_distributed(), m.quality()))
        .collect();
    assert_eq!(
        vec![
            (true, false, Affirmative),
            (true, true, Negative),
            (false, false, Affirmative),
            (false, true, Negative),
        ],
        rows
    );
}

#[test]
fn mood_letters() {
    for m in Mood::ALL.iter() {
        assert_eq!(*m, Mood::from_char(m.letter()).unwrap());
    }
    assert!(matches!(Mood::from_char('X'), Err(Error::InvalidMood('X'))));
    assert!(matches!(Mood::from_char('a'), Err(Error::InvalidMood('a'))));
}

#[test]
fn figure_bounds() {
    assert!(matches!(Figure::new(0), Err(Error::InvalidFigure(0))));
    assert!(matches!(Figure::new(5), Err(Error::InvalidFigure(5))));
    assert_eq!(3, Figure::new(3).unwrap().number());
}

#[test]
fn fallacy_names_round_trip_case_insensitively() {
    assert_eq!(
        Fallacy::IllicitMinor,
        "illicit_minor".parse::<Fallacy>().unwrap()
    );
    assert_eq!(
        Fallacy::TwoAffirmativePremisesNegativeConclusion,
        "TWO_AFFIRMATIVE_PREMISES_NEGATIVE_CONCLUSION"
            .parse::<Fallacy>()
            .unwrap()
    );
    assert!("ILLICIT_MIDDLE".parse::<Fallacy>().is_err());
}

#[test]
fn forms_enumerate_in_order() {
    let forms: Vec<Form> = Form::all().collect();
    assert_eq!(256, forms.len());
    assert_eq!("AAA-1", forms[0].to_string());
    assert_eq!("AAA-2", forms[1].to_string());
    assert_eq!("AAE-1", forms[4].to_string());
    assert_eq!("OOO-4", forms[255].to_string());
    for (i, f) in forms.iter().enumerate() {
        assert_eq!(i, f.ordinal());
    }
}
