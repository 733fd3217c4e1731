use std::fmt;

use log::{debug, trace};

use crate::ast::{Fallacy, Figure, Form, Mood, TermRole};
use crate::error::Result;
use crate::statement::Statement;

// the three statements of one form; built by `assemble` and never mutated
#[derive(Clone, Debug, PartialEq)]
pub struct Syllogism {
    major_premise: Statement,
    minor_premise: Statement,
    conclusion: Statement,
}

impl Syllogism {
    pub fn from_form(form: &Form) -> Syllogism {
        let ((major_subject, major_predicate), (minor_subject, minor_predicate)) =
            form.figure.arrangement();
        trace!("assembling {}", form);
        Syllogism {
            major_premise: Statement::new(form.major, major_subject, major_predicate),
            minor_premise: Statement::new(form.minor, minor_subject, minor_predicate),
            conclusion: Statement::new(form.conclusion, TermRole::Minor, TermRole::Major),
        }
    }

    pub fn major_premise(&self) -> &Statement {
        &self.major_premise
    }

    pub fn minor_premise(&self) -> &Statement {
        &self.minor_premise
    }

    pub fn conclusion(&self) -> &Statement {
        &self.conclusion
    }
}

/// Assembles the three statements of a form, laying out the premises by
/// figure. The conclusion is always minor-subject, major-predicate.
pub fn assemble(major: Mood, minor: Mood, conclusion: Mood, figure: u8) -> Result<Syllogism> {
    let figure = Figure::new(figure)?;
    Ok(Syllogism::from_form(&Form::new(
        major, minor, conclusion, figure,
    )))
}

/// Every fallacy the syllogism commits, in check order. All six checks run;
/// an empty list means the form is valid.
pub fn evaluate(s: &Syllogism) -> Result<Vec<Fallacy>> {
    let major = &s.major_premise;
    let minor = &s.minor_premise;
    let conclusion = &s.conclusion;
    let mut fallacies = vec![];

    if !(major.is_middle_term_distributed()? || minor.is_middle_term_distributed()?) {
        fallacies.push(Fallacy::UndistributedMiddle);
    }
    if conclusion.predicate_distributed && !major.is_outer_term_distributed()? {
        fallacies.push(Fallacy::IllicitMajor);
    }
    if conclusion.subject_distributed && !minor.is_outer_term_distributed()? {
        fallacies.push(Fallacy::IllicitMinor);
    }
    if major.is_negative() && minor.is_negative() {
        fallacies.push(Fallacy::TwoNegativePremises);
    }
    if (major.is_negative() || minor.is_negative()) && conclusion.is_affirmative() {
        fallacies.push(Fallacy::NegativePremiseAffirmativeConclusion);
    }
    if major.is_affirmative() && minor.is_affirmative() && conclusion.is_negative() {
        fallacies.push(Fallacy::TwoAffirmativePremisesNegativeConclusion);
    }

    Ok(fallacies)
}

pub fn is_valid(s: &Syllogism) -> Result<bool> {
    Ok(evaluate(s)?.is_empty())
}

/// The verdict for one form, as the driver prints it.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub form: Form,
    pub fallacies: Vec<Fallacy>,
}

impl Evaluation {
    pub fn is_valid(&self) -> bool {
        self.fallacies.is_empty()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: ", self.form)?;
        if self.is_valid() {
            return f.write_str("VALID");
        }
        let names: Vec<&str> = self.fallacies.iter().map(|x| x.name()).collect();
        f.write_str(&names.join(", "))
    }
}

pub fn evaluate_form(form: Form) -> Result<Evaluation> {
    let fallacies = evaluate(&Syllogism::from_form(&form))?;
    debug!("{} commits {} fallacies", form, fallacies.len());
    Ok(Evaluation { form, fallacies })
}

#[test]
fn figure_arrangements() {
    use TermRole::{Major, Middle, Minor};
    let expected = [
        ((Middle, Major), (Minor, Middle)),
        ((Major, Middle), (Minor, Middle)),
        ((Middle, Major), (Middle, Minor)),
        ((Major, Middle), (Middle, Minor)),
    ];
    for (n, &(major, minor)) in (1..=4).zip(expected.iter()) {
        let s = assemble(Mood::A, Mood::E, Mood::I, n).unwrap();
        assert_eq!(major, (s.major_premise().subject, s.major_premise().predicate));
        assert_eq!(minor, (s.minor_premise().subject, s.minor_premise().predicate));
        assert_eq!((Minor, Major), (s.conclusion().subject, s.conclusion().predicate));
    }
}

#[test]
fn figure_out_of_range() {
    use crate::error::Error;
    assert!(matches!(
        assemble(Mood::A, Mood::A, Mood::A, 5),
        Err(Error::InvalidFigure(5))
    ));
    assert!(matches!(
        assemble(Mood::A, Mood::A, Mood::A, 0),
        Err(Error::InvalidFigure(0))
    ));
}

#[test]
fn barbara_and_celarent_are_valid() {
    let barbara = assemble(Mood::A, Mood::A, Mood::A, 1).unwrap();
    assert_eq!(Vec::<Fallacy>::new(), evaluate(&barbara).unwrap());
    assert!(is_valid(&barbara).unwrap());

    let celarent = assemble(Mood::E, Mood::A, Mood::E, 1).unwrap();
    assert_eq!(Vec::<Fallacy>::new(), evaluate(&celarent).unwrap());
}

#[test]
fn aaa_2_has_an_undistributed_middle() {
    let s = assemble(Mood::A, Mood::A, Mood::A, 2).unwrap();
    assert_eq!(vec![Fallacy::UndistributedMiddle], evaluate(&s).unwrap());
    assert!(!is_valid(&s).unwrap());
}

#[test]
fn ieo_4_is_an_illicit_major() {
    // the major term is the subject of an I premise, undistributed,
    // but the O conclusion distributes it
    let s = assemble(Mood::I, Mood::E, Mood::O, 4).unwrap();
    assert_eq!(vec![Fallacy::IllicitMajor], evaluate(&s).unwrap());
}

#[test]
fn fallacies_come_back_in_check_order() {
    // IIE distributes nothing in its premises but both terms in its conclusion
    for n in 1..=4 {
        let s = assemble(Mood::I, Mood::I, Mood::E, n).unwrap();
        assert_eq!(
            vec![
                Fallacy::UndistributedMiddle,
                Fallacy::IllicitMajor,
                Fallacy::IllicitMinor,
                Fallacy::TwoAffirmativePremisesNegativeConclusion,
            ],
            evaluate(&s).unwrap()
        );
    }
}

#[test]
fn two_negative_premises_with_an_affirmative_conclusion() {
    let s = assemble(Mood::O, Mood::O, Mood::A, 2).unwrap();
    assert_eq!(
        vec![
            Fallacy::IllicitMinor,
            Fallacy::TwoNegativePremises,
            Fallacy::NegativePremiseAffirmativeConclusion,
        ],
        evaluate(&s).unwrap()
    );
}

#[test]
fn two_affirmatives_cannot_conclude_negatively() {
    let s = assemble(Mood::A, Mood::A, Mood::E, 1).unwrap();
    assert_eq!(
        vec![
            Fallacy::IllicitMajor,
            Fallacy::TwoAffirmativePremisesNegativeConclusion,
        ],
        evaluate(&s).unwrap()
    );
}

#[test]
fn evaluation_display() {
    let form = Form::new(Mood::A, Mood::A, Mood::A, Figure::new(1).unwrap());
    assert_eq!("AAA-1: VALID", evaluate_form(form).unwrap().to_string());

    let form = Form::new(Mood::A, Mood::A, Mood::E, Figure::new(1).unwrap());
    assert_eq!(
        "AAE-1: ILLICIT_MAJOR, TWO_AFFIRMATIVE_PREMISES_NEGATIVE_CONCLUSION",
        evaluate_form(form).unwrap().to_string()
    );
}
