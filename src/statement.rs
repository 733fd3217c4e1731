/*
 * a single categorical statement and the distribution facts its mood implies
 */
use crate::ast::{Mood, Quality, TermRole};
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Statement {
    pub subject: TermRole,
    pub predicate: TermRole,
    pub subject_distributed: bool,
    pub predicate_distributed: bool,
    pub quality: Quality,
}

impl Statement {
    pub fn new(mood: Mood, subject: TermRole, predicate: TermRole) -> Statement {
        Statement {
            subject,
            predicate,
            subject_distributed: mood.subject_distributed(),
            predicate_distributed: mood.predicate_distributed(),
            quality: mood.quality(),
        }
    }

    // distribution of whichever position holds the middle term
    pub fn is_middle_term_distributed(&self) -> Result<bool> {
        if self.subject == TermRole::Middle {
            Ok(self.subject_distributed)
        } else if self.predicate == TermRole::Middle {
            Ok(self.predicate_distributed)
        } else {
            Err(Error::MissingMiddleTerm)
        }
    }

    /// Distribution of the premise's other term: the major term in the major
    /// premise, the minor term in the minor premise. Only meaningful on
    /// premises; the conclusion has no middle term.
    pub fn is_outer_term_distributed(&self) -> Result<bool> {
        match (self.subject, self.predicate) {
            (TermRole::Middle, TermRole::Middle) => Err(Error::DoubleMiddleTerm),
            (TermRole::Middle, _) => Ok(self.predicate_distributed),
            (_, TermRole::Middle) => Ok(self.subject_distributed),
            _ => Err(Error::MissingMiddleTerm),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.quality == Quality::Negative
    }

    pub fn is_affirmative(&self) -> bool {
        self.quality == Quality::Affirmative
    }
}

/// Builds a statement from a raw mood letter.
pub fn make_statement(mood: char, subject: TermRole, predicate: TermRole) -> Result<Statement> {
    let mood = Mood::from_char(mood)?;
    Ok(Statement::new(mood, subject, predicate))
}

#[test]
fn statement_takes_distribution_from_mood() {
    use TermRole::{Major, Middle};
    let s = make_statement('O', Middle, Major).unwrap();
    assert_eq!(
        Statement {
            subject: Middle,
            predicate: Major,
            subject_distributed: false,
            predicate_distributed: true,
            quality: Quality::Negative,
        },
        s
    );
    assert!(s.is_negative());
    assert!(!s.is_affirmative());
}

#[test]
fn unknown_mood_letter() {
    use TermRole::{Major, Middle};
    assert!(matches!(
        make_statement('X', Middle, Major),
        Err(Error::InvalidMood('X'))
    ));
}

#[test]
fn middle_term_distribution() {
    use TermRole::{Major, Middle, Minor};
    // A distributes its subject only
    let a_subject = Statement::new(Mood::A, Middle, Major);
    let a_predicate = Statement::new(Mood::A, Major, Middle);
    assert_eq!(true, a_subject.is_middle_term_distributed().unwrap());
    assert_eq!(false, a_predicate.is_middle_term_distributed().unwrap());

    let conclusion = Statement::new(Mood::A, Minor, Major);
    assert!(matches!(
        conclusion.is_middle_term_distributed(),
        Err(Error::MissingMiddleTerm)
    ));
}

#[test]
fn outer_term_distribution() {
    use TermRole::{Major, Middle, Minor};
    // I distributes nothing, E everything, O only its predicate
    assert_eq!(
        false,
        Statement::new(Mood::I, Middle, Minor)
            .is_outer_term_distributed()
            .unwrap()
    );
    assert_eq!(
        true,
        Statement::new(Mood::E, Major, Middle)
            .is_outer_term_distributed()
            .unwrap()
    );
    assert_eq!(
        false,
        Statement::new(Mood::O, Minor, Middle)
            .is_outer_term_distributed()
            .unwrap()
    );
    assert_eq!(
        true,
        Statement::new(Mood::O, Middle, Minor)
            .is_outer_term_distributed()
            .unwrap()
    );

    assert!(matches!(
        Statement::new(Mood::A, Middle, Middle).is_outer_term_distributed(),
        Err(Error::DoubleMiddleTerm)
    ));
    assert!(matches!(
        Statement::new(Mood::A, Minor, Major).is_outer_term_distributed(),
        Err(Error::MissingMiddleTerm)
    ));
}
