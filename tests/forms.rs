use std::collections::HashSet;

use syllogism::{
    assemble, evaluate, evaluate_form, is_valid, make_statement, Error, Fallacy, Form, Mood,
    Quality, TermRole,
};

#[test]
fn every_mood_letter_builds_its_statement() {
    let expected = [
        ('A', true, false, Quality::Affirmative),
        ('E', true, true, Quality::Negative),
        ('I', false, false, Quality::Affirmative),
        ('O', false, true, Quality::Negative),
    ];
    for &(letter, subject, predicate, quality) in expected.iter() {
        let s = make_statement(letter, TermRole::Minor, TermRole::Middle).unwrap();
        assert_eq!(subject, s.subject_distributed);
        assert_eq!(predicate, s.predicate_distributed);
        assert_eq!(quality, s.quality);
    }
    for letter in "BXaeio?".chars() {
        assert!(matches!(
            make_statement(letter, TermRole::Minor, TermRole::Middle),
            Err(Error::InvalidMood(c)) if c == letter
        ));
    }
}

#[test]
fn conclusion_is_always_minor_then_major() {
    for form in Form::all() {
        let s = assemble(form.major, form.minor, form.conclusion, form.figure.number()).unwrap();
        assert_eq!(TermRole::Minor, s.conclusion().subject);
        assert_eq!(TermRole::Major, s.conclusion().predicate);
    }
}

#[test]
fn evaluation_is_deterministic() {
    for form in Form::all() {
        let n = form.figure.number();
        let first = evaluate(&assemble(form.major, form.minor, form.conclusion, n).unwrap()).unwrap();
        let second =
            evaluate(&assemble(form.major, form.minor, form.conclusion, n).unwrap()).unwrap();
        assert_eq!(first, second, "{}", form);
    }
}

#[test]
fn fallacies_are_distinct_and_ordered() {
    let order: Vec<Fallacy> = Fallacy::ALL.to_vec();
    for form in Form::all() {
        let fallacies = evaluate_form(form).unwrap().fallacies;
        assert!(fallacies.len() <= 6);
        let distinct: HashSet<Fallacy> = fallacies.iter().copied().collect();
        assert_eq!(distinct.len(), fallacies.len(), "{}", form);
        let positions: Vec<usize> = fallacies
            .iter()
            .map(|f| order.iter().position(|o| o == f).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(sorted, positions, "{}", form);
    }
}

#[test]
fn valid_means_no_fallacies() {
    let mut valid = 0;
    for form in Form::all() {
        let s = assemble(form.major, form.minor, form.conclusion, form.figure.number()).unwrap();
        let fallacies = evaluate(&s).unwrap();
        assert_eq!(fallacies.is_empty(), is_valid(&s).unwrap(), "{}", form);
        if fallacies.is_empty() {
            valid += 1;
        }
    }
    assert_eq!(24, valid);
}

#[test]
fn classical_verdicts() {
    let cases: &[(&str, &[Fallacy])] = &[
        ("AAA-1", &[]),
        ("EAE-1", &[]),
        ("AII-3", &[]),
        ("OAO-3", &[]),
        ("AOO-2", &[]),
        ("AAA-2", &[Fallacy::UndistributedMiddle]),
        ("IEO-4", &[Fallacy::IllicitMajor]),
        ("AAA-3", &[Fallacy::IllicitMinor]),
        ("EEE-1", &[Fallacy::TwoNegativePremises]),
        ("EAA-1", &[Fallacy::NegativePremiseAffirmativeConclusion]),
    ];
    for &(id, expected) in cases {
        let form = syllogism::parse_form(id).unwrap();
        assert_eq!(expected.to_vec(), evaluate_form(form).unwrap().fallacies, "{}", id);
    }
}

#[test]
fn bad_identifiers_are_rejected() {
    assert!(matches!(
        assemble(Mood::A, Mood::A, Mood::A, 5),
        Err(Error::InvalidFigure(5))
    ));
    assert!(matches!(
        syllogism::parse_form("XAA-1"),
        Err(Error::InvalidMood('X'))
    ));
}
