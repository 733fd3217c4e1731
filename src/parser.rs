/*
 * turns form ids like "EAE-1" and shell input like "fallacy illicit_major"
 * into values the evaluator and catalog understand
 */
use nom::branch::alt;
use nom::character::complete::{char, digit1, multispace0, multispace1, satisfy};
use nom::combinator::{all_consuming, map, opt};
use nom::error::ErrorKind;
use nom::sequence::{delimited, pair, preceded, tuple};
use nom::{error_position, Err, IResult};
use regex::Regex;

use crate::ast::{Fallacy, Figure, Form, Mood};
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Check(Form),
    Valid,
    Invalid,
    Figure(Figure),
    Fallacy(Fallacy),
    Stats,
    Help,
    Quit,
}

// a form id that has the right shape but hasn't been checked against the
// mood and figure alphabets yet
type RawForm<'a> = (char, char, char, &'a str);

#[derive(Debug, PartialEq)]
enum Token<'a> {
    Form(RawForm<'a>),
    Word(&'a str, Option<&'a str>),
}

fn pattern<'a>(re: &str, i: &'a str) -> IResult<&'a str, &'a str> {
    let re = match Regex::new(re) {
        Ok(re) => re,
        Err(_) => return Err(Err::Failure(error_position!(i, ErrorKind::RegexpMatch))),
    };
    match re.find(i) {
        Some(m) if m.start() == 0 => Ok((&i[m.end()..], &i[..m.end()])),
        _ => Err(Err::Error(error_position!(i, ErrorKind::RegexpFind))),
    }
}

fn word(i: &str) -> IResult<&str, &str> {
    pattern(r"^[A-Za-z]+", i)
}

fn argument(i: &str) -> IResult<&str, &str> {
    pattern(r"^\w+", i)
}

fn letter(i: &str) -> IResult<&str, char> {
    satisfy(|c| c.is_ascii_alphabetic())(i)
}

fn form_id(i: &str) -> IResult<&str, RawForm> {
    map(
        tuple((letter, letter, letter, char('-'), digit1)),
        |(major, minor, conclusion, _, figure)| (major, minor, conclusion, figure),
    )(i)
}

fn token(i: &str) -> IResult<&str, Token> {
    all_consuming(delimited(
        multispace0,
        alt((
            map(form_id, Token::Form),
            map(
                pair(word, opt(preceded(multispace1, argument))),
                |(w, arg)| Token::Word(w, arg),
            ),
        )),
        multispace0,
    ))(i)
}

fn figure_number(digits: &str) -> Result<Figure> {
    let n = digits
        .parse::<u8>()
        .map_err(|_| Error::Parse(digits.to_owned()))?;
    Figure::new(n)
}

fn to_form((major, minor, conclusion, figure): RawForm) -> Result<Form> {
    Ok(Form::new(
        Mood::from_char(major)?,
        Mood::from_char(minor)?,
        Mood::from_char(conclusion)?,
        figure_number(figure)?,
    ))
}

/// Parses a form identifier such as `AAA-1`.
pub fn parse_form(input: &str) -> Result<Form> {
    let (_, raw) = all_consuming(delimited(multispace0, form_id, multispace0))(input)
        .map_err(|_| Error::Parse(input.to_owned()))?;
    to_form(raw)
}

pub fn parse_command(input: &str) -> Result<Command> {
    let (_, t) = token(input).map_err(|_| Error::Parse(input.to_owned()))?;
    let (w, arg) = match t {
        Token::Form(raw) => return Ok(Command::Check(to_form(raw)?)),
        Token::Word(w, arg) => (w.to_ascii_lowercase(), arg),
    };
    match (w.as_str(), arg) {
        ("valid", None) => Ok(Command::Valid),
        ("invalid", None) => Ok(Command::Invalid),
        ("figure", Some(n)) => Ok(Command::Figure(figure_number(n)?)),
        ("fallacy", Some(name)) => Ok(Command::Fallacy(name.parse()?)),
        ("stats", None) => Ok(Command::Stats),
        ("help", None) => Ok(Command::Help),
        ("quit", None) | ("exit", None) => Ok(Command::Quit),
        _ => Err(Error::Parse(input.trim().to_owned())),
    }
}

#[test]
fn test_word() {
    use nom::error::Error as NomError;
    assert_eq!(Ok(("", "valid")), word("valid"));
    assert_eq!(Ok((" 2", "figure")), word("figure 2"));
    assert_eq!(
        Err(Err::Error(NomError::new(" figure", ErrorKind::RegexpFind))),
        word(" figure")
    );
}

#[test]
fn test_form_id() {
    assert_eq!(Ok(("", ('A', 'A', 'A', "1"))), form_id("AAA-1"));
    assert_eq!(Ok((" goat", ('x', 'E', 'O', "17"))), form_id("xEO-17 goat"));
    assert!(form_id("AA-1").is_err());
    assert!(form_id("AAA1").is_err());
}

#[test]
fn test_parse_form() {
    let f = parse_form("  EAE-1 ").unwrap();
    assert_eq!("EAE-1", f.to_string());
    assert!(matches!(parse_form("XAA-1"), Err(Error::InvalidMood('X'))));
    assert!(matches!(parse_form("AAA-5"), Err(Error::InvalidFigure(5))));
    assert!(matches!(parse_form("AAA-1000"), Err(Error::Parse(_))));
    assert!(matches!(parse_form("AAA-1 extra"), Err(Error::Parse(_))));
    assert!(matches!(parse_form(""), Err(Error::Parse(_))));
}

#[test]
fn test_parse_command() {
    assert_eq!(
        Command::Check(parse_form("IEO-4").unwrap()),
        parse_command("IEO-4").unwrap()
    );
    assert_eq!(Command::Valid, parse_command("valid").unwrap());
    assert_eq!(Command::Invalid, parse_command(" INVALID ").unwrap());
    assert_eq!(
        Command::Figure(Figure::new(3).unwrap()),
        parse_command("figure 3").unwrap()
    );
    assert_eq!(
        Command::Fallacy(Fallacy::IllicitMajor),
        parse_command("fallacy illicit_major").unwrap()
    );
    assert_eq!(Command::Stats, parse_command("stats").unwrap());
    assert_eq!(Command::Help, parse_command("help").unwrap());
    assert_eq!(Command::Quit, parse_command("exit").unwrap());
    assert_eq!(Command::Quit, parse_command("Quit").unwrap());
}

#[test]
fn test_parse_command_errors() {
    assert!(matches!(parse_command("figure 9"), Err(Error::InvalidFigure(9))));
    assert!(matches!(
        parse_command("fallacy begging_the_question"),
        Err(Error::UnknownFallacy(_))
    ));
    assert!(matches!(parse_command("figure"), Err(Error::Parse(_))));
    assert!(matches!(parse_command("valid 2"), Err(Error::Parse(_))));
    assert!(matches!(parse_command("frobnicate"), Err(Error::Parse(_))));
    assert!(matches!(parse_command("AAQ-1"), Err(Error::InvalidMood('Q'))));
}
