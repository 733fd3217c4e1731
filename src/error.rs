//! Error types for building and evaluating syllogism forms.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A mood letter outside A, E, I, O.
    #[error("unknown mood {0:?}, expected one of A, E, I, O")]
    InvalidMood(char),

    /// A figure number outside 1..=4.
    #[error("unknown figure {0}, expected 1, 2, 3 or 4")]
    InvalidFigure(u8),

    /// A premise with no middle term in either position.
    #[error("statement does not include a middle term")]
    MissingMiddleTerm,

    /// A premise with the middle term in both positions.
    #[error("statement has two middle terms")]
    DoubleMiddleTerm,

    #[error("unknown fallacy {0:?}")]
    UnknownFallacy(String),

    #[error("cannot parse {0:?}")]
    Parse(String),

    #[error("catalog error: {0}")]
    Catalog(#[from] rusqlite::Error),

    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

#[test]
fn display_names_the_offending_value() {
    assert_eq!(
        "unknown mood 'X', expected one of A, E, I, O",
        Error::InvalidMood('X').to_string()
    );
    assert_eq!(
        "unknown figure 5, expected 1, 2, 3 or 4",
        Error::InvalidFigure(5).to_string()
    );
    assert!(Error::UnknownFallacy("nope".to_owned())
        .to_string()
        .contains("nope"));
}
