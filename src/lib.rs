//! Validity and fallacy checking for the 256 categorical syllogism forms.
//!
//! A form is three statement moods (major premise, minor premise,
//! conclusion) plus a figure, written `AAA-1`. [`assemble`] lays out the
//! three statements for a form and [`evaluate`] lists the formal fallacies
//! it commits, in a fixed order. An empty list means the form is valid.
//!
//! ```
//! use syllogism::{assemble, evaluate, Fallacy, Mood};
//!
//! let barbara = assemble(Mood::A, Mood::A, Mood::A, 1).unwrap();
//! assert!(evaluate(&barbara).unwrap().is_empty());
//!
//! let s = assemble(Mood::A, Mood::A, Mood::A, 2).unwrap();
//! assert_eq!(vec![Fallacy::UndistributedMiddle], evaluate(&s).unwrap());
//! ```

pub mod ast;
pub mod catalog;
pub mod config;
pub mod error;
pub mod parser;
pub mod shell;
pub mod statement;
pub mod syllogism;

pub use crate::ast::{Fallacy, Figure, Form, Mood, Quality, TermRole};
pub use crate::catalog::{Catalog, Filter};
pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::parser::{parse_command, parse_form, Command};
pub use crate::statement::{make_statement, Statement};
pub use crate::syllogism::{assemble, evaluate, evaluate_form, is_valid, Evaluation, Syllogism};
