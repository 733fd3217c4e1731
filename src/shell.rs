use log::{debug, warn};
use rustyline::error::ReadlineError;
use rustyline::Editor;

use crate::ast::Form;
use crate::catalog::{Catalog, Filter};
use crate::config::Config;
use crate::error::Result;
use crate::parser::{parse_command, Command};
use crate::syllogism::Evaluation;

const HELP: &str = "\
<form>            evaluate a form, e.g. EAE-1
valid | invalid   list valid or invalid forms
figure <n>        list every form in figure n
fallacy <name>    list forms committing a fallacy, e.g. fallacy illicit_major
stats             count valid forms and each fallacy
help              show this message
quit | exit       leave the shell";

#[derive(Debug, PartialEq)]
pub enum Reply {
    Output(String),
    Quit,
}

pub fn lines(evaluations: &[Evaluation]) -> String {
    let lines: Vec<String> = evaluations.iter().map(|e| e.to_string()).collect();
    lines.join("\n")
}

pub fn stats(catalog: &Catalog) -> Result<String> {
    let valid = catalog.evaluations(Filter {
        validity: Some(true),
        figure: None,
    })?;
    let mut out = format!("{} of {} forms are valid", valid.len(), catalog.len()?);
    for (fallacy, n) in catalog.fallacy_counts()? {
        out.push_str(&format!("\n{}: {}", fallacy, n));
    }
    Ok(out)
}

fn forms(forms: &[Form]) -> String {
    let ids: Vec<String> = forms.iter().map(|f| f.to_string()).collect();
    ids.join(", ")
}

pub fn respond(catalog: &Catalog, command: Command) -> Result<Reply> {
    let out = match command {
        Command::Check(form) => catalog.lookup(form)?.to_string(),
        Command::Valid => lines(&catalog.evaluations(Filter {
            validity: Some(true),
            figure: None,
        })?),
        Command::Invalid => lines(&catalog.evaluations(Filter {
            validity: Some(false),
            figure: None,
        })?),
        Command::Figure(figure) => lines(&catalog.evaluations(Filter {
            validity: None,
            figure: Some(figure),
        })?),
        Command::Fallacy(fallacy) => forms(&catalog.committing(fallacy)?),
        Command::Stats => stats(catalog)?,
        Command::Help => HELP.to_owned(),
        Command::Quit => return Ok(Reply::Quit),
    };
    Ok(Reply::Output(out))
}

pub fn run(config: &Config, catalog: &Catalog) -> Result<()> {
    let mut rl = Editor::<()>::new();
    if let Some(path) = &config.history_file {
        if rl.load_history(path).is_err() {
            debug!("no previous history at {}", path.display());
        }
    }
    loop {
        let line = match rl.readline(&config.prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => return Err(err.into()),
        };
        if line.trim().is_empty() {
            continue;
        }
        rl.add_history_entry(line.as_str());
        let reply = parse_command(&line).and_then(|command| respond(catalog, command));
        match reply {
            Ok(Reply::Output(out)) => println!("{}", out),
            Ok(Reply::Quit) => break,
            Err(err) => println!("Error: {}", err),
        }
    }
    if let Some(path) = &config.history_file {
        if let Err(err) = rl.save_history(path) {
            warn!("could not save history to {}: {}", path.display(), err);
        }
    }
    Ok(())
}

#[test]
fn check_a_form() {
    let c = Catalog::build().unwrap();
    assert_eq!(
        Reply::Output("IEO-4: ILLICIT_MAJOR".to_owned()),
        respond(&c, parse_command("IEO-4").unwrap()).unwrap()
    );
    assert_eq!(
        Reply::Output("EAE-1: VALID".to_owned()),
        respond(&c, parse_command("EAE-1").unwrap()).unwrap()
    );
}

#[test]
fn list_replies() {
    let c = Catalog::build().unwrap();
    match respond(&c, Command::Valid).unwrap() {
        Reply::Output(out) => {
            assert_eq!(24, out.lines().count());
            assert!(out.lines().all(|l| l.ends_with(": VALID")));
        }
        Reply::Quit => panic!("valid should not quit"),
    }
    match respond(&c, parse_command("figure 1").unwrap()).unwrap() {
        Reply::Output(out) => {
            assert_eq!(64, out.lines().count());
            assert!(out.starts_with("AAA-1: VALID\nAAE-1: "));
        }
        Reply::Quit => panic!("figure should not quit"),
    }
    match respond(&c, parse_command("fallacy two_affirmative_premises_negative_conclusion").unwrap()).unwrap() {
        Reply::Output(out) => assert!(out.starts_with("AAE-1, AAE-2, AAE-3, AAE-4, AAO-1")),
        Reply::Quit => panic!("fallacy should not quit"),
    }
    assert_eq!(Reply::Quit, respond(&c, Command::Quit).unwrap());
}

#[test]
fn stats_summary() {
    let c = Catalog::build().unwrap();
    let out = stats(&c).unwrap();
    let mut lines = out.lines();
    assert_eq!(Some("24 of 256 forms are valid"), lines.next());
    assert_eq!(Some("UNDISTRIBUTED_MIDDLE: 64"), lines.next());
    assert_eq!(
        Some("TWO_AFFIRMATIVE_PREMISES_NEGATIVE_CONCLUSION: 32"),
        lines.last()
    );
}
