use clap::{Parser, Subcommand};

use syllogism::shell;
use syllogism::{parse_form, Catalog, Config, Figure, Filter, Result};

/// Lists the categorical syllogism forms and the fallacies each commits.
#[derive(Parser, Debug)]
#[command(name = "syllogism")]
#[command(version)]
#[command(about = "Validity of the 256 categorical syllogism forms", long_about = None)]
struct Args {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Print every form with its verdict (the default)
    List {
        /// Only valid forms
        #[arg(long, conflicts_with = "invalid")]
        valid: bool,

        /// Only invalid forms
        #[arg(long)]
        invalid: bool,

        /// Only forms in this figure
        #[arg(long, value_parser = parse_figure)]
        figure: Option<Figure>,
    },
    /// Evaluate the given forms, e.g. `check AAA-1 IEO-4`
    Check {
        #[arg(required = true)]
        forms: Vec<String>,
    },
    /// Count valid forms and each fallacy
    Stats,
    /// Interactive shell
    Repl,
}

fn parse_figure(s: &str) -> std::result::Result<Figure, String> {
    let n = s.parse::<u8>().map_err(|e| e.to_string())?;
    Figure::new(n).map_err(|e| e.to_string())
}

fn run(args: Args) -> Result<()> {
    let command = args.command.unwrap_or(Cmd::List {
        valid: false,
        invalid: false,
        figure: None,
    });
    match command {
        Cmd::List {
            valid,
            invalid,
            figure,
        } => {
            let validity = match (valid, invalid) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let catalog = Catalog::build()?;
            let evaluations = catalog.evaluations(Filter { validity, figure })?;
            for e in evaluations {
                println!("{}", e);
            }
        }
        Cmd::Check { forms } => {
            let catalog = Catalog::build()?;
            for id in forms {
                println!("{}", catalog.lookup(parse_form(&id)?)?);
            }
        }
        Cmd::Stats => println!("{}", shell::stats(&Catalog::build()?)?),
        Cmd::Repl => shell::run(&Config::from_env(), &Catalog::build()?)?,
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
