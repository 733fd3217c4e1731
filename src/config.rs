//! Interactive shell settings, read from the environment.

use std::path::PathBuf;

pub const ENV_HISTORY: &str = "SYLLOGISM_HISTORY";
pub const ENV_PROMPT: &str = "SYLLOGISM_PROMPT";

const DEFAULT_PROMPT: &str = ">> ";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Where shell history is loaded from and saved to. No history when unset.
    pub history_file: Option<PathBuf>,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            history_file: None,
            prompt: DEFAULT_PROMPT.to_owned(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars<F: Fn(&str) -> Option<String>>(var: F) -> Self {
        let mut config = Config::default();
        if let Some(path) = var(ENV_HISTORY).filter(|p| !p.is_empty()) {
            config.history_file = Some(PathBuf::from(path));
        }
        if let Some(prompt) = var(ENV_PROMPT) {
            config.prompt = prompt;
        }
        config
    }
}

#[test]
fn defaults_without_env() {
    let c = Config::from_vars(|_| None);
    assert_eq!(Config::default(), c);
    assert_eq!(">> ", c.prompt);
}

#[test]
fn env_overrides() {
    let c = Config::from_vars(|key| match key {
        ENV_HISTORY => Some("/tmp/syllogism_history".to_owned()),
        ENV_PROMPT => Some("? ".to_owned()),
        _ => None,
    });
    assert_eq!(Some(PathBuf::from("/tmp/syllogism_history")), c.history_file);
    assert_eq!("? ", c.prompt);

    // an empty path means no history
    let c = Config::from_vars(|key| match key {
        ENV_HISTORY => Some(String::new()),
        _ => None,
    });
    assert_eq!(None, c.history_file);
}
