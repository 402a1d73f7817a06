use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::core::{EngineConfig, Rules};
use crate::types::{DEFAULT_COLS, DEFAULT_ROWS};

/// Options for one terminal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub rows: usize,
    pub cols: usize,
    /// Piece seed; `None` picks one from the clock.
    pub seed: Option<u64>,
    /// JSON file overriding (some of) the rules table.
    pub rules_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: None,
            rules_path: None,
        }
    }
}

impl RunConfig {
    /// Build and validate the engine configuration, reading the rules file if any.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let rules = match &self.rules_path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading rules file {}", path.display()))?;
                parse_rules(&text)
                    .with_context(|| format!("parsing rules file {}", path.display()))?
            }
            None => Rules::default(),
        };

        let config = EngineConfig::new(self.rows, self.cols).with_rules(rules);
        config.validate()?;
        Ok(config)
    }
}

/// Parse a rules table from JSON; missing fields keep their defaults.
pub fn parse_rules(json: &str) -> Result<Rules> {
    let rules: Rules = serde_json::from_str(json)?;
    rules.validate()?;
    Ok(rules)
}

/// Parse command-line arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--rows" | "--cols" | "--seed" | "--rules" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for {}", flag))?;
                match flag {
                    "--rows" => config.rows = parse_number(flag, v)?,
                    "--cols" => config.cols = parse_number(flag, v)?,
                    "--seed" => config.seed = Some(parse_number(flag, v)?),
                    _ => config.rules_path = Some(PathBuf::from(v)),
                }
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_arguments() {
        assert_eq!(parse_args(&[]).unwrap(), RunConfig::default());
    }

    #[test]
    fn parses_every_flag() {
        let config = parse_args(&args(&[
            "--rows", "12", "--cols", "8", "--seed", "42", "--rules", "r.json",
        ]))
        .unwrap();
        assert_eq!(config.rows, 12);
        assert_eq!(config.cols, 8);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.rules_path, Some(PathBuf::from("r.json")));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(&args(&["--rows"])).is_err());
        assert!(parse_args(&args(&["--cols", "wide"])).is_err());
        assert!(parse_args(&args(&["--fast"])).is_err());
    }

    #[test]
    fn small_field_fails_validation() {
        let config = RunConfig {
            rows: 3,
            ..RunConfig::default()
        };
        assert!(config.engine_config().is_err());
    }

    #[test]
    fn partial_rules_keep_defaults() {
        let rules = parse_rules(r#"{ "empty_row_bonus": 25 }"#).unwrap();
        assert_eq!(rules.empty_row_bonus, 25);
        assert_eq!(rules.line_scores, vec![10, 30, 70, 150]);
    }

    #[test]
    fn invalid_rules_are_rejected() {
        assert!(parse_rules(r#"{ "line_scores": [] }"#).is_err());
        assert!(parse_rules("not json").is_err());
    }
}
