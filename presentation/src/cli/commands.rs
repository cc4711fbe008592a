//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for price-predictor
#[derive(Parser, Debug)]
#[command(name = "price-predictor")]
#[command(author, version, about = "Serve price predictions from a fitted preprocessor and model")]
#[command(long_about = r#"
price-predictor loads a fitted preprocessor, a fitted regression model and a
feature list at startup, then serves predictions over HTTP:

  GET  /               form with one input per feature
  POST /predict        single-record prediction (form fields)
  POST /batch_predict  CSV upload (field "file"), returns the CSV with a
                       prediction column appended

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./predictor.toml      Project-level config
3. ~/.config/price-predictor/config.toml   Global config

Example:
  price-predictor --root /srv/app
  price-predictor serve --port 8080
  price-predictor batch houses.csv -o priced.csv
  price-predictor predict -f area_sqft=1000 -f age_years=5 -f city=Pune
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Application root that relative artifact paths resolve against
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands; serving is the default
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Predict every row of a CSV file
    Batch {
        /// Input CSV with one column per feature
        input: PathBuf,

        /// Output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Predict a single record
    Predict {
        /// Feature value (repeat for every feature)
        #[arg(short = 'f', long = "field", value_name = "NAME=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
}

impl Cli {
    /// The subcommand to run, defaulting to `serve`
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            host: None,
            port: None,
        })
    }
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_serve() {
        let cli = Cli::parse_from(["price-predictor"]);
        assert_eq!(
            cli.command(),
            Command::Serve {
                host: None,
                port: None
            }
        );
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from(["price-predictor", "serve", "--port", "8080", "--root", "demo"]);
        assert_eq!(
            cli.command(),
            Command::Serve {
                host: None,
                port: Some(8080)
            }
        );
        assert_eq!(cli.root, Some(PathBuf::from("demo")));
    }

    #[test]
    fn test_predict_fields() {
        let cli = Cli::parse_from([
            "price-predictor",
            "predict",
            "-f",
            "area_sqft=1000",
            "--field",
            "city=New Delhi",
        ]);
        let Command::Predict { fields } = cli.command() else {
            panic!("expected predict");
        };
        assert_eq!(
            fields,
            vec![
                ("area_sqft".to_string(), "1000".to_string()),
                ("city".to_string(), "New Delhi".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_field_rejects_bad_pairs() {
        assert!(parse_field("novalue").is_err());
        assert!(parse_field("=1").is_err());
        assert_eq!(
            parse_field("a=b=c").unwrap(),
            ("a".to_string(), "b=c".to_string())
        );
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::parse_from(["price-predictor", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }
}
