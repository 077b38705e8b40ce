//! Command-line parsing for the `nova` credit scoring tool.
//!
//! Argument parsing stays here; dispatch lives in `app`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{FeatureRecord, Gender, Location};

pub mod picker;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "nova", version, about = "Nova alternative credit scoring for gig-economy workers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score one worker profile and print level, confidence and recommendations.
    Predict(PredictArgs),
    /// Re-render a prediction saved with `predict --output`.
    Show(ShowArgs),
    /// Generate a synthetic labeled dataset.
    Generate(GenerateArgs),
    /// Print statistics for a dataset CSV.
    Stats(StatsArgs),
    /// Rescore every row of a dataset CSV in parallel.
    Score(ScoreArgs),
    /// Run the simulated model comparison.
    Train(TrainArgs),
    /// Manage the local user registry.
    #[command(subcommand)]
    User(UserCommand),
}

#[derive(Debug, Args, Clone)]
pub struct PredictArgs {
    #[arg(long, value_enum, ignore_case = true, default_value_t = Gender::Male)]
    pub gender: Gender,

    #[arg(long, default_value_t = 35, allow_negative_numbers = true)]
    pub age: i32,

    #[arg(long, value_enum, ignore_case = true, default_value_t = Location::Urban)]
    pub location: Location,

    /// Monthly earnings in dollars.
    #[arg(long, default_value_t = 2500.0, allow_negative_numbers = true)]
    pub earnings: f64,

    /// Trips per month.
    #[arg(long, default_value_t = 105, allow_negative_numbers = true)]
    pub trips: i32,

    /// Average customer rating (1-5).
    #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
    pub rating: f64,

    /// Consistency penalty (0 is best).
    #[arg(long, default_value_t = 0.10, allow_negative_numbers = true)]
    pub consistency: f64,

    /// Reject values outside their documented ranges instead of scoring them.
    #[arg(long)]
    pub validate: bool,

    /// Random seed for the score jitter and confidence.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the prediction as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the prediction JSON to a file.
    #[arg(long, value_name = "JSON")]
    pub output: Option<PathBuf>,
}

impl PredictArgs {
    pub fn features(&self) -> FeatureRecord {
        FeatureRecord {
            gender: self.gender,
            age: self.age,
            location: self.location,
            monthly_earnings: self.earnings,
            trip_frequency: self.trips,
            avg_rating: self.rating,
            consistency: self.consistency,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Prediction JSON file.
    #[arg(value_name = "JSON")]
    pub file: PathBuf,
}

#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Number of records (defaults to NOVA_DATASET_SIZE).
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the dataset to a CSV file.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Number of sample rows to print.
    #[arg(long, default_value_t = 10)]
    pub preview: usize,
}

#[derive(Debug, Args, Clone)]
pub struct StatsArgs {
    /// Dataset CSV. Prompts for one when omitted.
    #[arg(short = 'f', long, value_name = "CSV")]
    pub file: Option<PathBuf>,

    /// Render distribution bar charts.
    #[arg(long)]
    pub chart: bool,

    /// Chart bar width (columns).
    #[arg(long, default_value_t = 40)]
    pub width: usize,

    /// Seed for rescoring rows that have no credit_score.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Args, Clone)]
pub struct ScoreArgs {
    /// Dataset CSV to rescore.
    #[arg(short = 'f', long, value_name = "CSV")]
    pub file: PathBuf,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the rescored dataset to a CSV file.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Number of sample rows to print.
    #[arg(long, default_value_t = 10)]
    pub preview: usize,
}

#[derive(Debug, Args, Clone)]
pub struct TrainArgs {
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create an account and log in.
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    /// Show the logged-in user.
    Whoami,
    /// List registered users.
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn predict_defaults_match_form() {
        let cli = Cli::parse_from(["nova", "predict"]);
        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(args.features(), FeatureRecord::default());
    }

    #[test]
    fn negative_count_parses() {
        let cli = Cli::parse_from(["nova", "generate", "-n", "-5"]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.count, Some(-5));
    }

    #[test]
    fn show_takes_a_positional_file() {
        let cli = Cli::parse_from(["nova", "show", "saved.json"]);
        let Command::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.file, PathBuf::from("saved.json"));
    }

    #[test]
    fn user_subcommands_parse() {
        let cli = Cli::parse_from(["nova", "user", "login", "--email", "a@b.c", "--password", "pw"]);
        assert!(matches!(cli.command, Command::User(UserCommand::Login { .. })));
    }
}
