//! Top-level application orchestration.
//!
//! `src/main.rs` only maps the result to an exit code; this module parses
//! arguments, loads configuration, installs logging and runs the command.

use clap::Parser;
use rand::Rng;
use tracing::{debug, info};

use crate::cli::{Cli, Command, GenerateArgs, PredictArgs, ScoreArgs, ShowArgs, StatsArgs, TrainArgs, UserCommand};
use crate::config::AppConfig;
use crate::data::rng_from_seed;
use crate::error::AppError;
use crate::store::{JsonFileStore, UserRegistry};

pub mod pipeline;

/// Entry point for the `nova` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    crate::telemetry::init(&config.telemetry)?;
    debug!(?config, "loaded configuration");

    match cli.command {
        Command::Predict(args) => handle_predict(args, &config),
        Command::Show(args) => handle_show(args),
        Command::Generate(args) => handle_generate(args, &config),
        Command::Stats(args) => handle_stats(args, &config),
        Command::Score(args) => handle_score(args, &config),
        Command::Train(args) => handle_train(args, &config),
        Command::User(cmd) => handle_user(cmd, &config),
    }
}

/// A flag seed wins over `NOVA_SEED`; neither means entropy.
fn resolve_seed(flag: Option<u64>, config: &AppConfig) -> Option<u64> {
    flag.or(config.seed)
}

fn handle_predict(args: PredictArgs, config: &AppConfig) -> Result<(), AppError> {
    let mut rng = rng_from_seed(resolve_seed(args.seed, config));
    let report = pipeline::run_prediction(args.features(), args.validate, &mut rng)?;

    if args.json {
        println!("{}", crate::io::prediction_to_json(&report.prediction)?);
    } else {
        println!(
            "{}",
            crate::report::format_prediction(&report.prediction, &report.insights, report.potential)
        );
    }

    if let Some(path) = &args.output {
        crate::io::write_prediction_json(path, &report.prediction)?;
        info!(path = %path.display(), "wrote prediction JSON");
    }
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let report = pipeline::load_prediction(&args.file)?;
    println!(
        "{}",
        crate::report::format_prediction(&report.prediction, &report.insights, report.potential)
    );
    Ok(())
}

fn handle_generate(args: GenerateArgs, config: &AppConfig) -> Result<(), AppError> {
    let count = match args.count {
        Some(n) => n,
        None => i64::try_from(config.dataset_size)
            .map_err(|_| AppError::invalid_argument("NOVA_DATASET_SIZE is too large."))?,
    };
    let mut rng = rng_from_seed(resolve_seed(args.seed, config));
    let run = pipeline::run_generate(count, &mut rng)?;

    print_dataset(&run, args.preview);

    if let Some(path) = &args.export {
        crate::io::write_records_csv(path, &run.records)?;
        println!("Exported {} records to {}", run.records.len(), path.display());
    }
    Ok(())
}

fn handle_stats(args: StatsArgs, config: &AppConfig) -> Result<(), AppError> {
    let path = match args.file {
        Some(path) => crate::cli::picker::validate_dataset_path(&path)?,
        None => crate::cli::picker::prompt_for_dataset()?,
    };

    let mut rng = rng_from_seed(resolve_seed(args.seed, config));
    let data = crate::io::load_records(&path, &mut rng)?;
    let run = pipeline::DatasetRun::new(data.records);

    println!("Dataset: {}", path.display());
    if data.rescored > 0 {
        println!("Recomputed credit_score for {} row(s).", data.rescored);
    }
    if let Some(stats) = &run.stats {
        println!("{}", crate::report::format_stats(stats));
        if args.chart {
            println!("{}", crate::plot::render_distribution_charts(stats, args.width));
        }
    }
    Ok(())
}

fn handle_score(args: ScoreArgs, config: &AppConfig) -> Result<(), AppError> {
    let path = crate::cli::picker::validate_dataset_path(&args.file)?;
    let seed = resolve_seed(args.seed, config);

    // Blank scores filled during ingest are overwritten by the batch pass.
    let data = crate::io::load_records(&path, &mut rng_from_seed(seed))?;
    let base_seed = match seed {
        Some(s) => s,
        None => rand::thread_rng().r#gen::<u64>(),
    };
    let run = pipeline::run_rescore(&data.records, base_seed);

    print_dataset(&run, args.preview);

    if let Some(out) = &args.export {
        crate::io::write_records_csv(out, &run.records)?;
        println!("Exported {} records to {}", run.records.len(), out.display());
    }
    Ok(())
}

fn handle_train(args: TrainArgs, config: &AppConfig) -> Result<(), AppError> {
    let mut rng = rng_from_seed(resolve_seed(args.seed, config));
    let run = pipeline::run_training(&mut rng);

    if args.json {
        let json = serde_json::to_string_pretty(&run)
            .map_err(|e| AppError::io(format!("Failed to serialize training results: {e}")))?;
        println!("{json}");
    } else {
        println!("{}", crate::report::format_training(&run));
    }
    Ok(())
}

fn handle_user(cmd: UserCommand, config: &AppConfig) -> Result<(), AppError> {
    let mut registry = UserRegistry::new(JsonFileStore::open(&config.store_path)?);

    match cmd {
        UserCommand::Signup { name, email, password } => {
            let user = registry.signup(&name, &email, &password)?;
            println!("Signed up and logged in as {} <{}> (id {})", user.name, user.email, user.id);
        }
        UserCommand::Login { email, password } => {
            let user = registry.login(&email, &password)?;
            println!("Logged in as {} <{}>", user.name, user.email);
        }
        UserCommand::Logout => {
            registry.logout()?;
            println!("Logged out.");
        }
        UserCommand::Whoami => match registry.current_user()? {
            Some(user) => println!("{} <{}> (id {})", user.name, user.email, user.id),
            None => println!("Not logged in."),
        },
        UserCommand::List => {
            let users = registry.list_users()?;
            let current = registry.current_user()?;
            print!(
                "{}",
                crate::report::format_users(&users, current.as_ref().map(|u| u.id.as_str()))
            );
        }
    }
    Ok(())
}

fn print_dataset(run: &pipeline::DatasetRun, preview: usize) {
    if preview > 0 && !run.records.is_empty() {
        println!("{}", crate::report::format_records(&run.records, preview));
    }
    match &run.stats {
        Some(stats) => println!("{}", crate::report::format_stats(stats)),
        None => println!("Records: 0"),
    }
}
