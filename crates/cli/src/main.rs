use std::sync::Arc;

use clap::{Parser, Subcommand};
use dhanvantri_core::{
    config::default_budget_from_env_value, CoreConfig, PrescriptionReview, RuleEngine,
    SymptomCheck, DEFAULT_TIPS_CATEGORY,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "dhanvantri")]
#[command(about = "Dhanvantri health rule engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check symptoms and get specialist, hospital and first-aid recommendations
    Symptoms {
        /// Free-text symptoms, one per argument
        #[arg(required = true)]
        symptoms: Vec<String>,
        /// Patient age (optional)
        #[arg(long)]
        age: Option<u32>,
        /// Patient gender (optional)
        #[arg(long)]
        gender: Option<String>,
        /// Hospital budget (defaults to DHANVANTRI_DEFAULT_BUDGET or 2000)
        #[arg(long)]
        budget: Option<f64>,
    },
    /// Analyze prescription text
    Prescription {
        /// Prescription text
        text: String,
        /// Patient age (optional)
        #[arg(long)]
        age: Option<u32>,
        /// Existing condition (repeatable)
        #[arg(long = "condition")]
        conditions: Vec<String>,
    },
    /// Show health tips for a category
    Tips {
        /// general, nutrition, exercise or mental_health
        category: Option<String>,
    },
    /// Ask the health assistant
    Chat {
        /// Message for the assistant
        message: String,
    },
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Runs one subcommand against `engine` and returns the text to print.
///
/// Engine errors are returned so `main` exits with a non-zero status.
fn run(command: Option<Commands>, engine: &RuleEngine) -> CliResult<String> {
    match command {
        Some(Commands::Symptoms {
            symptoms,
            age,
            gender,
            budget,
        }) => {
            let request = SymptomCheck {
                symptoms,
                age,
                gender,
                budget,
            };
            let result = engine
                .check_symptoms(&request)
                .map_err(|e| format!("Error checking symptoms: {}", e))?;
            to_json(&result)
        }
        Some(Commands::Prescription {
            text,
            age,
            conditions,
        }) => {
            let review = PrescriptionReview {
                patient_age: age,
                existing_conditions: conditions,
                ..PrescriptionReview::new(text)
            };
            let analysis = engine
                .analyze_prescription(&review)
                .map_err(|e| format!("Error analyzing prescription: {}", e))?;
            to_json(&analysis)
        }
        Some(Commands::Tips { category }) => {
            to_json(&engine.health_tips(category.as_deref().unwrap_or(DEFAULT_TIPS_CATEGORY)))
        }
        Some(Commands::Chat { message }) => {
            let reply = engine
                .assistant_reply(&message)
                .map_err(|e| format!("Error replying to message: {}", e))?;
            to_json(&reply)
        }
        None => Ok("Use --help to see available commands".into()),
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let default_budget =
        default_budget_from_env_value(std::env::var("DHANVANTRI_DEFAULT_BUDGET").ok())?;
    let engine = RuleEngine::new(Arc::new(CoreConfig::new(default_budget)?));

    println!("{}", run(cli.command, &engine)?);
    Ok(())
}
