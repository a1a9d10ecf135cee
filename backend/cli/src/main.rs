use anyhow::Result;
use clap::{Parser, Subcommand};

use kura_cron::{describe, validate, ExpressionParts, PRESETS};

#[derive(Parser)]
#[command(name = "kura")]
#[command(about = "Kura — backup schedule console tools")]
#[command(version)]
struct Cli {
    /// Emit results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a 5-field cron expression
    Validate {
        /// Expression to check, e.g. "0 2 * * *"
        expression: String,
    },
    /// Describe a cron expression in plain language
    Describe {
        expression: String,
    },
    /// Assemble an expression from per-field values (empty fields become *)
    Build {
        #[arg(long, default_value = "")]
        minute: String,
        #[arg(long, default_value = "")]
        hour: String,
        #[arg(long, default_value = "")]
        day: String,
        #[arg(long, default_value = "")]
        month: String,
        #[arg(long, default_value = "")]
        day_of_week: String,
    },
    /// List the built-in schedule presets
    Presets,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { expression } => {
            let result = validate(&expression);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.message);
            }
            if !result.valid {
                std::process::exit(1);
            }
        }
        Commands::Describe { expression } => {
            let text = describe(&expression);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "expression": expression,
                        "description": text,
                    }))?
                );
            } else {
                println!("{text}");
            }
        }
        Commands::Build { minute, hour, day, month, day_of_week } => {
            let parts = ExpressionParts { minute, hour, day, month, day_of_week };
            let expression = parts.assemble();
            let result = validate(&expression);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "expression": expression,
                        "valid": result.valid,
                        "message": result.message,
                        "description": describe(&expression),
                    }))?
                );
            } else {
                println!("{expression}");
                println!("{}", result.message);
                if result.valid {
                    println!("{}", describe(&expression));
                }
            }
            if !result.valid {
                std::process::exit(1);
            }
        }
        Commands::Presets => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&PRESETS)?);
            } else {
                for preset in PRESETS {
                    println!(
                        "{:<18} {:<15} {}  ({})",
                        preset.id,
                        preset.expression,
                        preset.label,
                        describe(preset.expression)
                    );
                }
            }
        }
    }

    Ok(())
}
