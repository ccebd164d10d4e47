use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use std::path::PathBuf;

use completeai_core::completion::{
    CompletionEngine, CompletionOutcome, CursorPosition, EngineOptions,
};
use completeai_core::config::{ApiKeySources, CompleteAiConfig, get_api_key, load_dotenv};
use completeai_core::llm::{error_display, make_provider};

#[derive(Parser, Debug)]
#[command(
    name = "completeai",
    version,
    about = "AI-powered code completion helper backed by OpenRouter"
)]
struct Cli {
    /// Model ID override, e.g. meta-llama/llama-3.3-70b-instruct
    #[arg(long, global = true)]
    model: Option<String>,

    /// API key env var to read
    #[arg(long, global = true, default_value = "OPENROUTER_API_KEY")]
    api_key_env: String,

    /// Workspace root; defaults to current directory
    #[arg(long, global = true)]
    workspace: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a completion for a file at a cursor position
    Complete {
        file: PathBuf,

        /// Zero-based cursor line
        #[arg(long)]
        line: usize,

        /// Zero-based cursor column (reserved; extraction is line-based)
        #[arg(long, default_value_t = 0)]
        column: usize,

        /// Language tag, e.g. javascript, python, rust
        #[arg(long, default_value = "javascript")]
        language: String,
    },

    /// List models available from OpenRouter
    Models,

    /// Run the built-in completion walkthrough on a sample buffer
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();

    load_dotenv()?;

    let workspace = args
        .workspace
        .unwrap_or(std::env::current_dir().context("cannot determine current dir")?);
    let config = CompleteAiConfig::load(&workspace)?;

    let sources = ApiKeySources {
        openrouter_env: args.api_key_env,
        openrouter_config: config.provider.api_key.clone(),
    };
    let api_key = get_api_key(&sources)?;

    let mut options = EngineOptions {
        context_window: config.completion.context_window,
        max_tokens: config.completion.max_tokens,
        temperature: config.completion.temperature,
        model: config.provider.model.clone(),
    };
    if let Some(model) = args.model {
        options.model = model;
    }

    let provider = make_provider(api_key, &config);
    let engine = CompletionEngine::with_options(provider, options);

    match args.command.unwrap_or(Commands::Demo) {
        Commands::Complete {
            file,
            line,
            column,
            language,
        } => complete_file(&engine, &file, line, column, &language).await,
        Commands::Models => list_models(&engine).await,
        Commands::Demo => run_demo(&engine).await,
    }
}

async fn complete_file(
    engine: &CompletionEngine,
    file: &PathBuf,
    line: usize,
    column: usize,
    language: &str,
) -> Result<()> {
    let buffer = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("cannot read {}", file.display()))?;

    println!(
        "{} {}:{} ({})",
        style("Generating completion for").dim(),
        file.display(),
        line,
        language
    );

    let outcome = engine
        .generate_completion(&buffer, CursorPosition::new(line, column), language, None)
        .await;

    print_outcome(engine, &outcome);
    Ok(())
}

async fn list_models(engine: &CompletionEngine) -> Result<()> {
    println!("{}", style("Fetching available models...").dim());

    match engine.available_models().await {
        Ok(models) if models.is_empty() => {
            println!(
                "{}",
                error_display::format_llm_warning("openrouter", "No models returned")
            );
        }
        Ok(models) => {
            println!("{}", style("Available models:").green().bold());
            for model in models.iter().take(5) {
                match &model.name {
                    Some(name) => println!("- {}: {}", model.id, name),
                    None => println!("- {}", model.id),
                }
            }
            if models.len() > 5 {
                println!("... and {} more", models.len() - 5);
            }
        }
        Err(error) => {
            println!(
                "{}",
                error_display::format_llm_error("openrouter", &error.to_string())
            );
        }
    }

    Ok(())
}

async fn run_demo(engine: &CompletionEngine) -> Result<()> {
    let buffer = r#"function calculateSum(a, b) {
  return a + b;
}

function main() {
  const result = calculateSum(5, 3);
  console.log("Sum is:", result);
  // Cursor is here - suggest next line
}"#;

    println!("{}", style("Code context:").bold());
    println!("{}", buffer);
    println!();
    println!("{}", style("Generating completion...").dim());

    let outcome = engine
        .generate_completion(buffer, CursorPosition::new(7, 0), "javascript", None)
        .await;

    print_outcome(engine, &outcome);
    Ok(())
}

fn print_outcome(engine: &CompletionEngine, outcome: &CompletionOutcome) {
    match outcome {
        CompletionOutcome::Success { completion, usage } => {
            println!(
                "{}",
                error_display::format_llm_success("openrouter", "Completion generated")
            );
            println!("{} {}", style("Model:").dim(), engine.model());
            println!("{}", style("Completion:").green().bold());
            println!("{}", completion);
            if let Some(usage) = usage {
                println!(
                    "{} {} prompt + {} completion = {} total tokens",
                    style("Usage:").dim(),
                    usage.prompt_tokens,
                    usage.completion_tokens,
                    usage.total_tokens
                );
            }
        }
        CompletionOutcome::Failure { error } => {
            println!("{}", error_display::format_llm_error("openrouter", error));
        }
    }
}
