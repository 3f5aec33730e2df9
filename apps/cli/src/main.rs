//! clipfile CLI - Create files from clipboard text
//!
//! This CLI provides a `clipfile-cli` command that reads the clipboard,
//! suggests a file name from its content, and writes it next to the file
//! you are editing, into your workspace, or into a selected folder.

mod commands;
mod config;
mod host;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, shells};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{create, suggest};

/// clipfile - Create a new file from clipboard text
///
/// Reads the clipboard, guesses a file name from its content, asks you to
/// confirm it, and writes the clipboard text into the right directory.
#[derive(Parser, Debug)]
#[command(
    name = "clipfile-cli",
    author,
    version,
    about = "Create a new file from clipboard text",
    args_conflicts_with_subcommands = true
)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,

    /// Options for the default `create` command
    #[command(flatten)]
    create: create::CreateArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a file from the clipboard (default)
    ///
    /// Suggests a name from the content, asks for confirmation, resolves the
    /// target directory and writes the file, asking before overwriting.
    Create(create::CreateArgs),

    /// Print the file name that would be suggested for the clipboard
    Suggest(suggest::SuggestArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Handle completion generation
    if let Ok(shell) = std::env::var("CLIPFILE_GENERATE_COMPLETIONS") {
        let mut cmd = Args::command();
        match shell.as_str() {
            "bash" => generate(shells::Bash, &mut cmd, "clipfile-cli", &mut std::io::stdout()),
            "zsh" => generate(shells::Zsh, &mut cmd, "clipfile-cli", &mut std::io::stdout()),
            "fish" => generate(shells::Fish, &mut cmd, "clipfile-cli", &mut std::io::stdout()),
            "powershell" => {
                generate(shells::PowerShell, &mut cmd, "clipfile-cli", &mut std::io::stdout());
            }
            "elvish" => generate(shells::Elvish, &mut cmd, "clipfile-cli", &mut std::io::stdout()),
            _ => {
                eprintln!("Unknown shell: {}. Supported: bash, zsh, fish, powershell, elvish", shell);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let args = Args::parse();

    // Load configuration
    let cli_config = config::load_config()?;

    // Initialize tracing (CLI flag takes precedence over config)
    let level = parse_level(args.log_level.as_deref().or(cli_config.log_level.as_deref()));
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let succeeded = match args.command {
        Some(Command::Create(create_args)) => create::execute(create_args, &cli_config).await?,
        Some(Command::Suggest(suggest_args)) => suggest::execute(&suggest_args, &cli_config).await?,
        None => create::execute(args.create, &cli_config).await?,
    };

    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}

fn parse_level(level: Option<&str>) -> Level {
    match level.map(str::to_ascii_lowercase).as_deref() {
        Some("trace") => Level::TRACE,
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("error") => Level::ERROR,
        _ => Level::WARN,
    }
}
