mod commands;
mod config;
mod declaration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{compile, emit, init, CompileArgs, EmitArgs, InitArgs};

/// Permit CLI - TypeScript declarations for mutation permits
#[derive(Parser, Debug)]
#[command(name = "permit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new permit project
    Init(InitArgs),

    /// Emit declarations for one permit document to stdout
    Emit(EmitArgs),

    /// Compile every .permit.json file in the project
    Compile(CompileArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Emit(args) => emit(args, &cwd),
        Command::Compile(args) => compile(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
