use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

const EXAMPLE_FILE: &str = "example.permit.json";

const EXAMPLE_CONTENT: &str = r#"{
  "base": { "name": "example" },
  "permit": {
    "update-user": {
      "filter": [
        { "id": { "type": "uuid" } },
        { "email": { "type": "text" } }
      ],
      "effect": {
        "name": { "type": "text", "optional": true },
        "tags": { "type": "text", "list": true, "optional": true },
        "address": {
          "type": "object",
          "optional": true,
          "property": {
            "city": { "type": "text" },
            "zip": { "type": "text" }
          }
        }
      },
      "extend": "user-profile"
    }
  }
}
"#;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Source directory
    #[arg(short, long, default_value = "src")]
    pub src_dir: String,

    /// Output directory for generated declarations
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing permit project...".bright_blue().bold());

    let src_dir = PathBuf::from(cwd).join(&args.src_dir);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), args.src_dir);
    }

    let example_file = src_dir.join(EXAMPLE_FILE);
    if !example_file.exists() {
        fs::write(&example_file, EXAMPLE_CONTENT)?;
        println!("  {} Created {}", "✓".green(), EXAMPLE_FILE);
    }

    let config = Config {
        src_dir: args.src_dir.clone(),
        out_dir: args.out_dir.clone(),
        filter_optional: false,
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}/{}", args.src_dir, EXAMPLE_FILE);
    println!("  2. Run: permit compile");

    Ok(())
}
