use crate::config::Config;
use crate::declaration::render_document;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use permit_compiler_ts::EmitOptions;
use permit_schema::load_document;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension of permit document files
pub const PERMIT_EXTENSION: &str = ".permit.json";

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Project directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Output to stdout instead of files, progress goes to stderr
    #[arg(long)]
    pub stdout: bool,

    /// Declare `filter` as optional (overrides config)
    #[arg(long, conflicts_with = "filter_required")]
    pub filter_optional: bool,

    /// Declare `filter` as required (overrides config)
    #[arg(long)]
    pub filter_required: bool,
}

pub fn compile(args: CompileArgs, cwd: &str) -> Result<()> {
    let root = PathBuf::from(cwd).join(&args.path);
    let root = root.to_string_lossy().to_string();

    let config = Config::load(&root)?;
    let src_dir = config.get_src_dir(&root);

    if !src_dir.exists() {
        return Err(anyhow!("Source directory does not exist: {:?}", src_dir));
    }

    let out_dir = args
        .out_dir
        .clone()
        .or_else(|| config.out_dir.clone())
        .map(|dir| PathBuf::from(&root).join(dir));
    let options = config.emit_options(args.filter_optional, args.filter_required);

    // Declarations own stdout in --stdout mode
    let report = |message: String| {
        if args.stdout {
            eprintln!("{}", message);
        } else {
            println!("{}", message);
        }
    };

    report(format!("{}", "🔨 Compiling permit schemas...".bright_blue().bold()));

    let permit_files = find_permit_files(&src_dir);

    if permit_files.is_empty() {
        report(format!("{}", "⚠️  No .permit.json files found".yellow()));
        return Ok(());
    }

    report(format!("Found {} files", permit_files.len()));

    let mut success_count = 0;
    let mut error_count = 0;

    for permit_file in &permit_files {
        let relative_path = permit_file.strip_prefix(&src_dir).unwrap_or(permit_file);

        let result = compile_file(permit_file, &options).and_then(|output| {
            if args.stdout {
                print!("{}", stdout_block(relative_path, &output, success_count == 0));
                Ok("stdout".to_string())
            } else {
                write_output(&output_path(permit_file, &src_dir, out_dir.as_deref()), &output)
            }
        });

        match result {
            Ok(output_path) => {
                success_count += 1;
                report(format!(
                    "  {} {} → {}",
                    "✓".green(),
                    relative_path.display(),
                    output_path
                ));
            }
            Err(e) => {
                error_count += 1;
                tracing::debug!(file = %permit_file.display(), error = %e, "compile failed");
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    format!("{:#}", e).red()
                );
            }
        }
    }

    report(String::new());
    if error_count == 0 {
        report(format!(
            "{} Compiled {} files successfully",
            "✅".green(),
            success_count
        ));
        Ok(())
    } else {
        report(format!(
            "{} Compiled {} files, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        ));
        Err(anyhow!("{} of {} files failed to compile", error_count, permit_files.len()))
    }
}

/// Find every permit document below `dir`, sorted by path
pub fn find_permit_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_permit_file(path))
        .collect();

    files.sort();
    files
}

fn is_permit_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.len() > PERMIT_EXTENSION.len() && name.ends_with(PERMIT_EXTENSION))
        .unwrap_or(false)
}

/// Path of the declaration file generated for a permit document
pub fn output_path(permit_file: &Path, src_dir: &Path, out_dir: Option<&Path>) -> PathBuf {
    let file_name = permit_file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(PERMIT_EXTENSION).unwrap_or(file_name);
    let declaration_name = format!("{}.d.ts", stem);

    match out_dir {
        Some(out_dir) => {
            let relative_path = permit_file.strip_prefix(src_dir).unwrap_or(permit_file);
            let relative_dir = relative_path.parent().unwrap_or_else(|| Path::new(""));
            out_dir.join(relative_dir).join(declaration_name)
        }
        None => permit_file.with_file_name(declaration_name),
    }
}

fn compile_file(permit_file: &Path, options: &EmitOptions) -> Result<String> {
    let document = load_document(permit_file)?;
    render_document(&document, options)
}

fn write_output(output_file: &Path, output: &str) -> Result<String> {
    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_file, output)?;

    Ok(output_file.display().to_string())
}

/// One file's declarations on stdout, headed by its source path
fn stdout_block(relative_path: &Path, output: &str, first: bool) -> String {
    let separator = if first { "" } else { "\n" };
    format!("{}// {}\n{}", separator, relative_path.display(), output)
}
