//! nbmd CLI - Jupyter notebook to Markdown converter

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use nbmd::render::{to_markdown_with_stats, RenderOptions};
use nbmd::{parse_file, Cell};

#[derive(Parser)]
#[command(name = "nbmd")]
#[command(version)]
#[command(about = "Convert Jupyter notebooks to Markdown", long_about = None)]
struct Cli {
    /// Input notebook file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a notebook to <stem>.md with images in <stem>_images/
    Convert {
        /// Input notebook file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output markdown file (derived from the input if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert a notebook to Markdown on stdout
    #[command(alias = "md")]
    Markdown {
        /// Input notebook file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Code fence language (notebook metadata if not specified)
        #[arg(long)]
        language: Option<String>,

        /// Directory for extracted images
        #[arg(long, value_name = "DIR")]
        image_dir: Option<PathBuf>,
    },

    /// Show notebook information
    Info {
        /// Input notebook file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => cmd_convert(&input, output.as_deref()),
        Some(Commands::Markdown {
            input,
            output,
            language,
            image_dir,
        }) => cmd_markdown(
            &input,
            output.as_deref(),
            language.as_deref(),
            image_dir.as_deref(),
        ),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            println!("nbmd {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_convert(&input, None)
            } else {
                println!("{}", "Usage: nbmd <FILE>".yellow());
                println!("       nbmd --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Paths derived from the input filename: the markdown file, the image
/// directory name used in links, and the image directory on disk, all
/// siblings of the input.
struct DerivedPaths {
    markdown_file: PathBuf,
    image_dir_name: String,
    image_dir: PathBuf,
}

fn derive_paths(input: &Path) -> DerivedPaths {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    let image_dir_name = format!("{}_images", stem);
    DerivedPaths {
        markdown_file: parent.join(format!("{}.md", stem)),
        image_dir: parent.join(&image_dir_name),
        image_dir_name,
    }
}

fn render_options_for(notebook: &nbmd::Notebook, language: Option<&str>) -> RenderOptions {
    let mut options = RenderOptions::default();
    if let Some(language) = language.or_else(|| notebook.language()) {
        options = options.with_code_language(language);
    }
    options
}

fn cmd_convert(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let paths = derive_paths(input);
    let markdown_file = output.map(|p| p.to_path_buf()).unwrap_or(paths.markdown_file);

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Parsing notebook...");
    let notebook = parse_file(input)?;
    pb.inc(1);

    pb.set_message("Rendering Markdown...");
    let options = render_options_for(&notebook, None)
        .with_image_dir(&paths.image_dir)
        .with_image_dir_name(&paths.image_dir_name);
    let result = to_markdown_with_stats(&notebook, &options)?;
    pb.inc(1);

    pb.set_message("Writing output...");
    fs::write(&markdown_file, &result.content)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output:".green().bold());
    println!("  {} {}", "├─".dimmed(), markdown_file.display());
    if result.stats.images > 0 {
        println!(
            "  {} {}/ ({} images)",
            "└─".dimmed(),
            paths.image_dir.display(),
            result.stats.images
        );
    } else {
        println!("  {} no images extracted", "└─".dimmed());
    }

    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    language: Option<&str>,
    image_dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let notebook = parse_file(input)?;

    let mut options = render_options_for(&notebook, language);
    if let Some(dir) = image_dir {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "images".to_string());
        options = options.with_image_dir(dir).with_image_dir_name(name);
    }

    let markdown = nbmd::render::to_markdown(&notebook, &options)?;

    if let Some(path) = output {
        fs::write(path, &markdown)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", markdown);
    }

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let notebook = parse_file(input)?;

    let outputs: usize = notebook
        .cells
        .iter()
        .map(|cell| match cell {
            Cell::Code { outputs, .. } => outputs.len(),
            _ => 0,
        })
        .sum();

    if json {
        let info = serde_json::json!({
            "file": input.display().to_string(),
            "nbformat": format!("{}.{}", notebook.nbformat, notebook.nbformat_minor),
            "language": notebook.language(),
            "cells": notebook.cell_count(),
            "code_cells": notebook.code_cell_count(),
            "outputs": outputs,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", "Notebook Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!(
        "{}: {}.{}",
        "Format".bold(),
        notebook.nbformat,
        notebook.nbformat_minor
    );
    if let Some(language) = notebook.language() {
        println!("{}: {}", "Language".bold(), language);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Cells".bold(), notebook.cell_count());
    println!("{}: {}", "Code cells".bold(), notebook.code_cell_count());
    println!("{}: {}", "Outputs".bold(), outputs);

    Ok(())
}
