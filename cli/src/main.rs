//! unslide CLI - PowerPoint slide conversion tool
//!
//! A command-line tool for converting PPTX decks to HTML pages or JSON.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use unslide::render::{ConvertOptions, ImageSource, JsonFormat};
use unslide::{Presentation, PptxConverter};

/// PowerPoint slide conversion to HTML and JSON
#[derive(Parser)]
#[command(
    name = "unslide",
    author = "iyulab",
    version,
    about = "Convert PowerPoint slides to HTML",
    long_about = "unslide - PowerPoint (PPTX) slide conversion tool.\n\n\
                  Renders every slide as positioned HTML with inline SVG shapes, \
                  and exports animation timelines and speaker notes as JSON."
)]
struct Cli {
    /// Log conversion warnings (repeat for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a deck to a standalone HTML page
    Html {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write pictures into this directory instead of embedding them
        #[arg(long)]
        images: Option<PathBuf>,
    },

    /// Convert a deck to JSON (markup, animation and notes per slide)
    Json {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Show deck information and metadata
    Info {
        /// Input file path
        input: PathBuf,

        /// Print metadata as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Html {
            input,
            output,
            images,
        } => {
            let pb = create_spinner("Converting slides...");

            let mut options = ConvertOptions::new();
            if let Some(dir) = images {
                fs::create_dir_all(&dir)?;
                options = options.with_image_loader(move |image: &ImageSource<'_>| -> unslide::Result<String> {
                    let file = image.name.rsplit('/').next().unwrap_or(image.name);
                    fs::write(dir.join(file), image.data)?;
                    Ok(dir.join(file).to_string_lossy().replace('\\', "/"))
                });
            }

            let presentation = PptxConverter::open(&input)?
                .with_options(options)
                .convert();
            pb.set_message("Rendering HTML...");
            let html = unslide::render::to_html_page(&presentation);

            pb.finish_and_clear();
            report_failures(&presentation);
            write_output(output.as_ref(), &html)?;

            if let Some(path) = output {
                println!(
                    "{} Converted {} slides to HTML: {}",
                    "✓".green().bold(),
                    presentation.slides.len(),
                    path.display()
                );
            }
        }

        Commands::Json {
            input,
            output,
            compact,
        } => {
            let pb = create_spinner("Converting slides...");

            let presentation = unslide::convert_file(&input)?;
            pb.set_message("Rendering to JSON...");

            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let json = unslide::render::to_json(&presentation, format)?;

            pb.finish_and_clear();
            report_failures(&presentation);
            write_output(output.as_ref(), &json)?;

            if let Some(path) = output {
                println!("{} Converted to JSON: {}", "✓".green().bold(), path.display());
            }
        }

        Commands::Info { input, json } => {
            let kind = unslide::detect_from_path(&input)?;
            let converter = PptxConverter::open(&input)?;

            if json {
                println!("{}", serde_json::to_string_pretty(converter.metadata())?);
                return Ok(());
            }

            print_info(&input, kind, &converter);
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_info(input: &Path, kind: unslide::PresentationKind, converter: &PptxConverter) {
    let meta = converter.metadata();
    let size = converter.size();

    println!("{}", "Presentation Information".cyan().bold());
    println!("{}", "─".repeat(40));
    println!(
        "{}: {}",
        "File".bold(),
        input.file_name().unwrap_or_default().to_string_lossy()
    );
    println!("{}: {}", "Format".bold(), kind);
    println!("{}: {}", "Slides".bold(), converter.slide_count());
    println!("{}: {} x {} px", "Size".bold(), size.width, size.height);

    if let Some(ref title) = meta.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = meta.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref created) = meta.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = meta.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }
}

fn report_failures(presentation: &Presentation) {
    for failure in &presentation.failures {
        eprintln!(
            "{} slide {} skipped: {}",
            "!".yellow().bold(),
            failure.index + 1,
            failure.message
        );
    }
}

fn print_version() {
    println!("{} {}", "unslide".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("PowerPoint slide conversion to positioned HTML and SVG");
    println!();
    println!("Supported formats: PPTX, PPTM, PPSX, POTX");
    println!("Repository: https://github.com/iyulab/unslide");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
