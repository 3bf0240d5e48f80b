//! undoc CLI - PDF and Word to plain text conversion tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use undoc::render::to_text_with_stats;
use undoc::{
    detect_format_from_path, ConvertOptions, Converter, DocumentFormat, ExtractOptions,
    NormalizeOptions, PageSelection, Undoc,
};

#[derive(Parser)]
#[command(name = "undoc")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert PDF and Word documents to plain text", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Input files (.pdf or .docx)
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    #[command(flatten)]
    convert: ConvertArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert documents to timestamped .txt files
    Convert {
        /// Input files (.pdf or .docx)
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        #[command(flatten)]
        args: ConvertArgs,
    },

    /// Print or save the reconstructed text of one document
    Text {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Skip unreadable PDF pages instead of failing
        #[arg(long)]
        lenient: bool,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Enable Unicode normalization, ligature repair and U+FFFD removal
        #[arg(long)]
        extended: bool,
    },

    /// Show document information
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct ConvertArgs {
    /// Output directory
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "UNDOC_OUTPUT_DIR",
        default_value = "output"
    )]
    output: PathBuf,

    /// Print the per-file report as JSON
    #[arg(long)]
    json: bool,

    /// Skip unreadable PDF pages instead of failing
    #[arg(long)]
    lenient: bool,

    /// Page range (e.g., "1-10", "1,3,5")
    #[arg(long)]
    pages: Option<String>,

    /// Enable Unicode normalization, ligature repair and U+FFFD removal
    #[arg(long)]
    extended: bool,

    /// Convert files one at a time
    #[arg(long)]
    sequential: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { inputs, args }) => cmd_convert(&inputs, &args),
        Some(Commands::Text {
            input,
            output,
            lenient,
            pages,
            extended,
        }) => cmd_text(&input, output.as_deref(), lenient, pages.as_deref(), extended),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if inputs are provided
            if cli.inputs.is_empty() {
                println!("{}", "Usage: undoc <FILE>... [-o DIR]".yellow());
                println!("       undoc --help for more information");
                Ok(())
            } else {
                cmd_convert(&cli.inputs, &cli.convert)
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn extract_options(
    lenient: bool,
    pages: Option<&str>,
) -> Result<ExtractOptions, Box<dyn std::error::Error>> {
    let page_selection = match pages {
        Some(p) => PageSelection::parse(p)?,
        None => PageSelection::All,
    };

    let mut options = ExtractOptions::new().with_pages(page_selection);
    if lenient {
        options = options.lenient();
    }
    Ok(options)
}

fn normalize_options(extended: bool) -> NormalizeOptions {
    if extended {
        NormalizeOptions::extended()
    } else {
        NormalizeOptions::default()
    }
}

fn cmd_convert(inputs: &[PathBuf], args: &ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = ConvertOptions::new()
        .with_output_dir(&args.output)
        .with_extract_options(extract_options(args.lenient, args.pages.as_deref())?)
        .with_normalize_options(normalize_options(args.extended))
        .with_parallel(!args.sequential);
    let converter = Converter::new(options)?;

    let pb = if args.json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Converting {} file(s)...", inputs.len()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let report = converter.convert_batch(inputs);
    pb.finish_and_clear();

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        for file in &report.results {
            match (&file.converted_file, &file.error) {
                (Some(converted), _) => println!(
                    "  {} {} {} {}",
                    "✓".green(),
                    file.original_file,
                    "→".dimmed(),
                    converted
                ),
                (None, Some(error)) => {
                    println!("  {} {} {}", "✗".red(), file.original_file, error.dimmed())
                }
                (None, None) => {}
            }
        }

        println!(
            "\n{} {} converted, {} failed ({})",
            "Done!".green().bold(),
            report.succeeded(),
            report.failed(),
            converter.output_dir().display()
        );
    }

    if report.all_succeeded() {
        Ok(())
    } else {
        Err(format!("{} of {} files failed", report.failed(), report.results.len()).into())
    }
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    lenient: bool,
    pages: Option<&str>,
    extended: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = Undoc::new().with_normalize_options(normalize_options(extended));
    if lenient {
        builder = builder.lenient();
    }
    if let Some(p) = pages {
        builder = builder.with_pages(PageSelection::parse(p)?);
    }

    let text = builder.parse(input)?.to_text();

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Lenient so metadata is shown even if some pages fail
    let doc = Undoc::new().lenient().extract(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    match (doc.format, &doc.metadata.pdf_version) {
        (DocumentFormat::Pdf, Some(version)) => println!("{}: PDF {}", "Format".bold(), version),
        (format, _) => println!("{}: {}", "Format".bold(), format),
    }
    match detect_format_from_path(input) {
        Ok(sniffed) if sniffed == doc.format => {}
        Ok(sniffed) => println!(
            "{}: {}",
            "Signature".bold(),
            format!("{} (does not match extension)", sniffed).yellow()
        ),
        Err(_) => println!("{}: {}", "Signature".bold(), "unrecognized".yellow()),
    }
    if doc.format == DocumentFormat::Pdf {
        println!("{}: {}", "Pages".bold(), doc.metadata.page_count);
    }
    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = doc.metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let stats = to_text_with_stats(&doc, &NormalizeOptions::default()).stats;

    println!("{}: {}", "Blocks".bold(), stats.block_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Markers".bold(), stats.marker_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "undoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF and Word to plain text conversion tool");
    println!();
    println!("License: MIT");
}
