//! resparse CLI - resume field extraction tool

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use resparse::batch::{self, BatchEvent};
use resparse::{
    BatchOptions, CleanupPreset, JsonFormat, ParseOptions, ResumeParser, ResumeRecord,
    FIELD_NAMES,
};

#[derive(Parser)]
#[command(name = "resparse")]
#[command(version)]
#[command(about = "Extract structured fields from resumes (PDF, DOCX, DOC, text)", long_about = None)]
struct Cli {
    /// Input resume file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    parse: ParseArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by every command that parses resumes.
#[derive(Args, Clone)]
struct ParseArgs {
    /// CSV file with the skills taxonomy
    #[arg(long, global = true, value_name = "FILE", env = "RESPARSE_SKILLS_FILE")]
    skills_file: Option<PathBuf>,

    /// Regular expression overriding the phone number pattern
    #[arg(long, global = true, value_name = "REGEX", env = "RESPARSE_CUSTOM_REGEX")]
    custom_regex: Option<String>,

    /// Text cleanup preset
    #[arg(long, global = true, value_enum)]
    cleanup: Option<CleanupLevel>,
}

impl ParseArgs {
    fn to_options(&self) -> ParseOptions {
        let mut options = ParseOptions::new();
        if let Some(ref path) = self.skills_file {
            options = options.with_skills_file(path);
        }
        if let Some(ref pattern) = self.custom_regex {
            options = options.with_custom_regex(pattern);
        }
        if let Some(level) = self.cleanup {
            options = options.with_cleanup(level.into());
        }
        options
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a resume and print its fields as JSON
    Parse {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Only emit these fields (comma separated)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,
    },

    /// Parse every resume in a directory
    Batch {
        /// Input directory
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: BatchFormat,

        /// Worker threads (0 = one per CPU)
        #[arg(short = 'j', long, default_value = "0")]
        threads: usize,

        /// Do not descend into subdirectories
        #[arg(long)]
        shallow: bool,

        /// Leave files with unsupported extensions out of the report
        #[arg(long)]
        skip_unsupported: bool,
    },

    /// Print the cleaned text extracted from a resume
    Text {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show a summary of the fields found in a resume
    Info {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Minimal cleanup (Unicode normalization only)
    Minimal,
    /// Standard cleanup (default)
    Standard,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum BatchFormat {
    /// JSON array of per-file results
    Json,
    /// CSV with one row per parsed file
    Csv,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = cli.parse.to_options();

    let result = match cli.command {
        Some(Commands::Parse {
            input,
            output,
            compact,
            fields,
        }) => cmd_parse(&input, output.as_deref(), compact, &fields, options),
        Some(Commands::Batch {
            dir,
            output,
            format,
            threads,
            shallow,
            skip_unsupported,
        }) => {
            let mut batch_options = BatchOptions::new()
                .with_threads(threads)
                .with_skip_unsupported(skip_unsupported);
            if shallow {
                batch_options = batch_options.shallow();
            }
            cmd_batch(&dir, output.as_deref(), format, batch_options, options)
        }
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref(), options),
        Some(Commands::Info { input }) => cmd_info(&input, options),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: parse if input is provided
            if let Some(input) = cli.input {
                cmd_parse(&input, None, false, &[], options)
            } else {
                println!("{}", "Usage: resparse <FILE>".yellow());
                println!("       resparse --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Keep only the requested keys of a record, in the order given.
fn select_fields(
    record: &ResumeRecord,
    fields: &[String],
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let value = serde_json::to_value(record)?;
    if fields.is_empty() {
        return Ok(value);
    }

    let mut selected = serde_json::Map::new();
    for field in fields {
        let key = field.trim();
        if !FIELD_NAMES.contains(&key) {
            return Err(format!(
                "unknown field '{}' (expected one of: {})",
                key,
                FIELD_NAMES.join(", ")
            )
            .into());
        }
        selected.insert(key.to_string(), value[key].clone());
    }
    Ok(serde_json::Value::Object(selected))
}

fn cmd_parse(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    fields: &[String],
    options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let parser = ResumeParser::with_options(options)?;
    let record = parser.parse_file(input)?;

    let json = if fields.is_empty() {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        record.to_json(format)?
    } else {
        let value = select_fields(&record, fields)?;
        if compact {
            serde_json::to_string(&value)?
        } else {
            serde_json::to_string_pretty(&value)?
        }
    };

    write_output(output, &json)
}

fn cmd_batch(
    dir: &Path,
    output: Option<&Path>,
    format: BatchFormat,
    batch_options: BatchOptions,
    options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let parser = ResumeParser::with_options(options)?;

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let (tx, rx) = crossbeam_channel::unbounded();
    let report = std::thread::scope(|s| {
        let pb = &pb;
        s.spawn(move || {
            for event in rx.iter() {
                match event {
                    BatchEvent::Discovered { total } => pb.set_length(total as u64),
                    BatchEvent::Started { path } => {
                        let name = path.file_name().unwrap_or_default().to_string_lossy();
                        pb.set_message(name.into_owned());
                    }
                    BatchEvent::Finished { .. } => pb.inc(1),
                    BatchEvent::Failed { path, error } => {
                        pb.println(format!("{} {}: {}", "✗".red(), path.display(), error));
                        pb.inc(1);
                    }
                }
            }
        });
        batch::parse_directory_with_events(&parser, dir, &batch_options, tx)
    })?;
    pb.finish_and_clear();

    match format {
        BatchFormat::Json => write_output(output, &report.to_json(JsonFormat::Pretty)?)?,
        BatchFormat::Csv => {
            if let Some(path) = output {
                report.write_csv(fs::File::create(path)?)?;
                println!("{} {}", "Saved to".green(), path.display());
            } else {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                report.write_csv(&mut lock)?;
                lock.flush()?;
            }
        }
    }

    eprintln!(
        "{} {} parsed, {} failed",
        "Done!".green().bold(),
        report.success_count(),
        report.failure_count()
    );

    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let parser = ResumeParser::with_options(options)?;
    let text = parser.extract_text(input)?;
    write_output(output, &text)
}

fn cmd_info(input: &Path, options: ParseOptions) -> Result<(), Box<dyn std::error::Error>> {
    let parser = ResumeParser::with_options(options)?;
    let format = resparse::detect_format_from_path(input)?;
    let record = parser.parse_file(input)?;

    println!("{}", "Resume Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format.to_string().to_uppercase());
    match record.no_of_pages {
        Some(pages) => println!("{}: {}", "Pages".bold(), pages),
        None if format.has_pages() => println!("{}: {}", "Pages".bold(), "unknown".dimmed()),
        None => {}
    }

    println!();
    println!("{}", "Fields".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let show = |label: &str, value: Option<String>| match value {
        Some(v) => println!("{}: {}", label.bold(), v),
        None => println!("{}: {}", label.bold(), "-".dimmed()),
    };
    let list = |items: &Option<Vec<String>>| items.as_ref().map(|v| v.join(", "));

    show("Name", record.name.clone());
    show("Email", record.email.clone());
    show("Mobile", record.mobile_number.clone());
    show("LinkedIn", record.linkedin.clone());
    show("GitHub", record.github.clone());
    show("Degree", list(&record.degree));
    show("Education", list(&record.education));
    show("Experience", list(&record.experience));
    show(
        "Skills",
        (!record.skills.is_empty()).then(|| record.skills.join(", ")),
    );

    println!();
    println!(
        "{}: {}/{}",
        "Populated".bold(),
        record.populated_fields(),
        FIELD_NAMES.len()
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "resparse".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume field extraction tool");
    println!();
    println!("License: MIT");
}
