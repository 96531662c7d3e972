//! unresume CLI - resume field extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unresume::nlp::{LanguageModel, PosTag, RuleBasedModel};
use unresume::render::{self, JsonFormat};
use unresume::{
    discover_documents, run_batch, BatchEvent, BatchOptions, DocumentOutcome, ExtractOptions,
    PdfTextSource, PlainTextSource, RecordAssembler, TextSource,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "unresume")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract structured fields from a directory of resumes", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Directory of resumes
    #[arg(value_name = "DIR")]
    input: Option<PathBuf>,

    #[command(flatten)]
    batch: BatchArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every document under a directory
    Batch {
        /// Directory of resumes
        #[arg(value_name = "DIR", default_value = "resumes")]
        input: PathBuf,

        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Extract a single document
    Extract {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the decoded text of a document
    Text {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Read the input as plain text instead of PDF
        #[arg(long)]
        plain: bool,

        /// Print the text exactly as decoded
        #[arg(long)]
        no_normalize: bool,
    },

    /// Show the language model analysis of a document
    Entities {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show version information
    Version,
}

/// How documents are decoded and analysed.
#[derive(Args, Clone, Default)]
struct SourceArgs {
    /// Read inputs as plain text instead of PDF
    #[arg(long)]
    plain: bool,

    /// Lexicon JSON file for the language model
    #[arg(long, value_name = "FILE")]
    lexicon: Option<PathBuf>,

    /// Skip text normalization before analysis
    #[arg(long)]
    no_normalize: bool,
}

/// Where and how results are written.
#[derive(Args, Clone)]
struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "pretty")]
    format: Format,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Args, Clone)]
struct BatchArgs {
    /// Number of worker threads (0 = one per CPU)
    #[arg(short = 'j', long, env = "UNRESUME_WORKERS", default_value_t = 0)]
    workers: usize,

    /// Leave failed documents out of the output
    #[arg(long)]
    skip_failed: bool,

    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `key: value` line per field
    Pretty,
    /// JSON
    Json,
}

impl OutputArgs {
    fn json_format(&self) -> JsonFormat {
        if self.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        }
    }
}

impl SourceArgs {
    fn text_source(&self) -> Box<dyn TextSource> {
        if self.plain {
            Box::new(PlainTextSource::new())
        } else {
            Box::new(PdfTextSource::new())
        }
    }

    fn extract_options(&self) -> ExtractOptions {
        if self.no_normalize {
            ExtractOptions::new().without_normalization()
        } else {
            ExtractOptions::new()
        }
    }

    fn load_model(&self) -> unresume::Result<Box<dyn LanguageModel>> {
        let model = match &self.lexicon {
            Some(path) => RuleBasedModel::from_lexicon_path(path)?,
            None => RuleBasedModel::new()?,
        };
        Ok(Box::new(model))
    }

    fn assembler(&self) -> unresume::Result<RecordAssembler> {
        RecordAssembler::new(self.load_model()?, self.extract_options())
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Batch { input, batch }) => cmd_batch(&input, &batch),
        Some(Commands::Extract {
            input,
            source,
            output,
        }) => cmd_extract(&input, &source, &output),
        Some(Commands::Text {
            input,
            output,
            plain,
            no_normalize,
        }) => cmd_text(&input, output.as_deref(), plain, no_normalize),
        Some(Commands::Entities { input, source }) => cmd_entities(&input, &source),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            let input = cli.input.unwrap_or_else(|| PathBuf::from("resumes"));
            cmd_batch(&input, &cli.batch)
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_batch(input: &Path, args: &BatchArgs) -> CliResult<()> {
    let paths = discover_documents(input)?;
    if paths.is_empty() {
        eprintln!("{} {}", "No documents found in".yellow(), input.display());
    }

    let options = BatchOptions::new()
        .with_workers(args.workers)
        .with_skip_failed(args.skip_failed)
        .with_extract_options(args.source.extract_options());
    let source = args.source.text_source();
    log::debug!("Batch options: {:?}, source: {}", options, source.name());

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let (tx, rx) = crossbeam_channel::unbounded();
    let paths_ref = &paths;
    let source_ref = source.as_ref();
    let options_ref = &options;
    let source_args = &args.source;

    let mut failed = 0;
    let joined = std::thread::scope(|s| {
        let worker = s.spawn(move || {
            run_batch(
                paths_ref,
                source_ref,
                || source_args.load_model(),
                options_ref,
                Some(&tx),
            )
        });

        for event in rx.iter() {
            match event {
                BatchEvent::Started { path, .. } => {
                    let name = path.file_name().unwrap_or_default().to_string_lossy();
                    pb.set_message(name.into_owned());
                }
                BatchEvent::Finished { ok, .. } => {
                    if !ok {
                        failed += 1;
                    }
                    pb.inc(1);
                }
            }
        }

        worker.join()
    });
    pb.finish_and_clear();
    let outcomes = joined.map_err(|_| "batch worker thread panicked")??;

    write_outcomes(&outcomes, &args.output)?;

    eprintln!(
        "{} {} documents, {} failed",
        "Done!".green().bold(),
        paths.len(),
        failed
    );
    Ok(())
}

fn write_outcomes(outcomes: &[DocumentOutcome], args: &OutputArgs) -> CliResult<()> {
    match (args.format, &args.output) {
        (Format::Json, output) => {
            let json = render::to_json(outcomes, args.json_format())?;
            write_output(output.as_deref(), &json)
        }
        (Format::Pretty, Some(path)) => {
            write_output(Some(path.as_path()), &render::to_pretty(outcomes))
        }
        (Format::Pretty, None) => {
            for outcome in outcomes {
                println!(
                    "{}",
                    format!("== {} ==", outcome.path.display()).cyan().bold()
                );
                match &outcome.result {
                    Ok(record) => print!("{}", render::record_to_pretty(record)),
                    Err(e) => println!("{}: {}", "error".red().bold(), e),
                }
                println!();
            }
            Ok(())
        }
    }
}

fn write_output(output: Option<&Path>, content: &str) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_extract(input: &Path, source: &SourceArgs, output: &OutputArgs) -> CliResult<()> {
    let assembler = source.assembler()?;
    let record = unresume::process_document(input, source.text_source().as_ref(), &assembler)?;

    let content = match output.format {
        Format::Json => render::record_to_json(&record, output.json_format())?,
        Format::Pretty => render::record_to_pretty(&record),
    };
    write_output(output.output.as_deref(), content.trim_end())
}

fn cmd_text(input: &Path, output: Option<&Path>, plain: bool, no_normalize: bool) -> CliResult<()> {
    let source = SourceArgs {
        plain,
        no_normalize,
        ..Default::default()
    };
    let text = source.text_source().load_text(input)?;
    let text = if no_normalize {
        text
    } else {
        unresume::normalize::normalize(&text)
    };
    write_output(output, &text)
}

fn cmd_entities(input: &Path, source: &SourceArgs) -> CliResult<()> {
    let assembler = source.assembler()?;
    let text = source.text_source().load_text(input)?;
    let analysis = assembler.analyze(&text);

    println!("{}", "Entities".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for entity in &analysis.entities {
        println!(
            "{:<8} {} {}",
            entity.label.to_string().bold(),
            entity.text,
            format!("[{}..{}]", entity.start, entity.end).dimmed()
        );
    }

    println!();
    println!("{}", "Noun Chunks".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for chunk in &analysis.noun_chunks {
        println!("{}", chunk.text);
    }

    println!();
    println!("{}", "Verbs".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    let verbs: Vec<&str> = analysis
        .tokens_tagged(PosTag::Verb)
        .map(|t| t.text.as_str())
        .collect();
    println!("{}", verbs.join(", "));

    println!();
    println!(
        "{}: {} tokens, {} entities, {} noun chunks (model: {})",
        "Total".bold(),
        analysis.tokens.len(),
        analysis.entities.len(),
        analysis.noun_chunks.len(),
        assembler.model_name()
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unresume".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume field extraction tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_batch_args() {
        let cli = Cli::try_parse_from(["unresume", "-j", "2", "--format", "json", "--compact"])
            .unwrap();
        assert!(cli.input.is_none());
        assert!(cli.command.is_none());
        assert_eq!(cli.batch.workers, 2);
        assert_eq!(cli.batch.output.format, Format::Json);
        assert_eq!(cli.batch.output.json_format(), JsonFormat::Compact);
    }

    #[test]
    fn test_extract_subcommand() {
        let cli = Cli::try_parse_from([
            "unresume", "extract", "cv.txt", "--plain", "--no-normalize", "-o", "out.txt",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Extract {
                input,
                source,
                output,
            }) => {
                assert_eq!(input, PathBuf::from("cv.txt"));
                assert!(source.plain);
                assert!(source.no_normalize);
                assert_eq!(output.output, Some(PathBuf::from("out.txt")));
                assert_eq!(output.format, Format::Pretty);
            }
            _ => panic!("expected extract command"),
        }
    }

    #[test]
    fn test_batch_default_directory() {
        let cli = Cli::try_parse_from(["unresume", "batch", "--skip-failed"]).unwrap();
        match cli.command {
            Some(Commands::Batch { input, batch }) => {
                assert_eq!(input, PathBuf::from("resumes"));
                assert!(batch.skip_failed);
            }
            _ => panic!("expected batch command"),
        }
    }

    #[test]
    fn test_top_level_batch_flags_conflict_with_subcommand() {
        assert!(Cli::try_parse_from(["unresume", "-j", "2", "batch", "dir"]).is_err());
        assert!(Cli::try_parse_from(["unresume", "--skip-failed", "extract", "cv.txt"]).is_err());
        assert!(Cli::try_parse_from(["unresume", "batch", "dir", "-j", "2"]).is_ok());
    }

    #[test]
    fn test_cmd_batch_model_failure() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cv.txt"), "Email: jane@example.com\n").unwrap();
        let output = dir.path().join("records.json");

        let args = BatchArgs {
            workers: 1,
            skip_failed: false,
            source: SourceArgs {
                plain: true,
                lexicon: Some(dir.path().join("missing-lexicon.json")),
                ..Default::default()
            },
            output: OutputArgs {
                format: Format::Json,
                compact: false,
                output: Some(output.clone()),
            },
        };

        assert!(cmd_batch(dir.path(), &args).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_cmd_extract_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cv.txt");
        let output = dir.path().join("record.json");
        fs::write(&input, "Email: jane@example.com\n").unwrap();

        let source = SourceArgs {
            plain: true,
            ..Default::default()
        };
        let out = OutputArgs {
            format: Format::Json,
            compact: true,
            output: Some(output.clone()),
        };
        cmd_extract(&input, &source, &out).unwrap();

        let json = fs::read_to_string(&output).unwrap();
        assert!(json.contains("\"email\":\"jane@example.com\""));
        assert!(json.contains("\"name\":null"));
    }
}
