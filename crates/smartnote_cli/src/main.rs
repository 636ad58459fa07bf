//! SmartNote command-line entry point.
//!
//! # Responsibility
//! - Organize text files into structured note JSON via `smartnote_core`.
//! - Report per-file failures on stderr without aborting the batch.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use smartnote_core::{
    builtin_lexicon, core_version, default_log_level, init_logging, ExtractorRegistry, Lexicon,
    Note, NoteOrganizer,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "smartnote",
    version,
    about = "Organize extracted document text into structured notes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Organize files into notes and print them as JSON")]
    Organize(OrganizeArgs),

    #[command(about = "Print the effective keyword lexicon as JSON")]
    Lexicon(LexiconArgs),

    #[command(about = "Print the core version")]
    Version,
}

#[derive(Args)]
struct OrganizeArgs {
    /// Files to organize (.txt/.md are read directly).
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// JSON lexicon file replacing the built-in subjects.
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Declared MIME type for every file; overrides extension detection.
    #[arg(long)]
    mime: Option<String>,

    /// Print one pretty JSON array instead of one note per line.
    #[arg(long)]
    pretty: bool,

    /// Directory for rolling log files; logging stays off when omitted.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Args)]
struct LexiconArgs {
    /// JSON lexicon file to validate and print.
    #[arg(long)]
    lexicon: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Organize(args) => organize(args),
        Commands::Lexicon(args) => {
            let lexicon = load_lexicon(args.lexicon.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&lexicon)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Version => {
            println!("smartnote_core version={}", core_version());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn organize(args: OrganizeArgs) -> Result<ExitCode> {
    if let Some(log_dir) = &args.log_dir {
        let level = resolve_log_level(args.log_level.as_deref());
        let log_dir = absolute_dir(log_dir)?;
        init_logging(level, &log_dir.to_string_lossy()).map_err(anyhow::Error::msg)?;
    }

    let organizer = NoteOrganizer::new(load_lexicon(args.lexicon.as_deref())?);
    let registry = ExtractorRegistry::with_defaults();
    let outcomes =
        organizer.organize_files_as(args.files.as_slice(), args.mime.as_deref(), &registry);

    let mut notes = Vec::with_capacity(outcomes.len());
    let mut failures = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(note) => notes.push(note.clone()),
            Err(err) => {
                failures += 1;
                eprintln!("Error processing {}: {err}", outcome.display_name());
            }
        }
    }

    let rendered = render_notes(&notes, args.pretty)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    info!(
        "event=cli_organize module=cli status=done files={} notes={} failures={}",
        outcomes.len(),
        notes.len(),
        failures
    );

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn load_lexicon(path: Option<&Path>) -> Result<Lexicon> {
    let Some(path) = path else {
        return Ok(builtin_lexicon().clone());
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read lexicon `{}`", path.display()))?;
    Lexicon::from_json_str(&source)
        .with_context(|| format!("invalid lexicon `{}`", path.display()))
}

fn render_notes(notes: &[Note], pretty: bool) -> Result<String> {
    if pretty {
        return Ok(serde_json::to_string_pretty(notes)?);
    }
    let lines = notes
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

fn resolve_log_level(requested: Option<&str>) -> &str {
    requested.unwrap_or(default_log_level())
}

fn absolute_dir(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::{render_notes, resolve_log_level, Cli, Commands};
    use clap::{CommandFactory, Parser};
    use smartnote_core::{default_log_level, Note};

    fn sample_note(title: &str) -> Note {
        Note {
            title: title.to_string(),
            date: "2026-10-19".to_string(),
            subject: "General".to_string(),
            summary_points: vec!["Content extracted successfully".to_string()],
            full_text: String::new(),
            tags: vec!["general".to_string()],
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn organize_requires_files() {
        assert!(Cli::try_parse_from(["smartnote", "organize"]).is_err());
        let cli = Cli::try_parse_from(["smartnote", "organize", "a.txt", "--pretty"]).unwrap();
        match cli.command {
            Commands::Organize(args) => {
                assert_eq!(args.files.len(), 1);
                assert!(args.pretty);
                assert!(args.lexicon.is_none());
                assert!(args.mime.is_none());
            }
            _ => panic!("expected organize command"),
        }
    }

    #[test]
    fn organize_accepts_declared_mime() {
        let cli =
            Cli::try_parse_from(["smartnote", "organize", "upload.bin", "--mime", "text/plain"])
                .unwrap();
        match cli.command {
            Commands::Organize(args) => assert_eq!(args.mime.as_deref(), Some("text/plain")),
            _ => panic!("expected organize command"),
        }
    }

    #[test]
    fn log_level_defaults_when_not_given() {
        assert_eq!(resolve_log_level(Some("warn")), "warn");
        assert_eq!(resolve_log_level(None), default_log_level());
    }

    #[test]
    fn compact_output_is_one_note_per_line() {
        let rendered = render_notes(&[sample_note("a"), sample_note("b")], false).unwrap();
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["title"], "a");
    }

    #[test]
    fn pretty_output_is_a_json_array() {
        let rendered = render_notes(&[sample_note("a")], true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(render_notes(&[], false).unwrap(), "");
    }
}
