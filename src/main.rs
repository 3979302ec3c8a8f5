use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use neurorm_core::constants::SUBJECTS_DIR_ENV;
use neurorm_core::paths::subject::SubjectPaths;
use neurorm_core::{
    FileField, FreeSurferSubject, Hemisphere, LabelFiles, MriFiles, ScriptFiles, StatsFiles,
    SubjectError, SubjectsConfig, SurfaceFiles, TransformFiles, resolve_subjects_dir,
};

#[derive(Parser)]
#[command(name = "neurorm")]
#[command(about = "Validate FreeSurfer recon-all subject directories")]
struct Cli {
    /// Subjects directory (defaults to $SUBJECTS_DIR)
    #[arg(long, global = true)]
    subjects_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a subject and list every missing file
    Check {
        /// Subject identifier
        subject: String,
    },
    /// Report whether recon-all has finished for a subject
    Status {
        /// Subject identifier
        subject: String,
    },
    /// Print every resolved file of a subject
    Show {
        /// Subject identifier
        subject: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List subjects in the subjects directory
    List,
    /// Print the expected directory layout
    Layout {
        /// Only show hemisphere files for lh or rh
        #[arg(long)]
        hemisphere: Option<Hemisphere>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Main entry point for the neurorm CLI
///
/// # Environment Variables
/// - `SUBJECTS_DIR`: FreeSurfer subjects directory, used when `--subjects-dir` is not given
/// - `RUST_LOG`: log filter (default: `neurorm=info,neurorm_core=info`)
///
/// A `.env` file in the working directory is loaded first, if present.
fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("neurorm=info".parse()?)
                .add_directive("neurorm_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("Use 'neurorm --help' for commands");
            return Ok(ExitCode::SUCCESS);
        }
    };

    run(cli.subjects_dir, command)
}

/// Runs `command`. The subjects directory is only resolved by commands that read one.
fn run(subjects_dir: Option<PathBuf>, command: Commands) -> anyhow::Result<ExitCode> {
    let config = move || -> anyhow::Result<SubjectsConfig> {
        let config = resolve_subjects_dir(subjects_dir, std::env::var(SUBJECTS_DIR_ENV).ok())?;
        tracing::debug!("using subjects directory {}", config.subjects_dir().display());
        Ok(config)
    };

    match command {
        Commands::Layout { hemisphere } => {
            for line in layout_lines(hemisphere) {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { subject } => match config()?.subject(&subject) {
            Ok(resolved) => {
                println!("{subject}: ok ({} files)", resolved.file_count());
                Ok(ExitCode::SUCCESS)
            }
            Err(SubjectError::Validation(errors)) => {
                println!("{subject}: {} problem(s)", errors.len());
                for error in &errors {
                    println!("  {error}");
                }
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e.into()),
        },
        Commands::Status { subject } => {
            let resolved = config()?.subject(&subject)?;
            let state = if resolved.recon_all_done() {
                "done"
            } else {
                "not done"
            };
            println!("{subject}: recon-all {state}");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Show { subject, format } => {
            let resolved = config()?.subject(&subject)?;
            println!("{}", render_subject(&resolved, format)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::List => {
            let subjects = config()?.list_subjects()?;
            if subjects.is_empty() {
                println!("No subjects found.");
            } else {
                for subject in subjects {
                    println!("{subject}");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn render_subject(subject: &FreeSurferSubject, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(subject)?,
        OutputFormat::Yaml => serde_yaml::to_string(subject)?,
        OutputFormat::Text => {
            let mut lines = vec![
                format!("subject_id: {}", subject.subject_id),
                format!("subject_path: {}", subject.subject_path.display()),
            ];
            lines.extend(
                subject
                    .files()
                    .into_iter()
                    .map(|file| format!("{:<42} {}", file.location, file.path.display())),
            );
            lines.join("\n")
        }
    })
}

/// Every required file relative to the subject directory, with its description.
fn expected_files(hemisphere: Option<Hemisphere>) -> Vec<(PathBuf, &'static str)> {
    let hemispheres: Vec<Hemisphere> = match hemisphere {
        Some(hemi) => vec![hemi],
        None => Hemisphere::ALL.to_vec(),
    };

    let mut files = Vec::new();
    let mut push = |dir: PathBuf, fields: &[FileField], hemi: Option<Hemisphere>| {
        for field in fields {
            files.push((dir.join(field.file_name(hemi)), field.description));
        }
    };

    push(SubjectPaths::mri_dir(), &MriFiles::FIELDS, None);
    push(SubjectPaths::transforms_dir(), &TransformFiles::FIELDS, None);
    for hemi in &hemispheres {
        push(SubjectPaths::surf_dir(), &SurfaceFiles::FIELDS, Some(*hemi));
    }
    for hemi in &hemispheres {
        push(SubjectPaths::label_dir(), &LabelFiles::FIELDS, Some(*hemi));
    }
    push(SubjectPaths::stats_dir(), &StatsFiles::FIELDS, None);
    push(SubjectPaths::scripts_dir(), &ScriptFiles::FIELDS, None);

    files
}

/// Expected layout, one line per required file, relative to the subject directory.
fn layout_lines(hemisphere: Option<Hemisphere>) -> Vec<String> {
    expected_files(hemisphere)
        .into_iter()
        .map(|(path, description)| format!("{:<40} {}", path.display(), description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Writes an empty file at every path the layout lists.
    fn create_subject(subjects_dir: &Path, id: &str) {
        let root = subjects_dir.join(id);
        for (relative, _) in expected_files(None) {
            let path = root.join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"").unwrap();
        }
    }

    #[test]
    fn test_parses_global_subjects_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["neurorm", "check", "bert", "--subjects-dir", "/data"])
            .unwrap();

        assert_eq!(cli.subjects_dir, Some(PathBuf::from("/data")));
        assert!(matches!(cli.command, Some(Commands::Check { subject }) if subject == "bert"));
    }

    #[test]
    fn test_parses_show_format_and_layout_hemisphere() {
        let cli = Cli::try_parse_from(["neurorm", "show", "bert", "--format", "yaml"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Show { format: OutputFormat::Yaml, .. })
        ));

        let cli = Cli::try_parse_from(["neurorm", "layout", "--hemisphere", "rh"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Layout { hemisphere: Some(Hemisphere::Right) })
        ));

        assert!(Cli::try_parse_from(["neurorm", "layout", "--hemisphere", "xx"]).is_err());
    }

    #[test]
    fn test_layout_lists_every_file() {
        let lines = layout_lines(None);
        assert_eq!(lines.len(), 15 + 5 + 14 * 2 + 5 * 2 + 12 + 3);
        assert!(lines.iter().any(|l| l.starts_with("mri/transforms/cc_up.lta")));
        assert!(lines.iter().any(|l| l.starts_with("surf/rh.w-g.pct.mgh")));

        let left_only = layout_lines(Some(Hemisphere::Left));
        assert!(left_only.iter().all(|l| !l.starts_with("label/rh.")));
        assert!(left_only.iter().any(|l| l.starts_with("label/lh.aparc.annot")));
    }

    #[test]
    fn test_render_subject_formats() {
        let temp = TempDir::new().unwrap();
        create_subject(temp.path(), "bert");
        let subject = FreeSurferSubject::from_subjects_dir(temp.path(), "bert").unwrap();

        let text = render_subject(&subject, OutputFormat::Text).unwrap();
        assert!(text.starts_with("subject_id: bert"));
        assert!(text.contains("mri.t1"));

        let json: serde_json::Value =
            serde_json::from_str(&render_subject(&subject, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["subject_id"], "bert");

        let yaml = render_subject(&subject, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("subject_id: bert"));
    }

    #[test]
    fn test_check_reports_failure_exit_code() {
        let temp = TempDir::new().unwrap();
        create_subject(temp.path(), "bert");
        fs::remove_file(temp.path().join("bert/mri/wm.mgz")).unwrap();
        let dir = Some(temp.path().to_path_buf());

        let code = run(dir.clone(), Commands::Check { subject: "bert".into() }).unwrap();
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));

        let missing = run(dir, Commands::Check { subject: "ernie".into() });
        assert!(missing.is_err());
    }

    #[test]
    fn test_layout_needs_no_subjects_dir() {
        let dir = Some(PathBuf::from("/nonexistent/subjects"));

        let code = run(dir.clone(), Commands::Layout { hemisphere: None }).unwrap();
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::SUCCESS));

        assert!(run(dir, Commands::List).is_err());
    }

    #[test]
    fn test_check_passes_on_tree_built_from_layout() {
        let temp = TempDir::new().unwrap();
        create_subject(temp.path(), "bert");

        let code = run(
            Some(temp.path().to_path_buf()),
            Commands::Check { subject: "bert".into() },
        )
        .unwrap();
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::SUCCESS));
    }
}
