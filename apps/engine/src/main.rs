use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_engine::config::Config;
use resume_engine::errors::AppError;
use resume_engine::extract::{
    extract_keywords, extract_profile_with, extract_sections, quick_summary, ExtractedProfile,
    FitInput, FitScorer, KeywordFitScorer, ResumeSections, DEFAULT_KEYWORD_LIMIT,
};
use resume_engine::ingest::load_text;
use resume_engine::layout::{layout, HelveticaMetrics};
use resume_engine::render::{render_pdf, tailored_resume_filename};

#[derive(Parser)]
#[command(name = "resume-engine")]
#[command(version)]
#[command(about = "Extract structure from resumes and lay resume text out as PDF", long_about = None)]
struct Cli {
    /// Print single-line JSON instead of pretty-printed
    #[arg(long, global = true, env = "RESUME_ENGINE_COMPACT")]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract profile fields (name, contact, links, skills) from a resume
    Extract {
        /// Resume file (.txt or .pdf), or "-" for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Also split the resume into named sections
        #[arg(long)]
        sections: bool,
    },

    /// Short preview summary of a resume
    Summary {
        #[arg(value_name = "INPUT")]
        input: String,
    },

    /// Most frequent keywords in a job description
    Keywords {
        #[arg(value_name = "JD")]
        jd: String,

        #[arg(long, default_value_t = DEFAULT_KEYWORD_LIMIT)]
        limit: usize,
    },

    /// Score a resume against a job description
    Fit {
        #[arg(long, value_name = "INPUT")]
        resume: String,

        #[arg(long, value_name = "JD")]
        jd: String,

        /// Number of job-description keywords to score against
        #[arg(long, default_value_t = DEFAULT_KEYWORD_LIMIT)]
        limit: usize,
    },

    /// Print the page draw instructions for flat resume text
    Layout {
        #[arg(value_name = "INPUT")]
        input: String,
    },

    /// Lay out flat resume text and write it as a PDF
    Render {
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output file (defaults to OUTPUT_DIR/<Name>_Tailored_Resume.pdf)
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct ExtractOutput {
    profile: ExtractedProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    sections: Option<ResumeSections>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("resume-engine v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli, &config) {
        error!(code = e.code(), "{e}");
        return Err(e.into());
    }
    Ok(())
}

fn run(cli: Cli, config: &Config) -> Result<(), AppError> {
    let compact = cli.compact;
    match cli.command {
        Commands::Extract { input, sections } => {
            let text = load_text(&input)?;
            let output = ExtractOutput {
                profile: extract_profile_with(&text, &config.skill_dictionary),
                sections: sections.then(|| extract_sections(&text)),
            };
            print_json(&output, compact)
        }
        Commands::Summary { input } => {
            let text = load_text(&input)?;
            print_json(&quick_summary(&text), compact)
        }
        Commands::Keywords { jd, limit } => {
            let text = load_text(&jd)?;
            print_json(&extract_keywords(&text, limit), compact)
        }
        Commands::Fit { resume, jd, limit } => {
            let resume_text = load_text(&resume)?;
            let jd_text = load_text(&jd)?;
            let profile = extract_profile_with(&resume_text, &config.skill_dictionary);
            let keywords = extract_keywords(&jd_text, limit);
            let scorer: &dyn FitScorer = &KeywordFitScorer;
            let report = scorer.score(
                FitInput {
                    profile: &profile,
                    resume_text: &resume_text,
                },
                &keywords,
            );
            info!(
                score = report.overall_score,
                gaps = report.gaps.len(),
                "fit scored"
            );
            print_json(&report, compact)
        }
        Commands::Layout { input } => {
            let text = load_text(&input)?;
            let pages = layout(
                &text,
                &config.page_geometry,
                &config.layout_style(),
                &HelveticaMetrics,
            );
            print_json(&pages, compact)
        }
        Commands::Render { input, out } => {
            let text = load_text(&input)?;
            let pages = layout(
                &text,
                &config.page_geometry,
                &config.layout_style(),
                &HelveticaMetrics,
            );
            let name = text
                .lines()
                .map(str::trim)
                .find(|l| !l.is_empty())
                .unwrap_or_default();
            let bytes = render_pdf(&pages, &config.page_geometry, name)?;
            let path =
                out.unwrap_or_else(|| config.output_dir.join(tailored_resume_filename(name)));
            std::fs::write(&path, &bytes)?;
            info!(path = %path.display(), pages = pages.len(), "PDF written");
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<(), AppError> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{json}");
    Ok(())
}
