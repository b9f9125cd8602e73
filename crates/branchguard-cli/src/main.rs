//! CLI entry point for branchguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `branchguard-app` crate.

use anyhow::Context;
use branchguard_app::{
    CheckInput, ExplainOutput, event_error_report, parse_report_json, render_annotations,
    render_markdown, render_notices, run_check, run_explain, runtime_error_report,
    serialize_report, to_renderable, verdict_exit_code,
};
use branchguard_event::EventError;
use branchguard_settings::Overrides;
use branchguard_types::ReportEnvelope;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "branchguard",
    version,
    about = "Branch naming and pull-request direction guard for CI"
)]
struct Cli {
    /// Path to branchguard config TOML.
    #[arg(long, default_value = "branchguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (gitflow|advisory).
    #[arg(long)]
    profile: Option<String>,

    /// Main branch name.
    #[arg(long, env = "INPUT_BRANCH_MAIN")]
    branch_main: Option<String>,

    /// Develop branch name.
    #[arg(long, env = "INPUT_BRANCH_DEVELOP")]
    branch_develop: Option<String>,

    /// Prefix for feature branches.
    #[arg(long, env = "INPUT_PREFIX_FEATURE")]
    prefix_feature: Option<String>,

    /// Prefix for hotfix branches.
    #[arg(long, env = "INPUT_PREFIX_HOTFIX")]
    prefix_hotfix: Option<String>,

    /// Prefix for alignment branches.
    #[arg(long, env = "INPUT_PREFIX_ALIGN")]
    prefix_align: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate policy for the triggering event and write artifacts.
    Check {
        /// Triggering event kind (push|pull_request).
        #[arg(long, env = "GITHUB_EVENT_NAME")]
        event_name: String,

        /// Path to the event payload JSON file.
        #[arg(long, env = "GITHUB_EVENT_PATH")]
        event_path: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/branchguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/branchguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/branchguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/branchguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a rule id or code with remediation guidance.
    Explain {
        /// The rule id (e.g., "branch.naming") or code (e.g., "unknown_prefix") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref event_name,
            ref event_path,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(
            &cli,
            event_name.clone(),
            event_path.clone(),
            report_out.clone(),
            write_markdown,
            markdown_out.clone(),
        ),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

/// Whether output should use GitHub Actions workflow commands.
fn on_github_actions() -> bool {
    std::env::var_os("GITHUB_ACTIONS").is_some_and(|v| v == "true")
}

fn cmd_check(
    cli: &Cli,
    event_name: String,
    event_path: Utf8PathBuf,
    report_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let event_payload = std::fs::read_to_string(&event_path)
            .with_context(|| format!("read event payload: {}", event_path))?;

        // Load config if present; missing file is allowed (defaults apply).
        let config_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

        let overrides = Overrides {
            profile: cli.profile.clone(),
            main_branch: cli.branch_main.clone(),
            develop_branch: cli.branch_develop.clone(),
            feature_prefix: cli.prefix_feature.clone(),
            hotfix_prefix: cli.prefix_hotfix.clone(),
            align_prefix: cli.prefix_align.clone(),
        };

        let output = run_check(CheckInput {
            event_name: &event_name,
            event_payload: &event_payload,
            config_text: &config_text,
            overrides,
        })?;

        write_report_file(&report_out, &output.report).context("write report json")?;

        let renderable = to_renderable(&output.report);
        if write_markdown {
            let md = render_markdown(&renderable);
            write_text_file(&markdown_out, &md).context("write markdown")?;
        }

        if on_github_actions() {
            for line in render_notices(&renderable) {
                println!("{line}");
            }
            for line in render_annotations(&renderable, renderable.findings.len()) {
                println!("{line}");
            }
        } else {
            for note in &output.report.data.rules_checked {
                eprintln!("branchguard: {note}");
            }
            for finding in &output.report.findings {
                eprintln!("branchguard: {}", finding.message);
            }
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = match err.downcast_ref::<EventError>() {
                Some(event_err) => event_error_report(&event_name, event_err),
                None => runtime_error_report(&event_name, &format!("{err:#}")),
            };
            let _ = write_report_file(&report_out, &report);
            if on_github_actions() {
                println!(
                    "::error::{}",
                    format!("{err:#}").replace('%', "%25").replace('\n', "%0A")
                );
            }
            eprintln!("branchguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &camino::Utf8Path, report: &ReportEnvelope) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let renderable = to_renderable(&report);
    let md = render_markdown(&renderable);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let renderable = to_renderable(&report);

    for annotation in render_annotations(&renderable, max) {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", branchguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                branchguard_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
