use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the portfolio page to static HTML.
    Render(RenderArgs),
    /// Strictly load and validate a profile document (no fallback).
    Check(CheckArgs),
    /// Print the embedded default profile as JSON.
    DumpDefault,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Site config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Profile document: file path or http(s) URL.
    #[arg(long)]
    data: Option<String>,

    /// Layout template HTML.
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output HTML path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Footer year.
    #[arg(long)]
    year: Option<i32>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Profile document: file path or http(s) URL.
    #[arg(long)]
    data: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Check(args) => cmd_check(args),
        Command::DumpDefault => cmd_dump_default(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => folio::SiteConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => folio::SiteConfig::default(),
    };
    if let Some(data) = args.data {
        config.data = Some(data);
    }
    if let Some(template) = args.template {
        config.template = Some(template);
    }
    if let Some(out) = args.out {
        config.out = out;
    }
    if let Some(year) = args.year {
        config.year = year;
    }
    config.validate()?;

    let session = folio::Session::open(config)?;
    if let folio::ProfileOrigin::Fallback { requested, reason } = session.origin() {
        eprintln!("profile '{requested}' unavailable ({reason}); rendered embedded default");
    }
    for report in &session.page().report().sections {
        match &report.result {
            Ok(folio::SectionOutcome::Rendered { items }) => {
                eprintln!("{:>10}: rendered ({items})", report.section.name());
            }
            Ok(folio::SectionOutcome::Skipped(reason)) => {
                eprintln!("{:>10}: skipped ({reason:?})", report.section.name());
            }
            Err(e) => eprintln!("{:>10}: degraded: {e}", report.section.name()),
        }
    }

    let out = session.write()?;
    println!("wrote {}", out.display());
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let source = folio::ProfileSource::parse(&args.data);
    let profile = source
        .load()
        .with_context(|| format!("load profile '{source}'"))?;
    profile
        .validate()
        .with_context(|| format!("validate profile '{source}'"))?;
    println!(
        "ok: {} skill groups, {} experience, {} projects, {} education",
        profile.skills.len(),
        profile.experience.len(),
        profile.projects.len(),
        profile.education.len()
    );
    Ok(())
}

fn cmd_dump_default() -> anyhow::Result<()> {
    let profile = folio::embedded_profile()?;
    let json = serde_json::to_string_pretty(&profile).context("serialize embedded profile")?;
    println!("{json}");
    Ok(())
}
