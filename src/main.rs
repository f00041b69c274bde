use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

use bump_version::cli::orchestration::{apply_bump, plan_bump, BumpWorkflowArgs};
use bump_version::config;
use bump_version::delegate::NpmVersionWriter;
use bump_version::domain::BumpPolicy;
use bump_version::logging;
use bump_version::ui;
use bump_version::BumpError;

#[derive(clap::Parser)]
#[command(
    name = "bump-version",
    version,
    about = "Bump the version in package.json along the even/odd release channels"
)]
#[command(group(
    ArgGroup::new("policy")
        .required(true)
        .args(["release", "pre_release"])
))]
struct Args {
    #[arg(long, help = "Bump to release version (even minor)")]
    release: bool,

    #[arg(long, help = "Bump to pre-release version (odd minor)")]
    pre_release: bool,

    #[arg(short = 'C', long, help = "Project root containing the manifest")]
    root: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Show the new version without writing it")]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();
    logging::init_logging();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        let code = e
            .downcast_ref::<BumpError>()
            .map(BumpError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(args: Args) -> Result<()> {
    // clap's group already rejects zero or two flags
    let policy = BumpPolicy::from_flags(args.release, args.pre_release)?;

    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    let config = config::load_config(args.config.as_deref(), &root)?;
    let writer = NpmVersionWriter::new(config.delegate.program.clone());

    let workflow_args = BumpWorkflowArgs {
        root,
        policy,
        dry_run: args.dry_run,
    };

    let plan = plan_bump(&workflow_args)?;
    ui::display_proposed_version(&plan.previous, &plan.new, policy);

    if args.dry_run {
        ui::display_dry_run(writer.program(), &NpmVersionWriter::args(&plan.new));
        return Ok(());
    }

    ui::display_status(&format!("Running {} to write {}", writer.program(), plan.new));
    let result = apply_bump(&workflow_args, &plan, &writer)?;
    ui::display_success(&format!(
        "Version set to {} ({})",
        result.new, result.channel
    ));

    Ok(())
}
