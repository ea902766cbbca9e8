use crate::command_handlers::spinner;
use crate::prompt::TerminalConfirm;
use anyhow::Result;
use console::style;
use std::path::Path;
use use_cli::config::HooksConfig;
use use_cli::conflict::{Confirm, ConflictResolver, Policy};
use use_cli::fetch::HttpFetcher;
use use_cli::installer::{InstallOutcome, InstallReport, InstallStatus, Installer, SkipReason};
use use_cli::registry::RegistryClient;
use use_cli::Error;

pub struct AddArgs<'a> {
    pub names: &'a [String],
    /// `None` asks on the terminal.
    pub policy: Option<Policy>,
    pub cfg: &'a HooksConfig,
    pub root: &'a Path,
    pub registry: &'a RegistryClient<HttpFetcher>,
}

pub fn run_add(args: AddArgs) -> Result<()> {
    let policy = args.policy;
    let confirm = move |p: &Path| match policy {
        Some(pol) => pol.confirm_overwrite(p),
        None => TerminalConfirm.confirm_overwrite(p),
    };
    let resolver = ConflictResolver::new(confirm);
    let pb = spinner("Fetching registry");
    let installer =
        Installer::new(args.cfg, args.root, args.registry, &resolver).with_progress(&pb);
    let result = installer.install(args.names);
    pb.finish_and_clear();
    let report = result?;

    let unavailable = report.unavailable_names();
    if !unavailable.is_empty() {
        for outcome in report.outcomes() {
            println!("{}", render(outcome));
        }
        return Err(Error::ItemsUnavailable { names: unavailable }.into());
    }
    summarize(&report)
}

fn summarize(report: &InstallReport) -> Result<()> {
    for outcome in report.outcomes() {
        println!("{}", render(outcome));
    }
    println!(
        "{} {}",
        style("Docs:").dim(),
        style(report.documentation_url()).cyan()
    );
    let failed = report.failed_count();
    if failed > 0 {
        anyhow::bail!("{failed} hook(s) failed to install");
    }
    Ok(())
}

fn render(outcome: &InstallOutcome) -> String {
    let name = &outcome.name;
    match &outcome.status {
        InstallStatus::Installed { path, overwritten } => {
            let verb = if *overwritten { "Overwrote" } else { "Installed" };
            format!("{} {verb} {name} -> {}", style("✔").green(), path.display())
        }
        InstallStatus::Skipped(SkipReason::OverwriteDeclined) => format!(
            "{} Skipped {name} (existing file kept)",
            style("-").yellow()
        ),
        InstallStatus::Skipped(SkipReason::BatchAborted) => {
            format!("{} {name} was not installed", style("-").dim())
        }
        InstallStatus::Failed(reason) => {
            format!("{} Failed {name}: {reason}", style("✘").red())
        }
        InstallStatus::Unavailable => {
            format!("{} {name} is not in the registry", style("✘").red())
        }
    }
}
