use crate::bitbucket::{InsightsClient, Publisher};
use crate::cli::{CommonArgs, CustomArgs, GitDiffArgs, SpellCheckArgs, TerraformArgs};
use crate::config::{Credentials, ReportTarget, RunConfig, ToolsConfig};
use crate::output::{render_dry_run, render_summary};
use crate::report::{RawInput, Report, ReportKind};
use crate::tools::{GitDiff, ScSpell, TerraformFmt};
use anyhow::Context;
use std::io::{self, IsTerminal};
use tracing::{debug, info, warn};

pub fn execute_custom(args: CustomArgs) -> anyhow::Result<i32> {
    let config = resolve_config(&args.common, ToolsConfig::default())?;

    let input = match args.file {
        Some(path) => RawInput::File(path),
        None => RawInput::Text(args.annotations.unwrap_or_default()),
    };

    execute(
        &config,
        &args.common,
        ReportKind::Custom {
            status: args.status,
        },
        input,
    )
}

pub fn execute_terraform(args: TerraformArgs) -> anyhow::Result<i32> {
    let mut tools = ToolsConfig {
        working_dir: args.dir,
        ..ToolsConfig::default()
    };
    if let Some(binary) = args.terraform_bin {
        tools.terraform = binary;
    }
    let config = resolve_config(&args.common, tools)?;

    let input = match args.file {
        Some(path) => RawInput::File(path),
        None => RawInput::Tool(Box::new(TerraformFmt {
            binary: config.tools.terraform.clone(),
            working_dir: config.tools.working_dir.clone(),
        })),
    };

    execute(&config, &args.common, ReportKind::Terraform, input)
}

pub fn execute_git_diff(args: GitDiffArgs) -> anyhow::Result<i32> {
    let mut tools = ToolsConfig {
        working_dir: args.dir,
        ..ToolsConfig::default()
    };
    if let Some(binary) = args.git_bin {
        tools.git = binary;
    }
    let config = resolve_config(&args.common, tools)?;

    let input = match args.file {
        Some(path) => RawInput::File(path),
        None => RawInput::Tool(Box::new(GitDiff {
            binary: config.tools.git.clone(),
            working_dir: config.tools.working_dir.clone(),
            base: args.base,
        })),
    };

    execute(&config, &args.common, ReportKind::GitDiff, input)
}

pub fn execute_spell_check(args: SpellCheckArgs) -> anyhow::Result<i32> {
    let mut tools = ToolsConfig::default();
    if let Some(binary) = args.scspell_bin {
        tools.scspell = binary;
    }
    let config = resolve_config(&args.common, tools)?;

    let input = RawInput::Tool(Box::new(ScSpell {
        binary: config.tools.scspell.clone(),
        files: args.file_list,
        dictionaries: args.dict,
    }));

    execute(&config, &args.common, ReportKind::SpellCheck, input)
}

/// Build the report, publish it (or print it for a dry run) and return the exit code.
fn execute(
    config: &RunConfig,
    common: &CommonArgs,
    kind: ReportKind,
    input: RawInput,
) -> anyhow::Result<i32> {
    info!("Building {} report '{}'", kind.name(), common.report.report_title);

    let report = Report::from_input(
        &config.target,
        common.report.report_title.as_str(),
        common.report.report_desc.as_str(),
        &kind,
        input,
        common.report.force_pass,
    )
    .with_context(|| format!("Failed to build {} report", kind.name()))?;

    let outcome = report.outcome();
    info!(
        "Report resolved to {} (exit code {}) with {} annotations",
        outcome.status,
        outcome.exit_code,
        report.annotations().len()
    );
    if report.annotations().is_empty() {
        debug!("Nothing to annotate, the annotations request carries an empty list");
    }

    if config.dry_run {
        print!("{}", render_dry_run(&report)?);
    } else {
        let client = InsightsClient::new(config.credentials.clone(), config.timeout())?;
        publish(&report, &client)?;
    }

    if !config.silent {
        print!("{}", render_summary(&report, kind.name()));
    }

    Ok(outcome.exit_code)
}

/// Publish status, then annotations.
///
/// A rejected status still lets the annotations go out; a transport failure
/// stops immediately.
fn publish(report: &Report, publisher: &dyn Publisher) -> anyhow::Result<()> {
    let status = match report.publish_status(publisher) {
        Err(e) if !e.is_rejection() => {
            return Err(e).context("Failed to publish report");
        }
        other => other,
    };
    if let Err(e) = &status {
        warn!("Report was rejected, still sending annotations: {}", e);
    }

    report
        .publish_annotations(publisher)
        .context("Failed to publish annotations")?;
    status.context("Failed to publish report")?;

    Ok(())
}

fn resolve_config(common: &CommonArgs, tools: ToolsConfig) -> anyhow::Result<RunConfig> {
    let dry_run = common.report.dry_run;

    // A dry run never talks to the server, so don't ask for a password.
    let password = match &common.auth.password {
        Some(password) => password.clone(),
        None if dry_run => String::new(),
        None => prompt_password()?,
    };

    Ok(RunConfig {
        target: ReportTarget {
            base_url: common.server.base_url.clone(),
            project_key: common.server.project_key.clone(),
            repo_slug: common.server.repo_slug.clone(),
            commit_id: common.server.commit.clone(),
            report_key: common.report.report_key.clone(),
        },
        credentials: Credentials {
            user: common.auth.user.clone(),
            password,
        },
        tools,
        timeout_sec: common.server.timeout,
        dry_run,
        silent: common.report.silent,
    })
}

fn prompt_password() -> anyhow::Result<String> {
    if !io::stdin().is_terminal() {
        anyhow::bail!(
            "No password provided. Use --password or set BITBUCKET_PASSWORD"
        );
    }

    let password = rpassword::prompt_password("Enter your Bitbucket Server password: ")
        .context("Failed to read password")?;
    Ok(password)
}
