use std::io::IsTerminal;
use std::io::Read as _;

use anyhow::Context;
use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use tagcheck_conf::OutputFormat;
use tagcheck_conf::Settings;
use tagcheck_scan::TagBalanceChecker;

use crate::args::Args;
use crate::commands::Command;
use crate::exit::Exit;
use crate::render::DiagnosticRenderer;
use crate::report::Report;

const STDIN_PATH: &str = "-";

#[derive(Debug, Parser)]
pub struct Check {
    /// File to check. Use `-` to read from stdin.
    path: Utf8PathBuf,

    /// Output format [default: text, or `format` from config]
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Maximum number of findings to print; 0 prints all [default: 20]
    #[arg(long)]
    limit: Option<usize>,

    /// Exit with status 1 when any finding is reported.
    #[arg(long)]
    fail_on_error: bool,

    /// Replace the void element list (e.g. img,br,Icon).
    #[arg(long = "void", value_delimiter = ',')]
    void_elements: Vec<String>,
}

impl Command for Check {
    fn execute(&self, args: &Args) -> Result<Exit> {
        let project_root = resolve_project_root()?;
        let settings =
            Settings::new(project_root.as_std_path()).context("Failed to load settings")?;

        let source = self.read_source()?;
        let display_path = self.path.as_str();

        let checker = match self.void_elements(&settings) {
            Some(names) => TagBalanceChecker::with_void_elements(names),
            None => TagBalanceChecker::new(),
        };
        let errors = checker.check(&source);
        tracing::debug!(path = display_path, errors = errors.len(), "checked");

        let limit = self.limit.unwrap_or(settings.report_limit);
        let report = Report::new(display_path, &source, &errors, (limit > 0).then_some(limit));
        let format = self.format.unwrap_or(settings.format);

        if !args.global.quiet {
            match format {
                OutputFormat::Text => print!("{}", report.render_text()),
                OutputFormat::Json => {
                    println!("{}", report.render_json().context("Failed to encode report")?);
                }
                OutputFormat::Pretty => print!("{}", report.render_pretty(&pick_renderer())),
            }
        }

        let exit = if !errors.is_empty() && (self.fail_on_error || settings.fail_on_error) {
            Exit::error()
        } else {
            Exit::success()
        };

        if format == OutputFormat::Pretty && !errors.is_empty() && !args.global.quiet {
            Ok(exit.with_message(report.summary()))
        } else {
            Ok(exit)
        }
    }
}

impl Check {
    fn read_source(&self) -> Result<String> {
        if self.path.as_str() == STDIN_PATH {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            return Ok(source);
        }

        Ok(tagcheck_scan::read_source(&self.path)?)
    }

    /// Flag values win over config. Names are trimmed, so `--void "Icon, br"`
    /// yields `Icon` and `br`.
    fn void_elements(&self, settings: &Settings) -> Option<Vec<String>> {
        let names = if self.void_elements.is_empty() {
            settings.void_elements.as_ref()?
        } else {
            &self.void_elements
        };

        Some(
            names
                .iter()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

fn resolve_project_root() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    Utf8PathBuf::from_path_buf(cwd)
        .map_err(|_| anyhow::anyhow!("Current directory is not valid UTF-8"))
}

fn pick_renderer() -> DiagnosticRenderer {
    if std::io::stdout().is_terminal() {
        DiagnosticRenderer::styled()
    } else {
        DiagnosticRenderer::plain()
    }
}
