use anyhow::Result;
use console::style;
use sheetgen_core::{Config, Layout, OutputStatus};
use std::path::{Path, PathBuf};

#[derive(clap::Args, Clone, Debug, Default)]
pub struct GenerateArgs {
    /// Output file (overrides `output` in the config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Catalog file (.toml, .yaml or .json) used instead of the built-in skills
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Emit a complete HTML page instead of a fragment
    #[arg(long)]
    pub standalone: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutArg {
    /// skills-first / skills-second
    FirstSecond,
    /// skills-left / skills-right
    LeftRight,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::FirstSecond => Layout::FirstSecond,
            LayoutArg::LeftRight => Layout::LeftRight,
        }
    }
}

pub fn resolve_config(config_path: &Path, args: &GenerateArgs) -> Result<Config> {
    let mut config = Config::load_or_init(config_path)?;

    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(catalog) = &args.catalog {
        config.catalog = Some(catalog.clone());
    }
    if let Some(layout) = args.layout {
        config.layout = layout.into();
    }
    if args.standalone {
        config.standalone = true;
    }

    Ok(config)
}

pub fn run_generate(config_path: &Path, args: &GenerateArgs) -> Result<()> {
    let config = resolve_config(config_path, args)?;
    let report = config.generator()?.generate(&config.output)?;

    let name = report
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.path.display().to_string());

    println!(
        "{} HTML file '{}' generated.",
        style("✓").green().bold(),
        name
    );
    println!(
        "  {} skill rows, {} named-skill rows → {}",
        report.skill_rows,
        report.instance_rows,
        style(report.path.display()).dim()
    );

    Ok(())
}

pub fn run_check(config_path: &Path, args: &GenerateArgs) -> Result<()> {
    let config = resolve_config(config_path, args)?;
    let status = config.generator()?.check(&config.output)?;

    match status {
        OutputStatus::UpToDate => {
            println!(
                "{} {} is up to date",
                style("✓").green().bold(),
                config.output.display()
            );
            Ok(())
        }
        OutputStatus::Stale => anyhow::bail!(
            "{} is out of date. Run 'sheetgen generate' to refresh it.",
            config.output.display()
        ),
        OutputStatus::Missing => anyhow::bail!(
            "{} does not exist. Run 'sheetgen generate' to create it.",
            config.output.display()
        ),
    }
}
