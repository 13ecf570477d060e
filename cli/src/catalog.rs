use anyhow::Result;
use console::style;
use sheetgen_core::catalog::ident::{lookup_key, subskill_lookup_key};
use sheetgen_core::catalog::{CatalogFormat, export_catalog};
use sheetgen_core::{Catalog, Config, SkillDescriptor};
use std::path::{Path, PathBuf};

pub fn handle_command(command: CatalogCommands, config_path: &Path) -> Result<()> {
    match command {
        CatalogCommands::List { catalog } => {
            let catalog = resolve_catalog(config_path, catalog)?;
            list_catalog(&catalog);
            Ok(())
        }
        CatalogCommands::Export { format, catalog } => {
            let catalog = resolve_catalog(config_path, catalog)?;
            print!("{}", export_catalog(&catalog, format.into())?);
            Ok(())
        }
    }
}

fn resolve_catalog(config_path: &Path, catalog: Option<PathBuf>) -> Result<Catalog> {
    let mut config = Config::load_or_init(config_path)?;
    if catalog.is_some() {
        config.catalog = catalog;
    }
    config.load_catalog()
}

fn default_label(catalog: &Catalog, key: &str) -> String {
    match catalog.default_for(key) {
        Some(code) => style(code).cyan().to_string(),
        None => style("-").dim().to_string(),
    }
}

fn list_catalog(catalog: &Catalog) {
    println!(
        "{} Skills ({})",
        style("✓").green().bold(),
        catalog.leaf_count()
    );
    println!();

    for skill in &catalog.skills {
        match skill {
            SkillDescriptor::Plain(name) => {
                println!(
                    "  {:<24} {}",
                    style(name).white().bold(),
                    default_label(catalog, &lookup_key(name))
                );
            }
            SkillDescriptor::Family { name, subskills } => {
                println!("  {}", style(name).white().bold());
                for sub in subskills {
                    let key = subskill_lookup_key(name, sub);
                    println!("    {:<22} {}", sub, default_label(catalog, &key));
                }
            }
        }
    }

    println!();
    println!(
        "{} Named skills ({} rows, default repeat {})",
        style("✓").green().bold(),
        catalog.instance_count(),
        catalog.default_repeat
    );
    println!();

    for named in catalog.named() {
        println!(
            "  {:<24} {} {}",
            style(named.name).white().bold(),
            default_label(catalog, &lookup_key(named.name)),
            style(format!("×{}", named.count)).dim()
        );
    }

    println!();
    let offsets: Vec<String> = catalog.offsets.iter().map(|o| format!("+{o}")).collect();
    println!("  Tiers:           {}", offsets.join(" "));
    println!("  Characteristics: {}", catalog.characteristics.join(" "));
}

#[derive(clap::Subcommand, Clone, Debug)]
pub enum CatalogCommands {
    /// Show skills, sub-skills, repeat counts and default characteristics
    List {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Print the catalog in a format `--catalog` can load back
    Export {
        #[arg(long, value_enum, default_value_t = FormatArg::Toml)]
        format: FormatArg,
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Toml,
    Yaml,
    Json,
}

impl From<FormatArg> for CatalogFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Toml => CatalogFormat::Toml,
            FormatArg::Yaml => CatalogFormat::Yaml,
            FormatArg::Json => CatalogFormat::Json,
        }
    }
}
