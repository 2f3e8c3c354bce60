//! Subcommand handlers

use crate::script::NavigationScript;
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use console::style;
use crumbtrail::{
    format_trail, BreadcrumbTrail, PageResolver, PageType, RenderedCrumb, StaticPageResolver,
};
use crumbtrail_config::ConfigManager;
use std::path::PathBuf;

/// Replays a navigation script and prints the resulting trail
pub fn replay(manager: &ConfigManager, matches: &ArgMatches) -> Result<()> {
    let script_path = matches
        .get_one::<String>("script")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("Script path is required"))?;

    let config = manager
        .load_with_env_overrides()
        .context("Failed to load configuration")?;
    let script = NavigationScript::load(&script_path)?;

    let trail = BreadcrumbTrail::from_config(&config);
    script.replay(&trail)?;

    let locale = matches
        .get_one::<String>("locale")
        .cloned()
        .unwrap_or_else(|| config.site.default_language.clone());
    let crumbs = trail.render(&script.translator(), &locale);

    if matches.get_flag("json") {
        println!(
            "{}",
            serde_json::to_string_pretty(&crumbs).context("Failed to serialize trail")?
        );
        return Ok(());
    }

    let separator = matches
        .get_one::<String>("separator")
        .map(|s| s.as_str())
        .unwrap_or(" > ");
    print_trail(&crumbs, separator);
    Ok(())
}

fn print_trail(crumbs: &[RenderedCrumb], separator: &str) {
    if crumbs.is_empty() {
        println!("Trail is empty.");
        return;
    }

    println!("\n{}", style(format_trail(crumbs, separator)).bold().cyan());
    println!("{}", "=".repeat(80));
    for (index, crumb) in crumbs.iter().enumerate() {
        println!(
            "{:>3}. [{}] {:<30} {}",
            index + 1,
            crumb.weight,
            crumb.label,
            style(&crumb.url).dim()
        );
    }
}

/// Lists known page types with their default weight and resolved URL
pub fn list_pages(manager: &ConfigManager) -> Result<()> {
    let config = manager
        .load_with_env_overrides()
        .context("Failed to load configuration")?;
    let resolver = StaticPageResolver::from_config(&config);

    println!("\n{} Known Pages", style(PageType::ALL.len()).bold().cyan());
    println!("{}", "=".repeat(80));
    for page in PageType::ALL {
        let url = resolver.resolve(page.name()).unwrap_or_default();
        println!(
            "{:<16} weight {}  {}",
            page.name(),
            page.default_weight(),
            style(url).dim()
        );
    }
    Ok(())
}

/// Writes the default config file if none exists
pub fn config_init(manager: &ConfigManager) -> Result<()> {
    let created = manager
        .initialize()
        .context("Failed to initialize configuration")?;
    if created {
        println!(
            "{} Config written to {}",
            style("✓").green().bold(),
            manager.config_path().display()
        );
    } else {
        println!(
            "Config already exists at {}",
            manager.config_path().display()
        );
    }
    Ok(())
}

/// Prints the effective configuration as TOML
pub fn config_show(manager: &ConfigManager) -> Result<()> {
    let config = manager
        .load_with_env_overrides()
        .context("Failed to load configuration")?;
    let rendered = toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
    print!("{}", rendered);
    Ok(())
}

/// Overwrites the config file with the defaults
pub fn config_reset(manager: &ConfigManager) -> Result<()> {
    manager.reset().context("Failed to reset configuration")?;
    println!(
        "{} Config reset, previous file kept next to {}",
        style("✓").green().bold(),
        manager.config_path().display()
    );
    Ok(())
}

/// Validates the config file, failing if it has invalid values
pub fn config_validate(manager: &ConfigManager) -> Result<()> {
    let errors = manager
        .validate()
        .context("Failed to load configuration")?;

    if errors.is_empty() {
        println!("{} Configuration is valid", style("✓").green().bold());
        return Ok(());
    }

    for error in &errors {
        println!(
            "{} {} {}",
            style("✗").red().bold(),
            style(&error.field).bold(),
            error.message
        );
    }
    bail!("{} invalid setting(s)", errors.len())
}
