use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use crumbtrail_config::ConfigManager;
use std::path::PathBuf;

mod commands;
mod script;

fn build_cli() -> Command {
    Command::new("crumbtrail")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Replay navigation sessions and inspect breadcrumb trails")
        .arg(
            Arg::new("config-dir")
                .short('c')
                .long("config-dir")
                .value_name("DIR")
                .help("Directory holding config.toml (defaults to the user config directory)")
                .global(true),
        )
        .subcommand(
            Command::new("replay")
                .about("Replay a JSON navigation script and print the resulting trail")
                .arg(
                    Arg::new("script")
                        .required(true)
                        .value_name("SCRIPT")
                        .help("Path to the navigation script"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the trail as JSON")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("locale")
                        .short('l')
                        .long("locale")
                        .value_name("LOCALE")
                        .help("Locale used to resolve labels"),
                )
                .arg(
                    Arg::new("separator")
                        .short('s')
                        .long("separator")
                        .value_name("SEP")
                        .help("Separator between crumbs")
                        .default_value(" > "),
                ),
        )
        .subcommand(Command::new("pages").about("List known page types and their URLs"))
        .subcommand(
            Command::new("config")
                .about("Manage the configuration file")
                .subcommand(Command::new("init").about("Write a default config file"))
                .subcommand(Command::new("show").about("Print the effective configuration"))
                .subcommand(Command::new("validate").about("Validate the config file"))
                .subcommand(
                    Command::new("reset")
                        .about("Overwrite the config file with defaults, keeping a backup"),
                )
                .subcommand(Command::new("path").about("Print the config file path")),
        )
}

fn config_manager(matches: &ArgMatches) -> Result<ConfigManager> {
    match matches.get_one::<String>("config-dir") {
        Some(dir) => ConfigManager::with_directory(PathBuf::from(dir)),
        None => ConfigManager::new(),
    }
    .context("Failed to locate configuration directory")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let matches = build_cli().get_matches();
    let manager = config_manager(&matches)?;

    match matches.subcommand() {
        Some(("replay", sub_matches)) => commands::replay(&manager, sub_matches),
        Some(("pages", _)) => commands::list_pages(&manager),
        Some(("config", sub_matches)) => match sub_matches.subcommand() {
            Some(("init", _)) => commands::config_init(&manager),
            Some(("show", _)) => commands::config_show(&manager),
            Some(("validate", _)) => commands::config_validate(&manager),
            Some(("reset", _)) => commands::config_reset(&manager),
            Some(("path", _)) => {
                println!("{}", manager.config_path().display());
                Ok(())
            }
            _ => {
                build_cli().print_help()?;
                Ok(())
            }
        },
        _ => {
            build_cli().print_help()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_replay_arguments() {
        let matches = build_cli()
            .try_get_matches_from(["crumbtrail", "-c", "/tmp/ct", "replay", "nav.json", "--json"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("config-dir").map(|s| s.as_str()),
            Some("/tmp/ct")
        );
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "replay");
        assert!(sub.get_flag("json"));
        assert_eq!(sub.get_one::<String>("separator").map(|s| s.as_str()), Some(" > "));
    }

    #[test]
    fn test_config_reset_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["crumbtrail", "config", "reset"])
            .unwrap();
        let (_, config) = matches.subcommand().unwrap();
        assert_eq!(config.subcommand_name(), Some("reset"));
    }
}
