use anyhow::Result;
use clap::Parser;
use localpkg::commands;
use localpkg::config::{Config, PACKAGE_PATH_ENV, PACKAGE_SOURCE_ENV};
use std::path::PathBuf;

/// localpkg - install packages from a local package directory
///
/// Each entry of the package source is a package: a directory with a
/// package.json manifest, or a manifest file of its own.
///
/// Examples:
///   localpkg list                  # Show available packages
///   localpkg install foo bar       # Install packages foo and bar
#[derive(Parser, Debug)]
#[command(author, version = env!("LOCALPKG_VERSION"), about, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Be chatty
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing packages
    #[arg(
        long = "package-source",
        env = PACKAGE_SOURCE_ENV,
        value_name = "DIR",
        global = true
    )]
    pub package_source: Option<PathBuf>,

    /// Install packages to this location
    #[arg(
        long = "package-path",
        env = PACKAGE_PATH_ENV,
        value_name = "DIR",
        global = true
    )]
    pub package_path: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List available packages
    List,

    /// Install one or more packages
    Install(InstallArgs),
}

#[derive(clap::Args, Debug)]
pub struct InstallArgs {
    /// Package identifiers, as listed in the package source
    #[arg(value_name = "PACKAGE", required = true)]
    pub packages: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let runtime = localpkg::runtime::RealRuntime;
    let config = Config::resolve(&runtime, cli.package_source, cli.package_path, cli.verbose)?;

    match cli.command {
        Commands::List => commands::list(&runtime, &config).await?,
        Commands::Install(args) => commands::install(&runtime, &config, &args.packages).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_install_parsing() {
        let cli = Cli::try_parse_from(["localpkg", "install", "foo", "bar"]).unwrap();
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.packages, vec!["foo", "bar"]);
            }
            _ => panic!("Expected Install command"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_list_parsing() {
        let cli = Cli::try_parse_from(["localpkg", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_cli_global_options_parsing() {
        let cli = Cli::try_parse_from([
            "localpkg",
            "-v",
            "--package-source",
            "/srv/packages",
            "list",
            "--package-path",
            "/opt/installed",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.package_source, Some(PathBuf::from("/srv/packages")));
        assert_eq!(cli.package_path, Some(PathBuf::from("/opt/installed")));
    }

    #[test]
    fn test_cli_install_requires_a_package() {
        let result = Cli::try_parse_from(["localpkg", "install"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        let result = Cli::try_parse_from(["localpkg"]);
        assert!(result.is_err());
    }
}
