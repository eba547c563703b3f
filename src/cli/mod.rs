//! CLI argument parsing module
//!
//! This module handles command-line argument parsing and application entry point.

use crate::browser::ChromiumBrowser;
use crate::config::ExportConfig;
use crate::cookies::CookieExporter;
use crate::error::Result;
use crate::exit_code::exit_code_for_error;
use crate::logging;
use crate::output::OutputWriter;
use crate::utils::FileUtils;
use clap::{Arg, ArgAction, ArgMatches, Command};

/// Environment variable consulted for the master secret override.
pub const PASSWORD_ENV: &str = "COOKIE_EXPORT_PASSWORD";

/// Main entry point for the CLI application
pub fn run() {
    let matches = create_app().get_matches();
    logging::init(logging::default_level(
        matches.get_flag("verbose"),
        matches.get_flag("quiet"),
    ));

    if let Err(e) = run_with_args(&matches) {
        eprintln!("cookie-export: error: {}", e);
        std::process::exit(exit_code_for_error(&e));
    }
}

/// Run cookie-export with parsed command line arguments
fn run_with_args(matches: &ArgMatches) -> Result<()> {
    let config = build_config_from_args(matches)?;
    let writer = OutputWriter::new(config.output.clone());
    let cookies = CookieExporter::new(config).export()?;
    writer.write_cookies(&cookies)
}

/// Create the CLI application structure
pub fn create_app() -> Command {
    Command::new("cookie-export")
        .version(crate::VERSION)
        .about("Export and decrypt Chromium browser cookies as JSON")
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .value_name("FILE")
                .help("Path to the Cookies database (default: the browser's Default profile)"),
        )
        .arg(
            Arg::new("browser")
                .short('b')
                .long("browser")
                .value_name("BROWSER")
                .help("Browser whose keychain entry and profile to use: chrome, chromium, edge, brave, opera, vivaldi, whale")
                .default_value("chrome"),
        )
        .arg(
            Arg::new("password")
                .long("password")
                .value_name("SECRET")
                .env(PASSWORD_ENV)
                .hide_env_values(true)
                .help("Master secret to use instead of the keychain entry"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .value_name("REGEX")
                .help("Drop cookies whose domain matches this pattern"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write output to file"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Print JSON on a single line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors")
                .action(ArgAction::SetTrue),
        )
}

/// Build configuration from command line arguments
pub fn build_config_from_args(matches: &ArgMatches) -> Result<ExportConfig> {
    let mut config = ExportConfig::default();

    if let Some(browser) = matches.get_one::<String>("browser") {
        config.browser = browser.parse::<ChromiumBrowser>()?;
    }

    config.cookie_path = matches.get_one::<String>("path").cloned();
    config.password = matches.get_one::<String>("password").cloned();
    config.exclude_domains = matches.get_one::<String>("exclude").cloned();

    if let Some(output_file) = matches.get_one::<String>("output") {
        config.output.file = Some(FileUtils::expand_path(output_file)?);
    }
    config.output.pretty = !matches.get_flag("compact");

    Ok(config)
}
