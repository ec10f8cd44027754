//! docsite CLI - enumerates content routes, prints the navigation manifest,
//! and shows the effective theme and configuration.

use std::{error::Error, path::PathBuf, process};

use clap::{Parser, Subcommand};
use tracing::info;

use docsite::{
    config::{Config, ConfigPaths},
    content::ContentTree,
    pages,
    theme::Theme,
    tracing_config,
};

#[derive(Parser)]
#[command(name = "docsite")]
#[command(about = "Static documentation site generator for a schema-definition language")]
struct Cli {
    /// Path to the site configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write logs to the docsite log directory
    #[arg(long)]
    log_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every static route discovered in the docs directory
    Paths,
    /// Print the navigation manifest routes
    Pages,
    /// Print the effective theme (defaults with overrides applied)
    Theme,
    /// Print the effective site configuration
    Config,
    /// Validate configuration, manifest, theme overrides, and content tree
    Check,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.log_file {
        tracing_config::init_with_file()?;
    } else {
        tracing_config::init_cli_mode()?;
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => ConfigPaths::main_config()?,
    };

    match run(&cli.command, &config_path) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn run(command: &Commands, config_path: &std::path::Path) -> docsite::Result<String> {
    let config = Config::load_with_imports(config_path)?;

    match command {
        Commands::Paths => {
            let tree = ContentTree::new(&config.site.docs_dir);
            let routes = tree.discover()?;
            Ok(format_routes(&routes))
        }
        Commands::Pages => {
            let manifest = pages::load_manifest(&config.site.pages_manifest)?;
            let routes = pages::route_paths(&manifest);
            Ok(format_routes(&routes))
        }
        Commands::Theme => {
            let theme = load_theme(&config)?;
            serde_json::to_string_pretty(theme.as_value()).map_err(|e| {
                docsite::DocsiteError::ConfigValidation {
                    component: "theme rendering".to_string(),
                    details: e.to_string(),
                }
            })
        }
        Commands::Config => {
            toml::to_string_pretty(&config).map_err(|e| docsite::DocsiteError::ConfigValidation {
                component: "config rendering".to_string(),
                details: e.to_string(),
            })
        }
        Commands::Check => check_site(&config, config_path),
    }
}

fn load_theme(config: &Config) -> docsite::Result<Theme> {
    match &config.site.theme_overrides {
        Some(path) => Theme::load_overrides(path),
        None => Ok(Theme::builtin()),
    }
}

fn check_site(config: &Config, config_path: &std::path::Path) -> docsite::Result<String> {
    let config_files = Config::get_all_config_files(config_path)?;
    info!(files = config_files.len(), "configuration files resolved");

    let tree = ContentTree::new(&config.site.docs_dir);
    let content_routes = tree.discover()?;

    let manifest = pages::load_manifest(&config.site.pages_manifest)?;
    let manifest_routes = pages::route_paths(&manifest);

    let _ = load_theme(config)?;

    let mut report = Vec::new();
    report.push(format!("configuration: {} file(s) ok", config_files.len()));
    report.push(format!("content: {} route(s) ok", content_routes.len()));
    report.push(format!("manifest: {} route(s) ok", manifest_routes.len()));
    report.push("theme: ok".to_string());

    // Flag manifest entries with no markdown behind them.
    let missing: Vec<String> = manifest_routes
        .iter()
        .filter(|route| !content_routes.contains(route))
        .map(|route| route.join("/"))
        .collect();
    if missing.is_empty() {
        report.push("coverage: every manifest route has content".to_string());
    } else {
        report.push(format!("coverage: missing content for {}", missing.join(", ")));
    }

    Ok(report.join("\n"))
}

fn format_routes(routes: &[Vec<String>]) -> String {
    routes
        .iter()
        .map(|route| format!("/{}", route.join("/")))
        .collect::<Vec<String>>()
        .join("\n")
}
