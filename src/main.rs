//! PermitPro - interactive permit discovery demo for your terminal.
//!
//! Walks a visitor through a scripted permit discovery flow over hardcoded
//! fixture data. Also exposes the fixture catalog through a few
//! non-interactive subcommands.

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use permitpro::{tui, App, Config, ProjectCatalog};

/// Interactive permit discovery demo for your terminal
#[derive(Parser)]
#[command(name = "permitpro")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive demo (default)
    Run,

    /// List the demo project types
    Projects {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show the permit results for a project type
    Show {
        /// Project type (deck, bathroom, fence, solar)
        project: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show related building codes for a project type
    Codes {
        /// Project type (deck, bathroom, fence, solar)
        project: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show configuration
    Config {
        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();

    // Handle commands
    match cli.command {
        None | Some(Commands::Run) => {
            let app = App::new()?;
            tui::run_tui(app)?;
        }
        Some(Commands::Projects { format }) => {
            cmd_projects(&format)?;
        }
        Some(Commands::Show { project, format }) => {
            cmd_show(&project, &format)?;
        }
        Some(Commands::Codes { project, format }) => {
            cmd_codes(&project, &format)?;
        }
        Some(Commands::Config { path }) => {
            cmd_config(path)?;
        }
        Some(Commands::Completions { shell }) => {
            cmd_completions(shell);
        }
    }

    Ok(())
}

/// List the demo project types.
fn cmd_projects(format: &str) -> Result<()> {
    let catalog = ProjectCatalog::builtin();

    if format == "json" {
        let projects: Vec<_> = catalog
            .projects()
            .iter()
            .map(|p| {
                serde_json::json!({
                    "id": p.id,
                    "label": p.label,
                    "description": p.description,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    println!("Demo project types:");
    for project in catalog.projects() {
        println!("  {:<10} {} ({})", project.id, project.label, project.description);
    }
    Ok(())
}

/// Show the permit results for a project type.
fn cmd_show(project: &str, format: &str) -> Result<()> {
    let fixture = ProjectCatalog::builtin().resolve(project)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(fixture)?);
        return Ok(());
    }

    println!("{} - {} ({})", fixture.label, fixture.description, fixture.id);
    println!();
    println!("Required permits:");
    for permit in &fixture.permits {
        println!("  {}", permit.name);
        println!("    Fee: {} · Processing: {}", permit.fee, permit.processing_time);
        for form in &permit.forms {
            println!("    Form: {form}");
        }
    }
    println!();
    println!("Total fees:    {}", fixture.total_cost);
    println!("Est. timeline: {}", fixture.total_time);
    println!("Inspections:   {}", fixture.inspections.join(", "));
    Ok(())
}

/// Show related building codes for a project type.
///
/// Unknown project types produce empty output, not an error - the related
/// codes of an unknown key are defined to be the empty sequence.
fn cmd_codes(project: &str, format: &str) -> Result<()> {
    let codes = ProjectCatalog::builtin().related_codes(project);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(codes)?);
        return Ok(());
    }

    for code in codes {
        println!("{} ({})", code.title, code.code_citation);
        println!("  {}", code.description);
    }
    Ok(())
}

/// Show configuration.
fn cmd_config(path: bool) -> Result<()> {
    if path {
        match Config::config_dir() {
            Some(dir) => println!("{}", dir.join("config.toml").display()),
            None => println!("Could not determine config directory"),
        }
        return Ok(());
    }

    let config = Config::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "permitpro", &mut io::stdout());
}
