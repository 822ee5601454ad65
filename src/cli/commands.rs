use crate::config::GeneratorConfig;
use crate::generator::{plan_routes, render_modifier, Generator, RouteSynthesizer};
use crate::model::{load_tree, ControllerTree};
use crate::sink::{FileSink, RouteSink, WriterSink};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

/// Command-line interface for routesynth
///
/// Generates route registrations from a controller manifest.
#[derive(Parser)]
#[command(name = "routesynth-gen")]
#[command(about = "Route registration generator", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Append route registrations for every controller to the routes files
    Generate {
        /// Path to the controller manifest (YAML or JSON)
        #[arg(short, long)]
        tree: PathBuf,

        /// Project root containing the routes/ directory (default: config output_dir or .)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Root controller namespace; an empty value forces class references
        #[arg(short, long)]
        namespace: Option<String>,

        /// Path to routesynth.toml
        /// If not provided, will auto-detect alongside the manifest
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the generated routes instead of appending them
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Show how each controller would be routed
    Inspect {
        /// Path to the controller manifest (YAML or JSON)
        #[arg(short, long)]
        tree: PathBuf,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The manifest or config cannot be read or parsed
/// - A routes file cannot be appended to
pub fn run_cli() -> anyhow::Result<()> {
    run(Cli::parse())
}

/// Execute an already parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            tree,
            output,
            namespace,
            config,
            dry_run,
        } => {
            let config = GeneratorConfig::resolve(config.as_deref(), &tree)?
                .with_env()
                .with_overrides(namespace.as_deref(), output.as_deref());
            let controllers = load_tree(&tree)?;
            let synthesizer = RouteSynthesizer::from_config(&config);
            tracing::debug!(style = ?synthesizer.style(), "configured route synthesizer");

            if dry_run {
                let stdout = io::stdout();
                let mut sink = WriterSink::new(stdout.lock());
                generate(&synthesizer, &controllers, &mut sink)?;
            } else {
                let mut sink = FileSink::new(&config.output_dir);
                let updated = generate(&synthesizer, &controllers, &mut sink)?;
                for resource in updated {
                    println!("✅ Updated {}", sink.path_for(&resource).display());
                }
            }
            Ok(())
        }
        Commands::Inspect { tree } => {
            let controllers = load_tree(&tree)?;
            let stdout = io::stdout();
            inspect(&controllers, &mut stdout.lock())?;
            Ok(())
        }
    }
}

fn generate(
    synthesizer: &RouteSynthesizer,
    tree: &ControllerTree,
    sink: &mut dyn RouteSink,
) -> anyhow::Result<Vec<String>> {
    if tree.is_empty() {
        println!("ℹ️  No controllers in manifest, nothing to generate");
    }
    Ok(synthesizer.output(tree, sink)?.updated)
}

/// Write a human-readable routing summary for every controller.
pub fn inspect(tree: &ControllerTree, out: &mut dyn Write) -> io::Result<()> {
    for controller in tree.controllers() {
        let plan = plan_routes(controller);
        writeln!(out, "{} [{}] /{}", controller.identifier(), plan.class, plan.slug)?;
        match &plan.resource {
            Some(resource) => {
                let modifier = resource
                    .modifier
                    .as_ref()
                    .map(render_modifier)
                    .unwrap_or_default();
                writeln!(out, "  {}{modifier}", plan.class.registrar())?;
            }
            None => writeln!(out, "  (no resource)")?,
        }
        for route in &plan.explicit {
            writeln!(out, "  GET {} -> {}", route.path, route.method)?;
        }
        for method in &plan.ignored {
            writeln!(out, "  ignored: {method}")?;
        }
    }
    Ok(())
}
