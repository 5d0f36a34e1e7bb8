use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dfaviz::config::{DEFAULT_GRAPH_NAME, DEFAULT_INPUT};
use dfaviz::render::{self, RenderEnv};
use dfaviz::{OutputFormat, RenderConfig};

/// Render a DFA description as a Graphviz image.
#[derive(Parser, Debug)]
#[command(name = "dfaviz", version, about)]
struct Cli {
    /// Automaton description: accepting states on line 1, then `source symbol target` lines
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Graph name, also used for the output file names
    #[arg(long, default_value = DEFAULT_GRAPH_NAME)]
    name: String,

    #[arg(long, value_enum, default_value = "png")]
    format: OutputFormat,

    /// Directory receiving `<name>.gv` and the rendered image
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Keep parallel edges instead of emitting a strict digraph
    #[arg(long)]
    no_strict: bool,

    /// Do not open the rendered image
    #[arg(long)]
    no_view: bool,

    /// Print the DOT source to stdout and stop
    #[arg(long)]
    dot_only: bool,

    /// Print a JSON summary of the run to stdout
    #[arg(long)]
    summary: bool,
}

impl From<&Cli> for RenderConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            input: cli.input.clone(),
            output_dir: cli.output_dir.clone(),
            graph_name: cli.name.clone(),
            format: cli.format,
            strict: !cli.no_strict,
            view: !cli.no_view,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let env = RenderEnv::new(RenderConfig::from(&cli));

    if cli.dot_only {
        let loaded = render::load(&env)
            .await
            .context("Unable to load automaton")?;
        print!("{}", loaded.graph.to_dot());
        return Ok(());
    }

    let summary = render::render_file(&env)
        .await
        .context("Unable to render automaton")?;

    if cli.summary {
        let json =
            serde_json::to_string_pretty(&summary).context("Unable to serialize summary")?;
        println!("{json}");
    }

    Ok(())
}
