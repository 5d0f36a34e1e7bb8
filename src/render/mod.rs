//! Effectful rendering shell.
//!
//! This module is the "imperative shell" around the pure parser and graph
//! code. Every side effect is a Stillwater effect run against a
//! [`RenderEnv`]:
//!
//! - [`read_input`] reads the automaton description
//! - [`write_source`] writes the DOT source
//! - [`rasterize`] hands the graph to the configured [`Rasterizer`]
//! - [`open_viewer`] hands the image to the platform viewer
//!
//! [`render_file`] chains them into the full pipeline.

pub mod error;
pub mod rasterizer;
pub mod viewer;

pub use error::RenderError;
pub use rasterizer::{GraphvizRasterizer, Rasterizer};
pub use viewer::viewer_command;

use crate::config::RenderConfig;
use crate::graph::Graph;
use crate::parser::{parse, ParseReport, ParsedAutomaton};
use chrono::{DateTime, Utc};
use graphviz_rust::dot_structures::Graph as DotGraph;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use stillwater::effect::{BoxedEffect, Effect};
use stillwater::prelude::*;
use tracing::{debug, info};

/// Environment every render effect runs against.
#[derive(Clone, Debug)]
pub struct RenderEnv {
    pub config: RenderConfig,
    pub rasterizer: Arc<dyn Rasterizer>,
}

impl RenderEnv {
    /// Environment rasterizing through Graphviz.
    pub fn new(config: RenderConfig) -> Self {
        Self::with_rasterizer(config, GraphvizRasterizer)
    }

    pub fn with_rasterizer(config: RenderConfig, rasterizer: impl Rasterizer + 'static) -> Self {
        Self {
            config,
            rasterizer: Arc::new(rasterizer),
        }
    }
}

impl Default for RenderEnv {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

/// Parsed input and the graph derived from it.
#[derive(Clone, Debug)]
pub struct Loaded {
    pub parsed: ParsedAutomaton,
    pub graph: Graph,
}

/// Outcome of a full render run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenderSummary {
    pub input: PathBuf,
    pub source: PathBuf,
    pub image: PathBuf,
    pub states: usize,
    pub accepting: usize,
    pub edges: usize,
    pub viewed: bool,
    pub report: ParseReport,
    pub rendered_at: DateTime<Utc>,
}

/// Read the configured input file.
pub fn read_input() -> BoxedEffect<String, RenderError, RenderEnv> {
    from_fn(|env: &RenderEnv| {
        let path = &env.config.input;
        fs::read_to_string(path).map_err(|source| RenderError::ReadInput {
            path: path.clone(),
            source,
        })
    })
    .boxed()
}

/// Write DOT source to `<output_dir>/<name>.gv` and return its path.
pub fn write_source(dot: String) -> BoxedEffect<PathBuf, RenderError, RenderEnv> {
    from_fn(move |env: &RenderEnv| {
        let path = env.config.source_path();
        fs::write(&path, dot.as_bytes()).map_err(|source| RenderError::WriteSource {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    })
    .boxed()
}

/// Rasterize `graph` to `<output_dir>/<name>.gv.<format>` and return the
/// image path.
pub fn rasterize(graph: DotGraph) -> BoxedEffect<PathBuf, RenderError, RenderEnv> {
    from_fn(move |env: &RenderEnv| {
        let image = env.config.image_path();

        debug!(
            format = env.config.format.as_str(),
            image = %image.display(),
            "running rasterizer"
        );
        env.rasterizer
            .rasterize(graph.clone(), env.config.format, &image)
            .map_err(|source| RenderError::rasterizer(source, &image))?;

        Ok(image)
    })
    .boxed()
}

/// Launch the platform viewer on `image` without waiting for it.
pub fn open_viewer(image: PathBuf) -> BoxedEffect<(), RenderError, RenderEnv> {
    from_fn(move |_env: &RenderEnv| {
        viewer_command(&image)
            .spawn()
            .map(|_child| ())
            .map_err(|source| RenderError::ViewerFailed {
                path: image.clone(),
                source,
            })
    })
    .boxed()
}

/// Read and parse the input, then derive the graph.
pub async fn load(env: &RenderEnv) -> Result<Loaded, RenderError> {
    let text = read_input().run(env).await?;
    let parsed = parse(&text);
    let graph = Graph::from_automaton(
        env.config.graph_name.clone(),
        env.config.strict,
        &parsed.automaton,
    );

    info!(
        input = %env.config.input.display(),
        states = parsed.automaton.states().len(),
        transitions = parsed.automaton.transitions().len(),
        skipped = parsed.report.skipped.len(),
        "loaded automaton"
    );

    Ok(Loaded { parsed, graph })
}

/// Full pipeline: load, write source, rasterize, and view if configured.
pub async fn render_file(env: &RenderEnv) -> Result<RenderSummary, RenderError> {
    let Loaded { parsed, graph } = load(env).await?;

    let source = write_source(graph.to_dot()).run(env).await?;
    info!(path = %source.display(), "wrote graph source");

    let image = rasterize(graph.to_dot_graph()).run(env).await?;
    info!(path = %image.display(), "rendered image");

    if env.config.view {
        open_viewer(image.clone()).run(env).await?;
    }

    Ok(RenderSummary {
        input: env.config.input.clone(),
        source,
        image,
        states: parsed.automaton.states().len(),
        accepting: parsed.automaton.accepting().len(),
        edges: graph.edges().len(),
        viewed: env.config.view,
        report: parsed.report,
        rendered_at: Utc::now(),
    })
}
