//! Rasterization of DOT graphs into image files.
//!
//! [`GraphvizRasterizer`] hands the graph to `graphviz_rust::exec`, which
//! pipes the printed source into the Graphviz `dot` binary. The
//! [`Rasterizer`] trait is the seam tests use to stand in for Graphviz.

use crate::config::OutputFormat;
use graphviz_rust::cmd::{CommandArg, Format};
use graphviz_rust::dot_structures::Graph as DotGraph;
use graphviz_rust::exec;
use graphviz_rust::printer::PrinterContext;
use std::fmt::Debug;
use std::io;
use std::path::Path;

/// Turns a DOT graph into an image at a given path.
pub trait Rasterizer: Debug + Send + Sync {
    fn rasterize(&self, graph: DotGraph, format: OutputFormat, image: &Path) -> io::Result<()>;
}

/// Rasterizer backed by the Graphviz `dot` executable.
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphvizRasterizer;

impl Rasterizer for GraphvizRasterizer {
    fn rasterize(&self, graph: DotGraph, format: OutputFormat, image: &Path) -> io::Result<()> {
        exec(
            graph,
            &mut PrinterContext::default(),
            vec![
                CommandArg::Format(graphviz_format(format)),
                CommandArg::Output(image.to_string_lossy().into_owned()),
            ],
        )
        .map(|_| ())
    }
}

/// Graphviz output format for an [`OutputFormat`].
pub fn graphviz_format(format: OutputFormat) -> Format {
    match format {
        OutputFormat::Png => Format::Png,
        OutputFormat::Svg => Format::Svg,
        OutputFormat::Pdf => Format::Pdf,
    }
}
