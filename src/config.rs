//! Render configuration.
//!
//! The defaults reproduce the fixed behaviour of the tool: read `DFA.txt`,
//! write `DFA.gv` and `DFA.gv.png` to the working directory, use a strict
//! digraph and open the image afterwards.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "DFA.txt";
pub const DEFAULT_GRAPH_NAME: &str = "DFA";

/// Image format produced by the rasterizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
    Pdf,
}

impl OutputFormat {
    /// File extension of the rendered image.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
        }
    }
}

/// Settings for one render run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Automaton description to read
    pub input: PathBuf,

    /// Directory receiving the DOT source and the image
    pub output_dir: PathBuf,

    /// Graph name, also the base of the output file names
    pub graph_name: String,

    pub format: OutputFormat,

    /// Emit `strict digraph`
    pub strict: bool,

    /// Open the image in the platform viewer after rendering
    pub view: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            graph_name: DEFAULT_GRAPH_NAME.to_string(),
            format: OutputFormat::Png,
            strict: true,
            view: true,
        }
    }
}

impl RenderConfig {
    /// Path of the DOT source file, `<output_dir>/<name>.gv`.
    pub fn source_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.gv", self.graph_name))
    }

    /// Path of the rendered image, `<output_dir>/<name>.gv.<format>`.
    pub fn image_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.gv.{}", self.graph_name, self.format.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn defaults_match_fixed_behaviour() {
        let config = RenderConfig::default();

        assert_eq!(config.input, Path::new("DFA.txt"));
        assert_eq!(config.graph_name, "DFA");
        assert_eq!(config.format, OutputFormat::Png);
        assert!(config.strict);
        assert!(config.view);
    }

    #[test]
    fn output_paths_follow_graph_name() {
        let config = RenderConfig {
            output_dir: PathBuf::from("out"),
            graph_name: "Machine".to_string(),
            format: OutputFormat::Svg,
            ..RenderConfig::default()
        };

        assert_eq!(config.source_path(), Path::new("out/Machine.gv"));
        assert_eq!(config.image_path(), Path::new("out/Machine.gv.svg"));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"graph_name": "Other", "format": "pdf"}"#).unwrap();

        assert_eq!(config.graph_name, "Other");
        assert_eq!(config.format, OutputFormat::Pdf);
        assert_eq!(config.input, Path::new("DFA.txt"));
        assert!(config.view);
    }
}
