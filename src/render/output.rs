use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::DeclarativeSpec;

/// Persisted form of a declarative spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Raw spec document.
    #[default]
    Json,
    /// Standalone page that renders the spec interactively.
    Html,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Html => "html",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ChartError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            _ => Err(ChartError::UnsupportedOutputFormat(token.to_owned())),
        }
    }
}

const HTML_TEMPLATE_HEAD: &str = r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <style>
    .error { color: red; }
  </style>
  <script type="text/javascript" src="https://cdn.jsdelivr.net/npm/vega@5"></script>
  <script type="text/javascript" src="https://cdn.jsdelivr.net/npm/vega-lite@5"></script>
  <script type="text/javascript" src="https://cdn.jsdelivr.net/npm/vega-embed@6"></script>
</head>
<body>
  <div id="vis"></div>
  <script>
    var spec = "##;

const HTML_TEMPLATE_TAIL: &str = r##";
    var embedOpt = {"renderer": "svg", "mode": "vega-lite"};
    vegaEmbed("#vis", spec, embedOpt).catch(function (err) {
      document.getElementById("vis").innerHTML =
        '<div class="error">' + err.message + '</div>';
    });
  </script>
</body>
</html>
"##;

impl DeclarativeSpec {
    /// Page that embeds the spec with the SVG renderer.
    pub fn to_html(&self) -> ChartResult<String> {
        let json = serde_json::to_string(self.as_value()).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize declarative spec: {e}"))
        })?;
        // Keeps string data from closing the inline script element.
        let json = json.replace("</", "<\\/");
        Ok(format!("{HTML_TEMPLATE_HEAD}{json}{HTML_TEMPLATE_TAIL}"))
    }

    pub fn render_as(&self, format: OutputFormat) -> ChartResult<String> {
        match format {
            OutputFormat::Json => self.to_json_pretty(),
            OutputFormat::Html => self.to_html(),
        }
    }
}

/// Writes `spec` to `path` in the format named by `format` (`json` or `html`).
///
/// Returns the written path.
pub fn save_spec(spec: &DeclarativeSpec, path: impl AsRef<Path>, format: &str) -> ChartResult<PathBuf> {
    let format = format.parse::<OutputFormat>()?;
    save_spec_as(spec, path, format)
}

pub fn save_spec_as(
    spec: &DeclarativeSpec,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> ChartResult<PathBuf> {
    let path = path.as_ref();
    let contents = spec.render_as(format)?;
    fs::write(path, contents)?;
    debug!(path = %path.display(), %format, "declarative spec saved");
    Ok(path.to_path_buf())
}
