use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

use super::dot::Diagram;
use crate::error::{Error, Result};

/// Image formats handed to Graphviz via `-T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

/// Pipes a diagram through an external Graphviz binary.
#[derive(Debug, Clone)]
pub struct GraphvizWriter {
    program: String,
}

impl GraphvizWriter {
    pub fn new() -> Self {
        Self {
            program: "dot".to_string(),
        }
    }

    /// Use another layout program, e.g. a full path to `dot`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn write(&self, diagram: &Diagram, format: ImageFormat, output_path: &Path) -> Result<()> {
        debug!(program = %self.program, format = format.as_str(), output = %output_path.display(), "rendering diagram");

        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", format.as_str()))
            .arg("-o")
            .arg(output_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| Error::RenderSpawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(diagram.to_dot().as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::RenderFailed {
                program: self.program.clone(),
                output: output_path.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

impl Default for GraphvizWriter {
    fn default() -> Self {
        Self::new()
    }
}
