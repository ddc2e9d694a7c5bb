pub mod dot;
pub mod graphviz;
pub mod json_compact;

pub use dot::{Diagram, Direction, DotFormatter, NodeColors, Palette, Statement};
pub use graphviz::{GraphvizWriter, ImageFormat};
pub use json_compact::JsonCompactFormatter;
