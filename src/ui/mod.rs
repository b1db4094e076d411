// UI and formatting module

pub mod render;

// Re-export commonly used items for cleaner imports
pub use render::{render, render_error, render_failure, RenderOptions, Rendered};
