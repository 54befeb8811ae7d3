//! Terminal layer - rendering collaborators around the core.

pub mod renderer;
pub mod view;

pub use renderer::TerminalRenderer;
pub use view::{GridView, Symbols, Theme};
