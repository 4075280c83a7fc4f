//! Terminal presentation: design tokens, styled primitives and line formatting

pub mod context;
mod line;
pub mod primitives;
pub mod terminal;
pub mod theme;

pub use context::UiContext;
pub use line::format_line;
