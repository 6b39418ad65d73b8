//! Rendering handlers for display rows

pub mod console;

// Re-export for convenience
pub use console::ConsoleRowsHandler;
