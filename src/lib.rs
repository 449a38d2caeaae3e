pub mod backends;
pub mod cli;
pub mod color;
pub mod pipeline;
pub mod preview;
pub mod tui;
