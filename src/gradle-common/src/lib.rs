mod message;
pub mod command;

// re-export for convenient use with `message`
pub use colored::Colorize;
