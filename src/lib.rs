pub mod cli;
pub mod grid;
pub mod logging;
pub mod settings;
