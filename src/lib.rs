pub mod core {
    pub mod input;
    pub mod renderer;
    pub mod terminal;
}

pub mod config;
pub mod error;
pub mod games;

pub use crate::config::Config;
pub use crate::error::HangmanError;
