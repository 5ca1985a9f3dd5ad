//! Couplet generation through an OpenAI-compatible chat completion API.

pub mod common;
pub mod config;
pub mod extract;
pub mod generate;
pub mod prompts;
