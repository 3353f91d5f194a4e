//! State machine, content and helpers behind the terminal-style portfolio page.
//!
//! Everything here is browser-independent; the `wasm32` binary renders it.

pub mod config;
pub mod contact;
pub mod content;
pub mod cursor;
pub mod log;
pub mod particles;
pub mod portfolio;
pub mod theme;
pub mod typewriter;

#[cfg(test)]
mod testing;
