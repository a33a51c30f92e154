//! Example plugin for packhook.
//!
//! Taps the `run` hook, writes a single line to its output sink, and hands
//! control back to the compiler.

pub mod hooks;
pub mod plugin;

pub use plugin::ExamplePlugin;
