//! Integration tests: compiler host with the example plugin applied.

mod helpers;
mod run_test;
