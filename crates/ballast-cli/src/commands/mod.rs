// crates/ballast-cli/src/commands/mod.rs
//
// Command module declarations for the Ballast CLI.

pub mod report;
pub mod rolling;
