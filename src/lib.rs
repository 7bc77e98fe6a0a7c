pub mod changeset;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod forge;
pub mod result;
pub mod updater;

pub use result::Result;

#[cfg(test)]
pub mod test_helpers;
