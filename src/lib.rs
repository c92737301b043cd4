//! Export default control templates as a markup fragment.
//!
//! The command line is classified by [`args`] and queried through
//! [`args::ArgSet`]; everything else reads the resulting
//! [`cli::ExportRequest`].

pub mod args;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod export;
pub mod logging;
pub mod pattern;
