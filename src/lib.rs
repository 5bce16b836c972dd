//! # Tasklist - a personal task tracker
//!
//! A command-line utility for adding, listing, completing and deleting
//! tasks. The whole collection lives in one JSON file and is rewritten after
//! every change.
//!
//! ## Features
//!
//! - **Dense IDs**: tasks are always numbered `1..=N`; deleting renumbers the rest
//! - **Fail-soft storage**: a missing or unreadable file starts an empty list
//! - **Interactive menu**: the classic add / view / done / delete loop
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clap::Parser;
//! use tasklist::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::parse().run()
//! }
//! ```

pub mod commands;
pub mod libs;
