//! Mock data tools for the task management app's fixture workflow.
//!
//! Two command-line utilities share this library:
//! - `switch-mock-data` swaps a JSON fixture into place, backing up the
//!   previous one with a timestamped copy
//! - `check-mock-data` verifies that a fixture has the expected shape
//!
//! Operations read and write files through a [`store::FixtureStore`] and
//! print to an injected writer, so they can run against an in-memory store.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use mockdata::store::DirStore;
//! use mockdata::validator::{validate_file, ValidateOptions};
//!
//! let store = DirStore::current_dir().unwrap();
//! let mut out = std::io::stdout();
//! let ok = validate_file(&store, Path::new("sample_tasks_mock.json"), ValidateOptions::default(), &mut out).unwrap();
//! std::process::exit(if ok { 0 } else { 1 });
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod summary;
pub mod switcher;
pub mod utils;
pub mod validator;
