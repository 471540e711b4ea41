#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! IAM sample application for TypeDB
//!
//! A didactic walkthrough of session/transaction lifecycles against a
//! running TypeDB server: provision a database, define its schema, load a
//! seed dataset, and run the canonical data operations, each inside its
//! own scoped session and transaction.
//!
//! # Architecture
//!
//! - **[`config`]**: defaults, TOML file, and environment overrides
//! - **[`connect`]**: driver handle for the Core or Cloud edition
//! - **[`provision`]**: create/replace/reuse the database and probe it
//! - **[`queries`]**: all TypeQL text, with value escaping
//! - **[`ops`]**: the demonstration operations, one session each
//! - **[`report`]**: console prompt and result-document rendering
//!
//! The accompanying binary wires these into the fixed six-request
//! demonstration sequence.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use iam_sample_app::{connect, ops, provision, AppConfig, ResetPolicy, ServerEdition};
//!
//! let config = AppConfig::load(None)?;
//! let connection = connect(ServerEdition::Core, &config.server_address, None)?;
//! if provision::setup(&connection, &config, ResetPolicy::NeverReplace)? {
//!     let users = ops::fetch::all_users(&connection, &config.database_name)?;
//!     println!("{} users", users.len());
//! }
//! ```

pub mod config;
pub mod connect;
pub mod error;
pub mod ops;
pub mod provision;
pub mod queries;
pub mod report;

pub use config::AppConfig;
pub use connect::{connect, CloudCredential, ServerEdition};
pub use error::SampleError;
pub use ops::{DeleteOutcome, FilesByUser, InsertedUser};
pub use provision::{setup, ResetPolicy};
