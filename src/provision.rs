//! Database provisioning
//!
//! Brings the named database to a known-good state before the
//! demonstration runs: create it if absent, optionally replace it, and
//! verify it with a probe query whose expected answer is fixed by the
//! seed dataset. Creation, schema definition, and data loading are three
//! separate transactions; a run that dies between them leaves a database
//! the next run's probe will flag, and replacement repairs it.

use std::fmt;
use std::fs;
use std::str::FromStr;

use tracing::debug;
use typedb_driver::{
    concept::Value, Connection, DatabaseManager, Promise, Session, SessionType, TransactionType,
};

use crate::config::AppConfig;
use crate::error::SampleError;
use crate::queries;
use crate::report;

/// What to do when the database already exists on the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Delete and recreate without asking.
    AlwaysReplace,
    /// Keep the existing database and only probe it.
    NeverReplace,
    /// Ask on the console whether to replace.
    #[default]
    AskUser,
}

impl fmt::Display for ResetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlwaysReplace => write!(f, "always"),
            Self::NeverReplace => write!(f, "never"),
            Self::AskUser => write!(f, "ask"),
        }
    }
}

impl FromStr for ResetPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::AlwaysReplace),
            "never" => Ok(Self::NeverReplace),
            "ask" => Ok(Self::AskUser),
            _ => Err(format!(
                "unknown reset policy '{s}'. Valid policies: always, never, ask"
            )),
        }
    }
}

/// Ensure the configured database exists and holds the expected seed data.
///
/// Returns the probe verdict: `Ok(true)` means the database is ready for
/// the demonstration sequence, `Ok(false)` means it exists but does not
/// look like the seed dataset. Driver and filesystem failures during
/// provisioning are fatal and propagate as errors.
pub fn setup(
    connection: &Connection,
    config: &AppConfig,
    policy: ResetPolicy,
) -> Result<bool, SampleError> {
    println!("Setting up the database: {}", config.database_name);
    let databases = DatabaseManager::new(connection.clone());

    if databases
        .contains(config.database_name.clone())
        .map_err(SampleError::Connection)?
    {
        let replace = match policy {
            ResetPolicy::AlwaysReplace => true,
            ResetPolicy::NeverReplace => false,
            ResetPolicy::AskUser => report::ask_yes_no(
                "Found a pre-existing database. Do you want to replace it? (Y/N)",
            )?,
        };
        if replace {
            replace_database(&databases, config)
        } else {
            println!("Reusing an existing database.");
            probe(&databases, config)
        }
    } else {
        create_database(&databases, config)
    }
}

fn create_database(databases: &DatabaseManager, config: &AppConfig) -> Result<bool, SampleError> {
    println!("Creating a new database...");
    databases
        .create(config.database_name.clone())
        .map_err(SampleError::Connection)?;
    println!("OK");
    apply_schema(databases, config)?;
    load_dataset(databases, config)?;
    probe(databases, config)
}

fn replace_database(databases: &DatabaseManager, config: &AppConfig) -> Result<bool, SampleError> {
    println!("Deleting an existing database...");
    databases
        .get(config.database_name.clone())
        .map_err(SampleError::Connection)?
        .delete()
        .map_err(SampleError::Connection)?;
    println!("OK");
    create_database(databases, config)
}

/// Apply the schema definition file inside one schema-write transaction.
fn apply_schema(databases: &DatabaseManager, config: &AppConfig) -> Result<(), SampleError> {
    let define_query = read_input_file(&config.schema_file)?;
    let session = Session::new(
        databases
            .get(config.database_name.clone())
            .map_err(SampleError::Connection)?,
        SessionType::Schema,
    )
    .map_err(SampleError::Connection)?;
    let transaction = session
        .transaction(TransactionType::Write)
        .map_err(SampleError::Connection)?;

    println!("Defining schema...");
    transaction
        .query()
        .define(&define_query)
        .resolve()
        .map_err(SampleError::Schema)?;
    transaction.commit().resolve().map_err(SampleError::Schema)?;
    println!("OK");
    Ok(())
}

/// Load the seed dataset file inside one data-write transaction.
fn load_dataset(databases: &DatabaseManager, config: &AppConfig) -> Result<(), SampleError> {
    let insert_query = read_input_file(&config.data_file)?;
    let session = Session::new(
        databases
            .get(config.database_name.clone())
            .map_err(SampleError::Connection)?,
        SessionType::Data,
    )
    .map_err(SampleError::Connection)?;
    let transaction = session
        .transaction(TransactionType::Write)
        .map_err(SampleError::Connection)?;

    println!("Loading data...");
    let rows = transaction
        .query()
        .insert(&insert_query)
        .map_err(SampleError::Data)?;
    let mut row_count = 0;
    for row in rows {
        row.map_err(SampleError::Data)?;
        row_count += 1;
    }
    debug!(rows = row_count, "seed dataset inserted");
    transaction.commit().resolve().map_err(SampleError::Data)?;
    println!("OK");
    Ok(())
}

/// Count users in a data-read transaction and compare against the
/// expected seed size.
fn probe(databases: &DatabaseManager, config: &AppConfig) -> Result<bool, SampleError> {
    let session = Session::new(
        databases
            .get(config.database_name.clone())
            .map_err(SampleError::Connection)?,
        SessionType::Data,
    )
    .map_err(SampleError::Connection)?;
    let transaction = session
        .transaction(TransactionType::Read)
        .map_err(SampleError::Connection)?;

    println!("Testing the database...");
    let response = transaction
        .query()
        .get_aggregate(queries::COUNT_USERS)
        .resolve()?;
    let user_count = match response {
        Some(Value::Long(value)) => value,
        other => {
            return Err(SampleError::Unexpected(format!(
                "user count probe returned {other:?}"
            )))
        }
    };

    if user_count == config.expected_user_count {
        println!("Passed");
        Ok(true)
    } else {
        println!(
            "Failed with the result: {user_count}\nExpected result: {}.",
            config.expected_user_count
        );
        Ok(false)
    }
}

fn read_input_file(path: &str) -> Result<String, SampleError> {
    fs::read_to_string(path)
        .map_err(|e| SampleError::Config(format!("cannot read input file '{path}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_policy_from_str() {
        assert_eq!(
            ResetPolicy::from_str("always").unwrap(),
            ResetPolicy::AlwaysReplace
        );
        assert_eq!(
            ResetPolicy::from_str("NEVER").unwrap(),
            ResetPolicy::NeverReplace
        );
        assert_eq!(ResetPolicy::from_str("ask").unwrap(), ResetPolicy::AskUser);
        assert!(ResetPolicy::from_str("maybe").is_err());
    }

    #[test]
    fn test_reset_policy_display_round_trips() {
        for policy in [
            ResetPolicy::AlwaysReplace,
            ResetPolicy::NeverReplace,
            ResetPolicy::AskUser,
        ] {
            assert_eq!(ResetPolicy::from_str(&policy.to_string()).unwrap(), policy);
        }
    }

    #[test]
    fn test_missing_input_file_is_a_config_error() {
        let result = read_input_file("/nonexistent/iam-schema.tql");
        assert!(matches!(result, Err(SampleError::Config(_))));
    }
}
