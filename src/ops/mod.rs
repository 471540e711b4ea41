//! Canonical data operations
//!
//! One submodule per demonstration operation. Every operation opens its
//! own data session and exactly one transaction, and returns a typed
//! value; printing is left to the binary. Write transactions commit only
//! when the operation's preconditions held and its body succeeded, and
//! are otherwise released without commit when they drop.

pub mod access;
pub mod delete;
pub mod fetch;
pub mod insert;
pub mod update;

pub use access::FilesByUser;
pub use delete::DeleteOutcome;
pub use insert::InsertedUser;

use typedb_driver::{Connection, DatabaseManager, Session, SessionType};

use crate::error::SampleError;

/// Open a fresh data session against the named database.
fn data_session(connection: &Connection, database_name: &str) -> Result<Session, SampleError> {
    let databases = DatabaseManager::new(connection.clone());
    Ok(Session::new(
        databases.get(database_name.to_owned())?,
        SessionType::Data,
    )?)
}
