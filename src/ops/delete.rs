//! Delete a file.

use tracing::debug;
use typedb_driver::{Connection, Promise, TransactionType};

use crate::error::SampleError;
use crate::queries;

/// Outcome of a deletion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Exactly one file matched and was deleted.
    Deleted,
    /// No file matched; nothing was deleted.
    NotFound,
    /// More than one file matched; deletion refused, nothing committed.
    Ambiguous(usize),
}

/// Delete the file with the given path, requiring exactly one match.
///
/// Zero matches and multiple matches both leave the database untouched;
/// the transaction is released without commit.
pub fn file(
    connection: &Connection,
    database_name: &str,
    path: &str,
) -> Result<DeleteOutcome, SampleError> {
    let session = super::data_session(connection, database_name)?;
    let transaction = session.transaction(TransactionType::Write)?;

    let matches = transaction.query().get(&queries::match_file_by_path(path))?;
    let mut count = 0;
    for row in matches {
        row?;
        count += 1;
    }
    debug!(path, count, "files matched for deletion");

    match count {
        1 => {
            transaction
                .query()
                .delete(&queries::delete_file_by_path(path))
                .resolve()?;
            transaction.commit().resolve()?;
            Ok(DeleteOutcome::Deleted)
        }
        0 => Ok(DeleteOutcome::NotFound),
        n => Ok(DeleteOutcome::Ambiguous(n)),
    }
}
