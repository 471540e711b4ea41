//! Re-point a file path.

use tracing::debug;
use typedb_driver::{Connection, Promise, TransactionType};

use crate::error::SampleError;
use crate::queries;

/// For every file whose path equals `old_path`, atomically replace the
/// binding with `new_path`. Returns the number of affected bindings;
/// the transaction commits only when that number is positive and is
/// otherwise released without effect.
pub fn file_path(
    connection: &Connection,
    database_name: &str,
    old_path: &str,
    new_path: &str,
) -> Result<usize, SampleError> {
    let session = super::data_session(connection, database_name)?;
    let transaction = session.transaction(TransactionType::Write)?;

    let rows = transaction
        .query()
        .update(&queries::update_file_path(old_path, new_path))?;
    let mut count = 0;
    for row in rows {
        row?;
        count += 1;
    }
    debug!(old_path, new_path, count, "path update matched");

    if count > 0 {
        transaction.commit().resolve()?;
    }
    Ok(count)
}
