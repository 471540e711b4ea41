//! Fetch all users as result documents.

use tracing::debug;
use typedb_driver::{answer::JSON, Connection, TransactionType};

use crate::error::SampleError;
use crate::queries;

/// Stream every user's full name and email as JSON documents, materialized
/// in server order. Read-only; the transaction is released on return.
pub fn all_users(connection: &Connection, database_name: &str) -> Result<Vec<JSON>, SampleError> {
    let session = super::data_session(connection, database_name)?;
    let transaction = session.transaction(TransactionType::Read)?;

    let documents = transaction.query().fetch(queries::FETCH_ALL_USERS)?;
    let mut users = Vec::new();
    for document in documents {
        users.push(document?);
    }
    debug!(users = users.len(), "fetched user documents");
    Ok(users)
}
