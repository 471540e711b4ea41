//! Insert a new user.

use typedb_driver::{Connection, Promise, TransactionType};

use crate::error::SampleError;
use crate::queries;

/// One row produced by a successful insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertedUser {
    pub name: String,
    pub email: String,
}

/// Insert a person with the given full name and email.
///
/// Returns one [`InsertedUser`] per row the insertion produced, so callers
/// report exactly what the server created. The transaction commits after
/// the result iterator is drained; any driver error before that point
/// discards it.
pub fn new_user(
    connection: &Connection,
    database_name: &str,
    name: &str,
    email: &str,
) -> Result<Vec<InsertedUser>, SampleError> {
    let name = name.trim();
    let email = email.trim();
    validate(name, email)?;

    let session = super::data_session(connection, database_name)?;
    let transaction = session.transaction(TransactionType::Write)?;

    let rows = transaction.query().insert(&queries::insert_user(name, email))?;
    let mut inserted = Vec::new();
    for row in rows {
        row?;
        inserted.push(InsertedUser {
            name: name.to_string(),
            email: email.to_string(),
        });
    }
    transaction.commit().resolve()?;
    Ok(inserted)
}

fn validate(name: &str, email: &str) -> Result<(), SampleError> {
    if name.is_empty() {
        return Err(SampleError::Config("user name must be non-empty".to_string()));
    }
    if email.is_empty() {
        return Err(SampleError::Config("user email must be non-empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_sample_input() {
        assert!(validate("Jack Keeper", "jk@typedb.com").is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        assert!(matches!(validate("", "jk@typedb.com"), Err(SampleError::Config(_))));
        assert!(matches!(validate("Jack Keeper", ""), Err(SampleError::Config(_))));
    }
}
