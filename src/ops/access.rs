//! Look up the files a user may view.

use tracing::debug;
use typedb_driver::{
    concept::{Attribute, Concept, Value},
    Connection, Options, TransactionType,
};

use crate::error::SampleError;
use crate::queries;

/// Outcome of the two-phase file lookup.
///
/// Acting on anything but a unique user match is refused by design, and
/// the two refusals are distinct so the caller can report them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilesByUser {
    /// No user carries the given full name.
    NoSuchUser,
    /// More than one user carries the given full name.
    Ambiguous,
    /// Unique match; the paths the user may view, sorted ascending.
    Files(Vec<String>),
}

/// Find every file path the named user has `view_file` permission on.
///
/// Phase one counts users with that name and proceeds only on exactly
/// one match; phase two runs the join. Both phases share a single read
/// transaction for a consistent view. With `infer` set, rule-derived
/// permissions participate in phase two; otherwise only asserted facts do.
pub fn files_by_user(
    connection: &Connection,
    database_name: &str,
    name: &str,
    infer: bool,
) -> Result<FilesByUser, SampleError> {
    let session = super::data_session(connection, database_name)?;
    let transaction =
        session.transaction_with_options(TransactionType::Read, Options::new().infer(infer))?;

    let matches = transaction.query().get(&queries::match_user_by_name(name))?;
    let mut user_count = 0;
    for row in matches {
        row?;
        user_count += 1;
    }
    debug!(name, user_count, infer, "user disambiguation");

    match user_count {
        0 => return Ok(FilesByUser::NoSuchUser),
        1 => {}
        _ => return Ok(FilesByUser::Ambiguous),
    }

    let rows = transaction
        .query()
        .get(&queries::files_viewable_by_user(name))?;
    let mut files = Vec::new();
    for row in rows {
        let concept_map = row?;
        match concept_map.get("fp") {
            Some(Concept::Attribute(Attribute {
                value: Value::String(path),
                ..
            })) => files.push(path.clone()),
            other => {
                return Err(SampleError::Unexpected(format!(
                    "file path binding was not a string attribute: {other:?}"
                )))
            }
        }
    }
    Ok(FilesByUser::Files(files))
}
