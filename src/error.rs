//! Error taxonomy for the sample application
//!
//! Connection, authentication, configuration, and provisioning errors are
//! fatal: the binary reports them on stderr and exits with code 1. Query
//! errors raised during the demonstration sequence are reported and the
//! sequence moves on to the next operation. Precondition outcomes such as
//! "no such user" or "nothing to update" are not errors at all; they are
//! variants of the operations' result types.

use thiserror::Error;

/// All failure kinds surfaced by the sample application.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The server could not be reached or the driver handle failed to open.
    #[error("failed to connect to TypeDB server: {0}")]
    Connection(#[source] typedb_driver::Error),

    /// The cloud deployment rejected the supplied credential.
    #[error("authentication rejected: {0}")]
    Auth(#[source] typedb_driver::Error),

    /// Invalid configuration: unknown edition, missing input file,
    /// empty user name, and similar caller mistakes.
    #[error("configuration error: {0}")]
    Config(String),

    /// The server rejected the schema definition during provisioning.
    #[error("schema definition failed: {0}")]
    Schema(#[source] typedb_driver::Error),

    /// The server rejected the seed dataset during provisioning.
    #[error("data load failed: {0}")]
    Data(#[source] typedb_driver::Error),

    /// The server rejected a query during the demonstration sequence.
    #[error("query failed: {0}")]
    Query(#[from] typedb_driver::Error),

    /// The server answered with a shape the demonstration does not
    /// account for, e.g. a non-numeric aggregate or a non-attribute
    /// binding where an attribute was requested.
    #[error("unexpected server response: {0}")]
    Unexpected(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
