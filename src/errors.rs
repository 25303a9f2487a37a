use mongodb::error::{Error as DriverError, ErrorKind};
use thiserror::Error;

/// Server error code for a failed SASL conversation.
const AUTHENTICATION_FAILED: i32 = 18;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Invalid connection settings: {0}")]
    InvalidConfig(String),
    #[error("Could not reach MongoDB server: {0}")]
    Connection(String),
    #[error("Authentication failed: {0}")]
    Authentication(String),
    #[error("Failed to list databases: {0}")]
    ListDatabases(String),
    #[error("createUser failed on database '{database}': {message}")]
    Command { database: String, message: String },
    #[error("MongoDB error: {0}")]
    Driver(DriverError),
}

impl ProvisionError {
    /// Classifies a driver error raised while talking to `database`.
    ///
    /// `None` means the failure happened before any database was targeted
    /// (listing databases or the initial handshake).
    pub fn from_driver(err: DriverError, database: Option<&str>) -> Self {
        let message = err.to_string();

        match err.kind.as_ref() {
            ErrorKind::Authentication { .. } => ProvisionError::Authentication(message),
            ErrorKind::Command(cmd) if cmd.code == AUTHENTICATION_FAILED => {
                ProvisionError::Authentication(message)
            }
            ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) | ErrorKind::DnsResolve { .. } => {
                ProvisionError::Connection(message)
            }
            ErrorKind::InvalidArgument { .. } => ProvisionError::InvalidConfig(message),
            ErrorKind::Command(_) => match database {
                Some(db) => ProvisionError::Command {
                    database: db.to_string(),
                    message,
                },
                None => ProvisionError::ListDatabases(message),
            },
            _ => ProvisionError::Driver(err),
        }
    }
}
