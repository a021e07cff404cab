use crate::database::error::DatabaseError::UnderlyingDatabase;
use dto::club_category::CategoryError;
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DatabaseError {
    #[error("The --database-url argument is missing.")]
    MissingDatabaseUrl,
    #[error("The connection to the database failed.")]
    ConnectionFailed,
    #[error("An error occurred within the database.")]
    UnderlyingDatabase(String),
    #[error("A stored club has an unknown category.")]
    UnknownCategory(#[from] CategoryError),
    #[error("The database task has been interrupted.")]
    Interrupted,
}

impl From<Box<dyn Error + Send + Sync + 'static>> for DatabaseError {
    fn from(value: Box<dyn Error + Send + Sync + 'static>) -> Self {
        UnderlyingDatabase(value.to_string())
    }
}

impl From<diesel::result::Error> for DatabaseError {
    fn from(value: diesel::result::Error) -> Self {
        UnderlyingDatabase(value.to_string())
    }
}
