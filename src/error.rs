use crate::database::error::DatabaseError;
use crate::photo::error::PhotoError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("An error has occurred with the database.")]
    Database(#[from] DatabaseError),
    #[error("An error has occurred while storing photos.")]
    Photo(#[from] PhotoError),
}
