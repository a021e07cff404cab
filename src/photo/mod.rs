use crate::photo::error::PhotoError;
use rocket::fs::TempFile;

pub(crate) mod error;
pub(crate) mod local;

type Result<T, E = PhotoError> = std::result::Result<T, E>;

/// Storage for the pictures illustrating clubs.
#[rocket::async_trait]
pub trait PhotoService: Send + Sync {
    /// Store an uploaded photo and return the reference under which it is displayed.
    async fn add_photo(&self, photo: &mut TempFile<'_>) -> Result<String>;

    /// Delete a stored photo.
    /// Return false when the reference doesn't designate a photo this service holds.
    async fn delete_photo(&self, reference: &str) -> Result<bool>;
}
