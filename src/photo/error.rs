use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PhotoError {
    #[error("The photos folder can't be created [folder: {0}]")]
    CantCreatePhotosFolder(String),
    #[error("The uploaded file is not an image.")]
    NotAnImage,
    #[error("The photo can't be written.")]
    CantWritePhoto,
    #[error("The photo can't be deleted [reference: {0}]")]
    CantDeletePhoto(String),
}
