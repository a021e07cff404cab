use crate::photo::error::PhotoError::{
    CantCreatePhotosFolder, CantDeletePhoto, CantWritePhoto, NotAnImage,
};
use crate::photo::{PhotoService, Result};
use crate::tools::{log_error_and_return, log_message_and_return};
use rocket::fs::TempFile;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

/// Keep photos as files within a local folder.
/// Each photo is given a random name and is referenced as `<public_path>/<name>`.
pub struct LocalPhotoService {
    folder: PathBuf,
    public_path: String,
}

impl LocalPhotoService {
    pub fn new(folder: PathBuf, public_path: &str) -> Result<Self> {
        std::fs::create_dir_all(&folder).map_err(log_error_and_return(CantCreatePhotosFolder(
            folder.display().to_string(),
        )))?;

        Ok(Self {
            folder,
            public_path: public_path.trim_end_matches('/').to_owned(),
        })
    }

    /// Name of the file behind `reference`, if it is one of ours.
    fn file_name<'a>(&self, reference: &'a str) -> Option<&'a str> {
        let file_name = reference
            .strip_prefix(self.public_path.as_str())?
            .strip_prefix('/')?;
        if file_name.is_empty() || file_name.starts_with('.') || file_name.contains(['/', '\\']) {
            None
        } else {
            Some(file_name)
        }
    }
}

#[rocket::async_trait]
impl PhotoService for LocalPhotoService {
    async fn add_photo(&self, photo: &mut TempFile<'_>) -> Result<String> {
        let content_type = photo
            .content_type()
            .filter(|content_type| content_type.top().as_str().eq_ignore_ascii_case("image"))
            .ok_or(NotAnImage)?;
        let extension = content_type
            .extension()
            .map(|extension| format!(".{extension}"))
            .unwrap_or_default();

        let file_name = format!("{}{extension}", Uuid::new_v4());
        photo
            .copy_to(self.folder.join(&file_name))
            .await
            .map_err(log_message_and_return("Can't write photo", CantWritePhoto))?;

        debug!("Stored photo [file: {file_name}]");
        Ok(format!("{}/{file_name}", self.public_path))
    }

    async fn delete_photo(&self, reference: &str) -> Result<bool> {
        let Some(file_name) = self.file_name(reference) else {
            debug!("Not a local photo, nothing to delete [reference: {reference}]");
            return Ok(false);
        };

        match rocket::tokio::fs::remove_file(self.folder.join(file_name)).await {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(false),
            Err(error) => Err(log_error_and_return(CantDeletePhoto(reference.to_owned()))(
                error,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test::tests::temp_dir;
    use parameterized::{ide, parameterized};

    ide!();

    const PUBLIC_PATH: &str = "/photos";

    #[test]
    fn should_create_missing_folder() {
        let folder = temp_dir().join("photos");

        LocalPhotoService::new(folder.clone(), PUBLIC_PATH).unwrap();

        assert!(folder.is_dir());
    }

    #[parameterized(
        reference = {"/photos/club.jpg", "/photos/", "/photos/../secret", "/photos/sub/club.jpg", "/photosclub.jpg", "https://example.com/trail.jpg"},
        expected_file_name = {Some("club.jpg"), None, None, None, None, None}
    )]
    fn should_find_file_name(reference: &str, expected_file_name: Option<&str>) {
        let service = LocalPhotoService::new(temp_dir(), "/photos/").unwrap();

        assert_eq!(expected_file_name, service.file_name(reference));
    }

    #[async_test]
    async fn should_delete_photo() {
        let folder = temp_dir();
        std::fs::write(folder.join("club.jpg"), b"photo").unwrap();
        let service = LocalPhotoService::new(folder.clone(), PUBLIC_PATH).unwrap();

        assert_eq!(Ok(true), service.delete_photo("/photos/club.jpg").await);
        assert!(!folder.join("club.jpg").exists());
        assert_eq!(Ok(false), service.delete_photo("/photos/club.jpg").await);
    }

    #[async_test]
    async fn should_reject_photo_without_content_type() {
        let folder = temp_dir();
        let service = LocalPhotoService::new(folder.clone(), PUBLIC_PATH).unwrap();
        let mut photo = TempFile::Buffered { content: b"photo" };

        assert_eq!(Err(NotAnImage), service.add_photo(&mut photo).await);
        assert_eq!(0, std::fs::read_dir(folder).unwrap().count());
    }

    #[async_test]
    async fn should_not_delete_foreign_photo() {
        let service = LocalPhotoService::new(temp_dir(), PUBLIC_PATH).unwrap();

        assert_eq!(
            Ok(false),
            service
                .delete_photo("https://example.com/no-address.jpg")
                .await
        );
    }

    mod add_photo {
        use crate::photo::PhotoService;
        use crate::photo::error::PhotoError;
        use crate::photo::local::LocalPhotoService;
        use crate::photo::local::tests::PUBLIC_PATH;
        use crate::tools::test::tests::temp_dir;
        use rocket::State;
        use rocket::form::Form;
        use rocket::fs::TempFile;
        use rocket::http::{ContentType, Status};
        use rocket::local::asynchronous::Client;
        use std::path::{Path, PathBuf};
        use uuid::Uuid;

        const BOUNDARY: &str = "X-PHOTO-BOUNDARY";

        #[derive(FromForm)]
        struct Upload<'r> {
            image: TempFile<'r>,
        }

        #[post("/upload", data = "<upload>")]
        async fn upload(
            photo_service: &State<LocalPhotoService>,
            mut upload: Form<Upload<'_>>,
        ) -> Result<String, Status> {
            photo_service
                .add_photo(&mut upload.image)
                .await
                .map_err(|error| match error {
                    PhotoError::NotAnImage => Status::UnprocessableEntity,
                    _ => Status::InternalServerError,
                })
        }

        async fn post_photo(folder: PathBuf, content_type: &str) -> (Status, String) {
            let photo_service = LocalPhotoService::new(folder, PUBLIC_PATH).unwrap();
            let rocket = rocket::build()
                .manage(photo_service)
                .mount("/", routes![upload]);
            let client = Client::tracked(rocket).await.unwrap();
            let body = format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"club.jpg\"\r\nContent-Type: {content_type}\r\n\r\nphoto\r\n--{BOUNDARY}--\r\n"
            );

            let response = client
                .post("/upload")
                .header(ContentType::new("multipart", "form-data").with_params(("boundary", BOUNDARY)))
                .body(body)
                .dispatch()
                .await;
            let status = response.status();
            (status, response.into_string().await.unwrap_or_default())
        }

        #[async_test]
        async fn success() {
            let folder = temp_dir();

            let (status, reference) = post_photo(folder.clone(), "image/jpeg").await;

            assert_eq!(Status::Ok, status);
            let file_name = reference.strip_prefix("/photos/").unwrap();
            let stem = Path::new(file_name).file_stem().unwrap().to_str().unwrap();
            assert!(Uuid::parse_str(stem).is_ok());
            assert_eq!(b"photo".to_vec(), std::fs::read(folder.join(file_name)).unwrap());
        }

        #[async_test]
        async fn not_an_image() {
            let folder = temp_dir();

            let (status, _) = post_photo(folder.clone(), "text/plain").await;

            assert_eq!(Status::UnprocessableEntity, status);
            assert_eq!(0, std::fs::read_dir(folder).unwrap().count());
        }
    }
}
