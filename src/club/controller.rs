use crate::club::draft::ClubDraft;
use crate::club::pagination::Pagination;
use crate::club::repository::ClubRepository;
use crate::club::view_model::{
    ClubFormViewModel, ClubStatesViewModel, DetailClubViewModel, IndexClubViewModel,
    ListClubByStateViewModel, StateEntry,
};
use crate::photo::PhotoService;
use crate::photo::error::PhotoError;
use crate::tools::{log_error_and_return, log_message_and_return};
use dto::club::Club;
use dto::club_category::ClubCategory;
use dto::us_state::{UsState, get_state_by_name};
use rocket::fs::TempFile;
use rocket::http::Status;
use std::sync::Arc;

/// Category filter value standing for "every category".
pub const ALL_CATEGORIES: i32 = -1;

/// Turn requests about clubs into view models.
/// Any failure is reported as the status the caller should answer with.
pub struct ClubController {
    club_repository: Arc<dyn ClubRepository>,
    photo_service: Arc<dyn PhotoService>,
}

impl ClubController {
    pub fn new(
        club_repository: Arc<dyn ClubRepository>,
        photo_service: Arc<dyn PhotoService>,
    ) -> Self {
        Self {
            club_repository,
            photo_service,
        }
    }

    /// List one page of clubs, optionally restricted to a category.
    /// Invalid pages and unknown categories are not found.
    pub async fn index(
        &self,
        page: i64,
        page_size: i64,
        category: i32,
    ) -> Result<IndexClubViewModel, Status> {
        let Some(pagination) = Pagination::new(page, page_size) else {
            debug!("Invalid pagination [page: {page}, page_size: {page_size}]");
            return Err(Status::NotFound);
        };
        let offset = *pagination.offset();

        let (clubs, total_clubs) = if category == ALL_CATEGORIES {
            let clubs = self.club_repository.get_slice(offset, page_size).await;
            let total_clubs = self.club_repository.get_count().await;
            (clubs, total_clubs)
        } else {
            let club_category = ClubCategory::try_from(category).map_err(|error| {
                debug!("{error}");
                Status::NotFound
            })?;
            let clubs = self
                .club_repository
                .get_clubs_by_category_and_slice(club_category, offset, page_size)
                .await;
            let total_clubs = self
                .club_repository
                .get_count_by_category(club_category)
                .await;
            (clubs, total_clubs)
        };
        let clubs = clubs.map_err(log_message_and_return(
            "Can't retrieve clubs",
            Status::InternalServerError,
        ))?;
        let total_clubs = total_clubs.map_err(log_message_and_return(
            "Can't count clubs",
            Status::InternalServerError,
        ))?;

        Ok(IndexClubViewModel::new(
            clubs,
            page,
            page_size,
            total_clubs,
            pagination.total_pages(total_clubs),
            category,
        ))
    }

    /// List the clubs located in a state given by its name, e.g. `TEXAS`.
    /// An unknown state is not found, whereas a state without clubs gives an empty list.
    pub async fn list_clubs_by_state(
        &self,
        state: &str,
    ) -> Result<ListClubByStateViewModel, Status> {
        let state_code = get_state_by_name(state).map_err(|error| {
            debug!("{error}");
            Status::NotFound
        })?;
        let clubs = self
            .club_repository
            .get_clubs_by_state(&state_code.code())
            .await
            .map_err(log_message_and_return(
                "Can't retrieve clubs by state",
                Status::InternalServerError,
            ))?;

        Ok(ListClubByStateViewModel::new(clubs, state))
    }

    pub async fn detail(&self, id: i32) -> Result<DetailClubViewModel, Status> {
        let club = self.find_club(id).await?;

        Ok(DetailClubViewModel::new(club))
    }

    /// List the states clubs are located in.
    pub async fn list_states(&self) -> Result<ClubStatesViewModel, Status> {
        let states = self
            .club_repository
            .get_all_states()
            .await
            .map_err(log_message_and_return(
                "Can't retrieve states",
                Status::InternalServerError,
            ))?
            .into_iter()
            .map(|code| {
                let name = code.parse::<UsState>().ok().map(|state| state.name());
                StateEntry::new(code, name)
            })
            .collect();

        Ok(ClubStatesViewModel::new(states))
    }

    pub fn create_form(&self) -> ClubFormViewModel {
        ClubFormViewModel::new(None)
    }

    pub async fn edit_form(&self, id: i32) -> Result<ClubFormViewModel, Status> {
        let club = self.find_club(id).await?;

        Ok(ClubFormViewModel::new(Some(club)))
    }

    /// Store the photo, then the club it illustrates.
    pub async fn create(&self, draft: ClubDraft, photo: &mut TempFile<'_>) -> Result<(), Status> {
        let image = self.photo_service.add_photo(photo).await.map_err(to_status)?;

        let saved = self
            .club_repository
            .add(draft.into_new_club(image.clone()))
            .await
            .map_err(log_message_and_return(
                "Can't add club",
                Status::InternalServerError,
            ));
        if !matches!(saved, Ok(true)) {
            self.discard_photo(&image).await;
        }

        match saved {
            Ok(true) => Ok(()),
            Ok(false) => {
                error!("Club has not been saved");
                Err(Status::InternalServerError)
            }
            Err(status) => Err(status),
        }
    }

    /// Replace the content of a club.
    /// Without a new photo, the current image is kept.
    pub async fn edit(
        &self,
        id: i32,
        draft: ClubDraft,
        photo: Option<&mut TempFile<'_>>,
    ) -> Result<(), Status> {
        let club = self.find_club(id).await?;
        let stored_image = match photo {
            Some(photo) => Some(self.photo_service.add_photo(photo).await.map_err(to_status)?),
            None => None,
        };
        let image = stored_image.clone().unwrap_or_else(|| club.image().clone());

        let updated = self
            .club_repository
            .update(id, draft.into_new_club(image))
            .await
            .map_err(log_message_and_return(
                "Can't update club",
                Status::InternalServerError,
            ));
        let Some(stored_image) = stored_image else {
            return to_edit_result(id, updated);
        };
        // Keep only the photo the club ends up with.
        if matches!(updated, Ok(true)) {
            self.discard_photo(club.image()).await;
        } else {
            self.discard_photo(&stored_image).await;
        }
        to_edit_result(id, updated)
    }

    /// Delete a club, then its photo.
    pub async fn delete(&self, id: i32) -> Result<(), Status> {
        let club = self.find_club(id).await?;

        let deleted = self
            .club_repository
            .delete(id)
            .await
            .map_err(log_message_and_return(
                "Can't delete club",
                Status::InternalServerError,
            ))?;
        if !deleted {
            debug!("Club disappeared before being deleted [id: {id}]");
            return Err(Status::NotFound);
        }

        self.discard_photo(club.image()).await;
        Ok(())
    }

    async fn find_club(&self, id: i32) -> Result<Club, Status> {
        self.club_repository
            .get_by_id(id)
            .await
            .map_err(log_message_and_return(
                "Can't retrieve club",
                Status::InternalServerError,
            ))?
            .ok_or_else(|| {
                debug!("No club found [id: {id}]");
                Status::NotFound
            })
    }

    /// A photo left behind doesn't prevent the operation from succeeding.
    async fn discard_photo(&self, reference: &str) {
        if let Err(error) = self.photo_service.delete_photo(reference).await {
            error!("Can't delete photo [reference: {reference}]\n{error:#?}");
        }
    }
}

fn to_edit_result(id: i32, updated: Result<bool, Status>) -> Result<(), Status> {
    match updated {
        Ok(true) => Ok(()),
        Ok(false) => {
            debug!("Club disappeared before being updated [id: {id}]");
            Err(Status::NotFound)
        }
        Err(status) => Err(status),
    }
}

fn to_status(error: PhotoError) -> Status {
    match error {
        PhotoError::NotAnImage => {
            debug!("{error}");
            Status::UnprocessableEntity
        }
        error => log_error_and_return(Status::InternalServerError)(error),
    }
}
