use crate::club::draft::ClubDraft;
use dto::address::Address;
use dto::club_category::ClubCategory;
use dto::us_state::get_state_by_name;
use rocket::fs::TempFile;
use rocket::http::Status;

/// Multipart form posted to create or edit a club.
/// The address is either fully filled in or left blank.
#[derive(FromForm)]
pub struct ClubForm<'r> {
    title: String,
    description: String,
    category: i32,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    image: Option<TempFile<'r>>,
}

impl<'r> ClubForm<'r> {
    /// Split the form into the club it describes and the photo joined to it, if any.
    pub fn into_draft(self) -> Result<(ClubDraft, Option<TempFile<'r>>), Status> {
        let title = filled(Some(self.title)).ok_or_else(|| {
            debug!("Blank title");
            Status::BadRequest
        })?;
        let club_category = ClubCategory::try_from(self.category).map_err(|error| {
            debug!("{error}");
            Status::BadRequest
        })?;
        let address = to_address(self.street, self.city, self.state)?;
        let image = self.image.filter(|image| image.len() > 0);

        Ok((
            ClubDraft::new(title, self.description, club_category, address),
            image,
        ))
    }
}

fn to_address(
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
) -> Result<Option<Address>, Status> {
    match (filled(street), filled(city), filled(state)) {
        (None, None, None) => Ok(None),
        (Some(street), Some(city), Some(state)) => {
            let state = get_state_by_name(&state).map_err(|error| {
                debug!("{error}");
                Status::BadRequest
            })?;
            Ok(Some(Address::new(street, city, state.code())))
        }
        _ => {
            debug!("Partial address");
            Err(Status::BadRequest)
        }
    }
}

fn filled(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
