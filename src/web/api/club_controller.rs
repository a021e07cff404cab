use crate::club::controller::{ALL_CATEGORIES, ClubController};
use crate::club::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::json;

/// List one page of clubs as a JSON-encoded string.
/// Every param is optional: the first page of 6 clubs of any category is returned by default.
#[get("/clubs?<page>&<page_size>&<category>")]
pub async fn list_clubs(
    club_controller: &State<ClubController>,
    page: Option<i64>,
    page_size: Option<i64>,
    category: Option<i32>,
) -> Result<String, Status> {
    let model = club_controller
        .index(
            page.unwrap_or(DEFAULT_PAGE),
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            category.unwrap_or(ALL_CATEGORIES),
        )
        .await?;

    Ok(json!(model).to_string())
}

#[get("/clubs/<id>")]
pub async fn get_club(club_controller: &State<ClubController>, id: i32) -> Result<String, Status> {
    let model = club_controller.detail(id).await?;

    Ok(json!(model.club()).to_string())
}

/// `state` is a state name, such as `north carolina`, or a postal code.
#[get("/clubs/state/<state>")]
pub async fn list_clubs_by_state(
    club_controller: &State<ClubController>,
    state: &str,
) -> Result<String, Status> {
    let model = club_controller.list_clubs_by_state(state).await?;

    Ok(json!(model).to_string())
}

#[get("/clubs/states")]
pub async fn list_states(club_controller: &State<ClubController>) -> Result<String, Status> {
    let model = club_controller.list_states().await?;

    Ok(json!(model).to_string())
}
