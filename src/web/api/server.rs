use crate::web::api::club_controller;
use crate::web::server::Server;
use rocket::{Build, Rocket};

pub struct ApiServer {}

impl ApiServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for ApiServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build.mount(
            "/api/",
            routes![
                club_controller::list_clubs,
                club_controller::get_club,
                club_controller::list_clubs_by_state,
                club_controller::list_states,
            ],
        )
    }
}
