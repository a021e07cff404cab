use crate::web::frontend::{club_controller, filters};
use crate::web::server::{PHOTOS_PATH, Server};
use rocket::fairing::Fairing;
use rocket::fs::FileServer;
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;
use std::path::PathBuf;

const STATIC_FOLDER: &str = "./public/static";

pub struct FrontendServer {
    photos_folder: PathBuf,
}

impl FrontendServer {
    pub fn new(photos_folder: PathBuf) -> Self {
        Self { photos_folder }
    }
}

impl Server for FrontendServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build
            .mount(
                "/",
                routes![
                    club_controller::home,
                    club_controller::index,
                    club_controller::detail,
                    club_controller::list_clubs_by_state,
                    club_controller::list_states,
                    club_controller::create_form,
                    club_controller::create,
                    club_controller::edit_form,
                    club_controller::edit,
                    club_controller::delete,
                ],
            )
            .mount("/", FileServer::from(STATIC_FOLDER))
            .mount(
                PHOTOS_PATH,
                FileServer::from(self.photos_folder.as_path()).rank(9),
            )
            .register(
                "/",
                catchers![club_controller::not_found, club_controller::internal_error],
            )
            .attach(template_fairing())
    }
}

pub(crate) fn template_fairing() -> impl Fairing {
    Template::custom(|engines| {
        engines
            .tera
            .register_filter("category_label", filters::category_label);
        engines
            .tera
            .register_filter("state_name", filters::state_name);
    })
}
