use crate::club::controller::ClubController;
use crate::club::repository::SqliteClubRepository;
use crate::database::init_db;
use crate::error::Result;
use crate::photo::local::LocalPhotoService;
use crate::tools::env_args::{retrieve_arg_value, retrieve_parsed_arg_value};
use crate::web::api::server::ApiServer;
use crate::web::frontend::server::FrontendServer;
use rocket::{Build, Rocket};
use std::path::PathBuf;
use std::sync::Arc;

const PORT_ARG: &str = "--port";
const DEFAULT_PORT: u16 = 8000;
const PHOTOS_FOLDER_ARG: &str = "--photos-folder";
const DEFAULT_PHOTOS_FOLDER: &str = "public/photos";
/// Path under which stored photos are served.
pub const PHOTOS_PATH: &str = "/photos";

pub trait Server {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
}

pub fn build_server() -> Result<Rocket<Build>> {
    let photos_folder = get_photos_folder();
    let club_controller = build_club_controller(photos_folder.clone())?;
    let rocket_build = rocket::build()
        .configure(rocket::Config::figment().merge(("port", get_port())))
        .manage(club_controller);

    let servers: Vec<Box<dyn Server>> = vec![
        Box::new(ApiServer::new()),
        Box::new(FrontendServer::new(photos_folder)),
    ];
    Ok(servers
        .iter()
        .fold(rocket_build, |rocket_build, server| {
            server.configure(rocket_build)
        }))
}

fn build_club_controller(photos_folder: PathBuf) -> Result<ClubController> {
    let pool = init_db()?;
    let photo_service = LocalPhotoService::new(photos_folder, PHOTOS_PATH)?;

    Ok(ClubController::new(
        Arc::new(SqliteClubRepository::new(pool)),
        Arc::new(photo_service),
    ))
}

fn get_port() -> u16 {
    retrieve_parsed_arg_value(PORT_ARG).unwrap_or(DEFAULT_PORT)
}

fn get_photos_folder() -> PathBuf {
    retrieve_arg_value(PHOTOS_FOLDER_ARG)
        .filter(|folder| !folder.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PHOTOS_FOLDER))
}
