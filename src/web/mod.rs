use crate::web::server::build_server;
use rocket::{Build, Rocket};

mod api;
mod frontend;
mod server;

pub fn start_servers() -> Rocket<Build> {
    match build_server() {
        Ok(rocket_build) => rocket_build,
        Err(error) => {
            error!("{error:#?}");
            panic!("Initialization failed, aborting.");
        }
    }
}
