pub(crate) mod club_controller;
mod club_form;
mod filters;
pub(crate) mod server;
