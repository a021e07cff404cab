pub(crate) mod club_controller;
pub(crate) mod server;
