pub(crate) mod controller;
pub(crate) mod draft;
pub(crate) mod pagination;
pub(crate) mod repository;
pub(crate) mod view_model;
