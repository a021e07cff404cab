pub mod address;
pub mod club;
pub mod club_category;
pub mod us_state;
