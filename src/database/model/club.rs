use crate::database::error::DatabaseError;
use crate::database::model::address::Address;
use diesel::{Queryable, Selectable};
use dto::club_category::ClubCategory;
use std::str::FromStr;

#[derive(Queryable, Selectable, Debug, PartialEq)]
#[diesel(table_name = crate::database::schema::club)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Club {
    id: i32,
    title: String,
    image: String,
    description: String,
    club_category: String,
}

impl Club {
    /// Build the club along with its address, if it has one.
    pub(crate) fn into_dto(
        self,
        address: Option<Address>,
    ) -> Result<dto::club::Club, DatabaseError> {
        let club_category = ClubCategory::from_str(&self.club_category)?;
        Ok(dto::club::Club::new(
            self.id,
            self.title,
            self.image,
            self.description,
            club_category,
            address.map(dto::address::Address::from),
        ))
    }
}
