use diesel::{Queryable, Selectable};

#[derive(Queryable, Selectable, Debug, PartialEq)]
#[diesel(table_name = crate::database::schema::address)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Address {
    street: String,
    city: String,
    state: String,
}

impl From<Address> for dto::address::Address {
    fn from(value: Address) -> Self {
        dto::address::Address::new(value.street, value.city, value.state)
    }
}

#[cfg(test)]
impl Address {
    pub(crate) fn new(street: &str, city: &str, state: &str) -> Self {
        Self {
            street: street.to_owned(),
            city: city.to_owned(),
            state: state.to_owned(),
        }
    }
}
