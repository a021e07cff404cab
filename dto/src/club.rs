use crate::address::Address;
use crate::club_category::ClubCategory;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A running club, as stored. Its id is assigned by the store.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Club {
    id: i32,
    title: String,
    image: String,
    description: String,
    club_category: ClubCategory,
    address: Option<Address>,
}

impl Club {
    pub fn new(
        id: i32,
        title: String,
        image: String,
        description: String,
        club_category: ClubCategory,
        address: Option<Address>,
    ) -> Self {
        Self {
            id,
            title,
            image,
            description,
            club_category,
            address,
        }
    }
}

/// A club which has not been stored yet, or the new content of a stored one.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct NewClub {
    title: String,
    image: String,
    description: String,
    club_category: ClubCategory,
    address: Option<Address>,
}

impl NewClub {
    pub fn new(
        title: String,
        image: String,
        description: String,
        club_category: ClubCategory,
        address: Option<Address>,
    ) -> Self {
        Self {
            title,
            image,
            description,
            club_category,
            address,
        }
    }

    pub fn into_club(self, id: i32) -> Club {
        Club::new(
            id,
            self.title,
            self.image,
            self.description,
            self.club_category,
            self.address,
        )
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl Club {
        pub fn new_test(id: i32, title: &str) -> Self {
            Club {
                id,
                title: title.to_owned(),
                image: "".to_owned(),
                description: "".to_owned(),
                club_category: ClubCategory::City,
                address: None,
            }
        }
    }

    fn address(street: &str, city: &str, state: &str) -> Option<Address> {
        Some(Address::new(
            street.to_owned(),
            city.to_owned(),
            state.to_owned(),
        ))
    }

    pub fn running_club() -> NewClub {
        NewClub::new(
            "Running Club 1".to_owned(),
            "https://www.eatthis.com/wp-content/uploads/sites/4/2020/05/running.jpg?quality=82&strip=1&resize=640%2C360".to_owned(),
            "This is the description of the first club".to_owned(),
            ClubCategory::City,
            address("123 Main St", "Charlotte", "NC"),
        )
    }

    pub fn trail_running_club() -> NewClub {
        NewClub::new(
            "Trail Running Club".to_owned(),
            "https://example.com/trail.jpg".to_owned(),
            "Trail running enthusiasts".to_owned(),
            ClubCategory::Trail,
            address("456 Trail Rd", "Asheville", "NC"),
        )
    }

    pub fn endurance_running_club() -> NewClub {
        NewClub::new(
            "Endurance Running Club".to_owned(),
            "https://example.com/endurance.jpg".to_owned(),
            "Long distance endurance running".to_owned(),
            ClubCategory::Endurance,
            address("789 Speed Ave", "Raleigh", "NC"),
        )
    }

    pub fn club_without_address() -> NewClub {
        NewClub::new(
            "Club Without Address".to_owned(),
            "https://example.com/no-address.jpg".to_owned(),
            "Club with no physical address".to_owned(),
            ClubCategory::City,
            None,
        )
    }

    pub fn texas_club(title: &str) -> NewClub {
        NewClub::new(
            title.to_owned(),
            "https://example.com/texas.jpg".to_owned(),
            "Everything is bigger here".to_owned(),
            ClubCategory::RoadRunner,
            address("1 Congress Ave", "Austin", "TX"),
        )
    }

    /// The clubs every repository test starts with, in insertion order.
    pub fn seeded_clubs() -> Vec<NewClub> {
        vec![
            running_club(),
            trail_running_club(),
            endurance_running_club(),
            club_without_address(),
        ]
    }

    #[test]
    fn should_keep_fields_when_stored() {
        let club = running_club().into_club(12);

        assert_eq!(12, *club.id());
        assert_eq!("Running Club 1", club.title());
        assert_eq!(ClubCategory::City, *club.club_category());
        assert_eq!(address("123 Main St", "Charlotte", "NC"), *club.address());
    }
}
