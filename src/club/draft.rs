use derive_getters::Getters;
use dto::address::Address;
use dto::club::NewClub;
use dto::club_category::ClubCategory;

/// What a user submits to create or edit a club. The image is handled apart.
#[derive(Debug, Getters, PartialEq, Clone)]
pub struct ClubDraft {
    title: String,
    description: String,
    club_category: ClubCategory,
    address: Option<Address>,
}

impl ClubDraft {
    pub fn new(
        title: String,
        description: String,
        club_category: ClubCategory,
        address: Option<Address>,
    ) -> Self {
        Self {
            title,
            description,
            club_category,
            address,
        }
    }

    pub fn into_new_club(self, image: String) -> NewClub {
        NewClub::new(
            self.title,
            image,
            self.description,
            self.club_category,
            self.address,
        )
    }
}
