use derive_getters::Getters;
use dto::club::Club;
use dto::club_category::ClubCategory;
use serde::Serialize;

#[derive(Debug, Serialize, Getters, PartialEq)]
pub struct CategoryOption {
    index: i32,
    label: &'static str,
}

impl From<ClubCategory> for CategoryOption {
    fn from(category: ClubCategory) -> Self {
        Self {
            index: category.index(),
            label: category.label(),
        }
    }
}

fn category_options() -> Vec<CategoryOption> {
    ClubCategory::ALL.into_iter().map(CategoryOption::from).collect()
}

/// One page of the club listing.
#[derive(Debug, Serialize, Getters, PartialEq)]
pub struct IndexClubViewModel {
    clubs: Vec<Club>,
    page: i64,
    page_size: i64,
    total_clubs: i64,
    total_pages: i64,
    category: i32,
    categories: Vec<CategoryOption>,
}

impl IndexClubViewModel {
    pub fn new(
        clubs: Vec<Club>,
        page: i64,
        page_size: i64,
        total_clubs: i64,
        total_pages: i64,
        category: i32,
    ) -> Self {
        Self {
            clubs,
            page,
            page_size,
            total_clubs,
            total_pages,
            category,
            categories: category_options(),
        }
    }
}

/// Clubs located in a state.
/// `state` echoes the name which has been looked up, except when no club has been found.
#[derive(Debug, Serialize, Getters, PartialEq)]
pub struct ListClubByStateViewModel {
    clubs: Vec<Club>,
    no_club_warning: bool,
    state: Option<String>,
}

impl ListClubByStateViewModel {
    pub fn new(clubs: Vec<Club>, state: &str) -> Self {
        if clubs.is_empty() {
            Self {
                clubs,
                no_club_warning: true,
                state: None,
            }
        } else {
            Self {
                clubs,
                no_club_warning: false,
                state: Some(state.to_owned()),
            }
        }
    }
}

#[derive(Debug, Serialize, Getters, PartialEq)]
pub struct DetailClubViewModel {
    club: Club,
}

impl DetailClubViewModel {
    pub fn new(club: Club) -> Self {
        Self { club }
    }
}

#[derive(Debug, Serialize, Getters, PartialEq)]
pub struct StateEntry {
    code: String,
    /// Missing when the stored code isn't a known US state.
    name: Option<&'static str>,
}

impl StateEntry {
    pub fn new(code: String, name: Option<&'static str>) -> Self {
        Self { code, name }
    }
}

#[derive(Debug, Serialize, Getters, PartialEq)]
pub struct ClubStatesViewModel {
    states: Vec<StateEntry>,
}

impl ClubStatesViewModel {
    pub fn new(states: Vec<StateEntry>) -> Self {
        Self { states }
    }
}

/// Content of the creation and edition forms. `club` is empty on creation.
#[derive(Debug, Serialize, Getters, PartialEq)]
pub struct ClubFormViewModel {
    club: Option<Club>,
    categories: Vec<CategoryOption>,
}

impl ClubFormViewModel {
    pub fn new(club: Option<Club>) -> Self {
        Self {
            club,
            categories: category_options(),
        }
    }
}
