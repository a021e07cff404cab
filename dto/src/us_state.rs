use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// US states, named after their postal code.
/// Clubs are filtered against this code, never against the display name.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum UsState {
    AL,
    AK,
    AZ,
    AR,
    CA,
    CO,
    CT,
    DE,
    DC,
    FL,
    GA,
    HI,
    ID,
    IL,
    IN,
    IA,
    KS,
    KY,
    LA,
    ME,
    MD,
    MA,
    MI,
    MN,
    MS,
    MO,
    MT,
    NE,
    NV,
    NH,
    NJ,
    NM,
    NY,
    NC,
    ND,
    OH,
    OK,
    OR,
    PA,
    RI,
    SC,
    SD,
    TN,
    TX,
    UT,
    VT,
    VA,
    WA,
    WV,
    WI,
    WY,
}

const STATE_NAMES: [(UsState, &str); 51] = [
    (UsState::AL, "Alabama"),
    (UsState::AK, "Alaska"),
    (UsState::AZ, "Arizona"),
    (UsState::AR, "Arkansas"),
    (UsState::CA, "California"),
    (UsState::CO, "Colorado"),
    (UsState::CT, "Connecticut"),
    (UsState::DE, "Delaware"),
    (UsState::DC, "District of Columbia"),
    (UsState::FL, "Florida"),
    (UsState::GA, "Georgia"),
    (UsState::HI, "Hawaii"),
    (UsState::ID, "Idaho"),
    (UsState::IL, "Illinois"),
    (UsState::IN, "Indiana"),
    (UsState::IA, "Iowa"),
    (UsState::KS, "Kansas"),
    (UsState::KY, "Kentucky"),
    (UsState::LA, "Louisiana"),
    (UsState::ME, "Maine"),
    (UsState::MD, "Maryland"),
    (UsState::MA, "Massachusetts"),
    (UsState::MI, "Michigan"),
    (UsState::MN, "Minnesota"),
    (UsState::MS, "Mississippi"),
    (UsState::MO, "Missouri"),
    (UsState::MT, "Montana"),
    (UsState::NE, "Nebraska"),
    (UsState::NV, "Nevada"),
    (UsState::NH, "New Hampshire"),
    (UsState::NJ, "New Jersey"),
    (UsState::NM, "New Mexico"),
    (UsState::NY, "New York"),
    (UsState::NC, "North Carolina"),
    (UsState::ND, "North Dakota"),
    (UsState::OH, "Ohio"),
    (UsState::OK, "Oklahoma"),
    (UsState::OR, "Oregon"),
    (UsState::PA, "Pennsylvania"),
    (UsState::RI, "Rhode Island"),
    (UsState::SC, "South Carolina"),
    (UsState::SD, "South Dakota"),
    (UsState::TN, "Tennessee"),
    (UsState::TX, "Texas"),
    (UsState::UT, "Utah"),
    (UsState::VT, "Vermont"),
    (UsState::VA, "Virginia"),
    (UsState::WA, "Washington"),
    (UsState::WV, "West Virginia"),
    (UsState::WI, "Wisconsin"),
    (UsState::WY, "Wyoming"),
];

#[derive(Debug, Error, PartialEq)]
#[error("No US state matches this name [name: {0}]")]
pub struct UnknownState(pub String);

impl UsState {
    pub fn code(&self) -> String {
        self.to_string()
    }

    pub fn name(&self) -> &'static str {
        STATE_NAMES
            .iter()
            .find(|(state, _)| state == self)
            .map(|(_, name)| *name)
            .unwrap_or_default()
    }
}

impl Display for UsState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for UsState {
    type Err = UnknownState;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        get_state_by_name(name)
    }
}

/// Resolve a display name such as `TEXAS` or `New York` into its state.
/// Case is ignored, and spaces, underscores and hyphens are interchangeable.
/// Postal codes are accepted as well.
pub fn get_state_by_name(name: &str) -> Result<UsState, UnknownState> {
    let normalized_name = normalize(name);
    STATE_NAMES
        .iter()
        .find(|(state, state_name)| {
            normalize(state_name) == normalized_name || state.code() == normalized_name
        })
        .map(|(state, _)| *state)
        .ok_or_else(|| UnknownState(name.to_owned()))
}

fn normalize(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|word| !word.is_empty())
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join(" ")
}
