use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Location of a club. It only exists through the club owning it.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Hash, Clone)]
pub struct Address {
    street: String,
    city: String,
    state: String,
}

impl Address {
    pub fn new(street: String, city: String, state: String) -> Self {
        Self {
            street,
            city,
            state,
        }
    }
}
