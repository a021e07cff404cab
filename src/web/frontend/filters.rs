use dto::club_category::ClubCategory;
use dto::us_state::UsState;
use std::collections::HashMap;
use tera::Value;

/// Turn a serialized club category, e.g. `RoadRunner`, into its label.
pub fn category_label(category: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let category: ClubCategory = serde::Deserialize::deserialize(category)?;
    Ok(Value::String(category.label().to_owned()))
}

/// Turn a state postal code into the state name. Unknown codes are left as they are.
pub fn state_name(state: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let code: String = tera::from_value(state.clone())?;
    let name = code
        .parse::<UsState>()
        .map(|state| state.name().to_owned())
        .unwrap_or(code);
    Ok(Value::String(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        category = {"RoadRunner", "Womens", "City"},
        expected_label = {"Road runner", "Women's", "City"}
    )]
    fn should_get_category_label(category: &str, expected_label: &str) {
        let result = category_label(&Value::String(category.to_owned()), &HashMap::new()).unwrap();

        assert_eq!(Value::String(expected_label.to_owned()), result);
    }

    #[test]
    fn should_fail_to_get_unknown_category_label() {
        assert!(category_label(&Value::String("Swimming".to_owned()), &HashMap::new()).is_err());
    }

    #[parameterized(
        state = {"TX", "NC", "ZZ"},
        expected_name = {"Texas", "North Carolina", "ZZ"}
    )]
    fn should_get_state_name(state: &str, expected_name: &str) {
        let result = state_name(&Value::String(state.to_owned()), &HashMap::new()).unwrap();

        assert_eq!(Value::String(expected_name.to_owned()), result);
    }
}
