//! # Schema Subcommand
//!
//! Prints the Factory field descriptors.

use recbind_decode::Factory;
use recbind_schema::Bindable;

/// Run the schema subcommand and return the JSON to print.
pub fn run_schema() -> anyhow::Result<String> {
    crate::to_json(Factory::schema(), true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_fields_in_order() {
        let json: serde_json::Value = serde_json::from_str(&run_schema().unwrap()).unwrap();
        assert_eq!(json["type_name"], "Factory");
        let names: Vec<&str> = json["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "title",
                "organizationChiefFullName",
                "description",
                "amountOfWorkers",
                "departments"
            ]
        );
        assert_eq!(json["fields"][0]["not_blank"], true);
    }
}
