//! # Factory Target
//!
//! The stock decode target: a factory description assembled from a
//! directory of record files.

use serde::{Deserialize, Serialize};

use recbind_core::{FieldValue, SchemaError};
use recbind_schema::{Bindable, FieldDescriptor, Schema};

static FACTORY_SCHEMA: Schema = Schema::new(
    "Factory",
    &[
        FieldDescriptor::text("title").required(),
        FieldDescriptor::text("organizationChiefFullName").concatenate(
            &[
                "organizationChiefLastName",
                "organizationChiefFirstName",
                "organizationChiefMiddleName",
            ],
            " ",
        ),
        FieldDescriptor::text("description"),
        FieldDescriptor::integer("amountOfWorkers"),
        FieldDescriptor::list("departments"),
    ],
);

/// A factory decoded from record files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Factory {
    /// Required, never blank after a successful decode.
    pub title: String,
    /// Chief's last, first and middle names joined by a space.
    pub organization_chief_full_name: String,
    pub description: Option<String>,
    pub amount_of_workers: Option<i64>,
    pub departments: Option<Vec<String>>,
}

impl Bindable for Factory {
    fn schema() -> &'static Schema {
        &FACTORY_SCHEMA
    }

    fn instantiate() -> Result<Self, SchemaError> {
        Ok(Self::default())
    }

    fn assign(&mut self, field: &FieldDescriptor, value: FieldValue) -> Result<(), SchemaError> {
        let name = field.name;
        match name {
            "title" => self.title = value.into_text(name)?.unwrap_or_default(),
            "organizationChiefFullName" => {
                self.organization_chief_full_name = value.into_text(name)?.unwrap_or_default();
            }
            "description" => self.description = value.into_text(name)?,
            "amountOfWorkers" => self.amount_of_workers = value.into_integer(name)?,
            "departments" => self.departments = value.into_list(name)?,
            _ => {
                return Err(SchemaError::UnknownField {
                    target: FACTORY_SCHEMA.type_name(),
                    field: name.to_string(),
                })
            }
        }
        Ok(())
    }
}
