use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ModelError;

/// Longest accepted pokemon name, matching the column width.
pub const NAME_MAX_LEN: usize = 64;

/// Keys that belong to the record itself and may not appear among the
/// free-form attributes.
pub const RESERVED_FIELDS: [&str; 4] = ["id", "name", "created_at", "updated_at"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pokemon")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub attributes: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name must not be empty".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ModelError::Validation(format!("name must be at most {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_attributes(attributes: &Map<String, Value>) -> Result<(), ModelError> {
    if let Some(key) = attributes.keys().find(|k| RESERVED_FIELDS.contains(&k.as_str())) {
        return Err(ModelError::Validation(format!("`{key}` is a reserved field")));
    }
    Ok(())
}
