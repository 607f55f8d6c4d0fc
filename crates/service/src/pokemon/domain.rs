use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Stored pokemon. Anything beyond the fixed fields is carried as-is in
/// `attributes` and flattened into the JSON representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: Uuid,
    pub name: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create input: `{name, ...attributes}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePokemonInput {
    pub name: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Update input: any subset of the create shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePokemonInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Delete confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedPokemon {
    pub message: String,
    #[serde(rename = "deletedPokemon")]
    pub deleted_pokemon: Pokemon,
}

/// Normalized document handed to the store on create.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPokemon {
    pub name: String,
    pub attributes: Map<String, Value>,
}

/// Normalized partial update handed to the store. Listed attributes replace
/// existing ones; everything else is left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PokemonPatch {
    pub name: Option<String>,
    pub attributes: Map<String, Value>,
}

impl PokemonPatch {
    /// Apply this patch to a stored record in place. Does not touch timestamps.
    pub fn apply_to(self, target: &mut Pokemon) {
        if let Some(name) = self.name {
            target.name = name;
        }
        target.attributes.extend(self.attributes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Pokemon {
        let now = Utc::now();
        Pokemon {
            id: Uuid::new_v4(),
            name: "pikachu".into(),
            attributes: json!({"no": 25, "type": "electric"}).as_object().cloned().unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn attributes_are_flattened_on_output() {
        let p = sample();
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["name"], "pikachu");
        assert_eq!(v["no"], 25);
        assert_eq!(v["type"], "electric");
        assert!(v.get("attributes").is_none());
    }

    #[test]
    fn create_input_collects_extra_fields() {
        let input: CreatePokemonInput = serde_json::from_value(json!({"name": "Mew", "no": 151})).unwrap();
        assert_eq!(input.name, "Mew");
        assert_eq!(input.attributes.get("no"), Some(&json!(151)));
        assert!(!input.attributes.contains_key("name"));
    }

    #[test]
    fn create_input_requires_name() {
        let res: Result<CreatePokemonInput, _> = serde_json::from_value(json!({"no": 151}));
        assert!(res.is_err());
    }

    #[test]
    fn update_input_name_is_optional() {
        let input: UpdatePokemonInput = serde_json::from_value(json!({"no": 150})).unwrap();
        assert!(input.name.is_none());
        assert_eq!(input.attributes.get("no"), Some(&json!(150)));
    }

    #[test]
    fn patch_replaces_named_fields_only() {
        let mut p = sample();
        let patch = PokemonPatch {
            name: None,
            attributes: json!({"type": "steel"}).as_object().cloned().unwrap(),
        };
        patch.apply_to(&mut p);
        assert_eq!(p.name, "pikachu");
        assert_eq!(p.attributes.get("type"), Some(&json!("steel")));
        assert_eq!(p.attributes.get("no"), Some(&json!(25)));
    }

    #[test]
    fn deleted_payload_uses_camel_case_key() {
        let d = DeletedPokemon { message: "gone".into(), deleted_pokemon: sample() };
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v["message"], "gone");
        assert_eq!(v["deletedPokemon"]["name"], "pikachu");
    }
}
