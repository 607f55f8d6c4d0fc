use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QueryOrder, QuerySelect, Set,
    SqlErr, TransactionTrait,
};
use serde_json::{Map, Value};
use uuid::Uuid;

use models::pokemon::{self, Entity as PokemonEntity};

use crate::pokemon::domain::{NewPokemon, Pokemon, PokemonPatch};
use crate::pokemon::repository::{PokemonRepository, StoreError};

/// SeaORM-backed repository implementation.
pub struct SeaOrmPokemonRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPokemonRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn to_domain(m: pokemon::Model) -> Pokemon {
    let attributes = match m.attributes {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    Pokemon {
        id: m.id,
        name: m.name,
        attributes,
        created_at: m.created_at.with_timezone(&Utc),
        updated_at: m.updated_at.with_timezone(&Utc),
    }
}

fn backend(e: DbErr) -> StoreError {
    StoreError::Backend(e.to_string())
}

/// `name` is the only unique column, so a violation can only come from a
/// write that sets it and is reported against that value.
fn write_err(e: DbErr, name: &str) -> StoreError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => StoreError::name_conflict(name),
        _ => backend(e),
    }
}

/// Read a row with `SELECT ... FOR UPDATE` so concurrent writers on the same
/// id queue up behind this transaction and see its committed result.
async fn find_locked(txn: &DatabaseTransaction, id: Uuid) -> Result<Option<pokemon::Model>, StoreError> {
    PokemonEntity::find_by_id(id).lock_exclusive().one(txn).await.map_err(backend)
}

#[async_trait]
impl PokemonRepository for SeaOrmPokemonRepository {
    async fn create(&self, doc: NewPokemon) -> Result<Pokemon, StoreError> {
        let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();
        let am = pokemon::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(doc.name.clone()),
            attributes: Set(Value::Object(doc.attributes)),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let created = am.insert(&self.db).await.map_err(|e| write_err(e, &doc.name))?;
        Ok(to_domain(created))
    }

    async fn find(&self) -> Result<Vec<Pokemon>, StoreError> {
        let rows = PokemonEntity::find()
            .order_by_asc(pokemon::Column::CreatedAt)
            .order_by_asc(pokemon::Column::Id)
            .all(&self.db)
            .await
            .map_err(backend)?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Pokemon>, StoreError> {
        let found = PokemonEntity::find_by_id(id).one(&self.db).await.map_err(backend)?;
        Ok(found.map(to_domain))
    }

    async fn find_by_id_and_update(&self, id: Uuid, patch: PokemonPatch) -> Result<Option<Pokemon>, StoreError> {
        let txn = self.db.begin().await.map_err(backend)?;
        let Some(existing) = find_locked(&txn, id).await? else {
            txn.rollback().await.map_err(backend)?;
            return Ok(None);
        };

        let mut attributes = match existing.attributes.clone() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        attributes.extend(patch.attributes);

        let mut am: pokemon::ActiveModel = existing.into();
        if let Some(name) = &patch.name {
            am.name = Set(name.clone());
        }
        am.attributes = Set(Value::Object(attributes));
        am.updated_at = Set(Utc::now().into());
        let updated = match am.update(&txn).await {
            Ok(updated) => updated,
            Err(DbErr::RecordNotUpdated) => {
                txn.rollback().await.map_err(backend)?;
                return Ok(None);
            }
            Err(e) => {
                return Err(match patch.name.as_deref() {
                    Some(name) => write_err(e, name),
                    None => backend(e),
                })
            }
        };
        txn.commit().await.map_err(backend)?;
        Ok(Some(to_domain(updated)))
    }

    async fn find_by_id_and_delete(&self, id: Uuid) -> Result<Option<Pokemon>, StoreError> {
        let txn = self.db.begin().await.map_err(backend)?;
        let Some(existing) = find_locked(&txn, id).await? else {
            txn.rollback().await.map_err(backend)?;
            return Ok(None);
        };
        let res = PokemonEntity::delete_by_id(id).exec(&txn).await.map_err(backend)?;
        if res.rows_affected == 0 {
            txn.rollback().await.map_err(backend)?;
            return Ok(None);
        }
        txn.commit().await.map_err(backend)?;
        Ok(Some(to_domain(existing)))
    }
}
