use contracts::domain::processing_config::aggregate::{ProcessingConfig, ProcessingConfigId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "processing_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub input: String,
    pub output: String,
    pub args: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Аргументы хранятся JSON-массивом в текстовой колонке: порядок значим.
fn encode_args(args: &[String]) -> String {
    serde_json::to_string(args).unwrap_or_else(|_| "[]".to_string())
}

fn decode_args(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

impl From<Model> for ProcessingConfig {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        ProcessingConfig {
            id: ProcessingConfigId::new(uuid),
            input: m.input,
            output: m.output,
            args: decode_args(&m.args),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<ProcessingConfig>> {
    Ok(Entity::find()
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn insert(config: &ProcessingConfig) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(config.to_string_id()),
        input: Set(config.input.clone()),
        output: Set(config.output.clone()),
        args: Set(encode_args(&config.args)),
    };
    active.insert(conn()).await?;
    Ok(())
}

/// Полная замена полей. rows_affected отличает "нет такой записи".
pub async fn update(config: &ProcessingConfig) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;

    let result = Entity::update_many()
        .col_expr(Column::Input, Expr::value(config.input.clone()))
        .col_expr(Column::Output, Expr::value(config.output.clone()))
        .col_expr(Column::Args, Expr::value(encode_args(&config.args)))
        .filter(Column::Id.eq(config.to_string_id()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn delete_by_id(id: Uuid) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::{decode_args, encode_args};

    #[test]
    fn args_keep_their_order() {
        let args = vec!["-v".to_string(), "--fast".to_string(), "-o".to_string()];
        assert_eq!(decode_args(&encode_args(&args)), args);
    }

    #[test]
    fn broken_args_decode_to_empty() {
        assert!(decode_args("not json").is_empty());
        assert!(decode_args("").is_empty());
    }
}
