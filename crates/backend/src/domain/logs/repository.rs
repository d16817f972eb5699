use contracts::domain::log_entry::aggregate::{LogEntry, LogEntryId, LogLevel};
use contracts::query::log_query::LogQuery;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{Condition, QueryOrder, QuerySelect, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "log_entry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub datetime: DateTimeUtc,
    pub level: String,
    pub input: String,
    pub output: String,
    pub info: String,
    pub size: i64,
    pub success: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LogEntry {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        LogEntry {
            id: LogEntryId::new(uuid),
            datetime: m.datetime,
            level: LogLevel::from_code(&m.level).unwrap_or(LogLevel::Info),
            input: m.input,
            output: m.output,
            info: m.info,
            size: m.size.max(0) as u64,
            check: m.success,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Выборка по параметрам строки запроса.
///
/// `datetime`, `input`, `output` — подстроки (datetime сверяется с
/// текстовым представлением RFC 3339, так "2026-08-07" выбирает день),
/// `type` и `success` — точные значения, размеры — включительные
/// границы. Сортировка по `datetime`, по умолчанию по убыванию.
pub async fn list(query: &LogQuery) -> anyhow::Result<Vec<LogEntry>> {
    let mut condition = Condition::all();
    if let Some(datetime) = query.datetime.as_deref() {
        condition = condition.add(Column::Datetime.contains(datetime));
    }
    if let Some(level) = query.level.as_deref() {
        condition = condition.add(Column::Level.eq(level));
    }
    if let Some(input) = query.input.as_deref() {
        condition = condition.add(Column::Input.contains(input));
    }
    if let Some(output) = query.output.as_deref() {
        condition = condition.add(Column::Output.contains(output));
    }
    if let Some(min_size) = query.min_size {
        condition = condition.add(Column::Size.gte(min_size as i64));
    }
    if let Some(max_size) = query.max_size {
        condition = condition.add(Column::Size.lte(max_size as i64));
    }
    if let Some(success) = query.success.as_deref() {
        condition = condition.add(Column::Success.eq(success == "1"));
    }

    let mut select = Entity::find().filter(condition);
    select = match query.sort.as_deref() {
        Some("asc") => select.order_by_asc(Column::Datetime),
        _ => select.order_by_desc(Column::Datetime),
    };
    if let Some(limit) = query.limit {
        select = select.limit(limit);
    }

    Ok(select
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn insert(entry: &LogEntry) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(entry.to_string_id()),
        datetime: Set(entry.datetime),
        level: Set(entry.level.as_str().to_string()),
        input: Set(entry.input.clone()),
        output: Set(entry.output.clone()),
        info: Set(entry.info.clone()),
        size: Set(entry.size as i64),
        success: Set(entry.check),
    };
    active.insert(conn()).await?;
    Ok(())
}

pub async fn delete_by_id(id: Uuid) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
