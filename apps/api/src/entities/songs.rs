use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "songs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub artist: String,
    pub album: String,
    #[sea_orm(column_name = "release_date")]
    pub release_date: TimeDate,
    pub genre: String,
    #[sea_orm(column_name = "duration_in_seconds")]
    pub duration_in_seconds: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: Option<TimeDateTimeWithTimeZone>,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: Option<TimeDateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
