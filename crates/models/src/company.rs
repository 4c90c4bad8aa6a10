use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::invoice;

/// A company, addressed by its short `code`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub code: String,
    #[sea_orm(column_type = "Text", unique)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Invoices }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Invoices => Entity::has_many(invoice::Entity).into(),
        }
    }
}

impl Related<invoice::Entity> for Entity {
    fn to() -> RelationDef { Relation::Invoices.def() }
}

impl ActiveModelBehavior for ActiveModel {}
