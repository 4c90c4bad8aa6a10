use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::company;

/// An invoice owned by the company named in `comp_code`.
///
/// `paid`, `add_date` and `paid_date` are filled by column defaults on insert.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: Date,
    pub paid_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Company }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Company => Entity::belongs_to(company::Entity)
                .from(Column::CompCode)
                .to(company::Column::Code)
                .into(),
        }
    }
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef { Relation::Company.def() }
}

impl ActiveModelBehavior for ActiveModel {}
