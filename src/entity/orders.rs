use sea_orm::entity::prelude::*;

/// `items` holds the JSON-serialized line-item snapshot, not foreign keys:
/// order history must not change when the catalog does.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub total: i64,
    pub status: String,
    pub items: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
