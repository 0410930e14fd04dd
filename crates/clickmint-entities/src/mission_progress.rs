use sea_orm::entity::prelude::*;

/// Per-account mission state, cloned from the catalog at registration.
///
/// `position` preserves catalog order; `kind` is `watch`/`social` and
/// `category` is `daily`/`social`, parsed by the ledger crate.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mission_progress")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub account_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub mission_id: String,
    pub kind: String,
    pub category: String,
    pub title: String,
    pub reward: String,
    pub goal: i32,
    pub progress: i32,
    pub completed: bool,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id"
    )]
    Account,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
