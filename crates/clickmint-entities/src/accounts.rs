use sea_orm::entity::prelude::*;

/// One row per registered account.
///
/// `balance`, `mission_earnings` and `referral_earnings` are Decimal strings;
/// `last_login`, `joined_date`, `last_mission_reset` and `cooldown_ends_at`
/// are RFC 3339 strings; `watched_unit_ids_today` is a JSON string array.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub email: String,
    pub name: String,
    pub balance: String,
    pub last_login: String,
    pub login_streak: i32,
    pub total_units_completed: i32,
    pub joined_date: String,
    pub mission_earnings: String,
    pub last_mission_reset: String,
    pub referral_count: i32,
    pub referral_earnings: String,
    pub is_blocked: bool,
    pub referred_by: Option<String>,
    pub watched_unit_ids_today: String,
    pub cooldown_ends_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mission_progress::Entity")]
    MissionProgress,
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::mission_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MissionProgress.def()
    }
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
