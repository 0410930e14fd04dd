use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(string(Accounts::Id).primary_key())
                    .col(string(Accounts::Email))
                    .col(string(Accounts::Name))
                    .col(string(Accounts::Balance)) // Decimal
                    .col(string(Accounts::LastLogin)) // RFC 3339
                    .col(integer(Accounts::LoginStreak))
                    .col(integer(Accounts::TotalUnitsCompleted))
                    .col(string(Accounts::JoinedDate)) // RFC 3339
                    .col(string(Accounts::MissionEarnings)) // Decimal
                    .col(string(Accounts::LastMissionReset)) // RFC 3339
                    .col(integer(Accounts::ReferralCount))
                    .col(string(Accounts::ReferralEarnings)) // Decimal
                    .col(boolean(Accounts::IsBlocked))
                    .col(string_null(Accounts::ReferredBy))
                    .col(string(Accounts::WatchedUnitIdsToday)) // JSON array
                    .col(string_null(Accounts::CooldownEndsAt)) // RFC 3339
                    .index(Index::create().col(Accounts::Email).unique())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MissionProgress::Table)
                    .if_not_exists()
                    .col(string(MissionProgress::AccountId))
                    .col(string(MissionProgress::MissionId))
                    .col(string(MissionProgress::Kind))
                    .col(string(MissionProgress::Category))
                    .col(string(MissionProgress::Title))
                    .col(string(MissionProgress::Reward)) // Decimal
                    .col(integer(MissionProgress::Goal))
                    .col(integer(MissionProgress::Progress))
                    .col(boolean(MissionProgress::Completed))
                    .col(integer(MissionProgress::Position))
                    .index(
                        Index::create()
                            .col(MissionProgress::AccountId)
                            .col(MissionProgress::MissionId)
                            .primary(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MissionProgress::Table, MissionProgress::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(pk_auto(Transactions::Id))
                    .col(string(Transactions::AccountId))
                    .col(string(Transactions::AccountName))
                    .col(string(Transactions::Kind))
                    .col(string(Transactions::Amount)) // Decimal
                    .col(string(Transactions::Date)) // RFC 3339
                    .col(string(Transactions::Status))
                    .col(string(Transactions::Description))
                    .to_owned(),
            )
            .await?;

        // Non-unique indexes cannot be declared inline on sqlite
        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_account_id_date")
                    .table(Transactions::Table)
                    .col(Transactions::AccountId)
                    .col(Transactions::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReferredUsers::Table)
                    .if_not_exists()
                    .col(pk_auto(ReferredUsers::Id))
                    .col(string(ReferredUsers::ReferrerId))
                    .col(string(ReferredUsers::Name))
                    .col(string(ReferredUsers::Date)) // RFC 3339
                    .col(string(ReferredUsers::Status))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReferredUsers::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_transactions_account_id_date")
                    .table(Transactions::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MissionProgress::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    Email,
    Name,
    Balance,
    LastLogin,
    LoginStreak,
    TotalUnitsCompleted,
    JoinedDate,
    MissionEarnings,
    LastMissionReset,
    ReferralCount,
    ReferralEarnings,
    IsBlocked,
    ReferredBy,
    WatchedUnitIdsToday,
    CooldownEndsAt,
}

#[derive(DeriveIden)]
enum MissionProgress {
    Table,
    AccountId,
    MissionId,
    Kind,
    Category,
    Title,
    Reward,
    Goal,
    Progress,
    Completed,
    Position,
}

#[derive(DeriveIden)]
enum Transactions {
    Table,
    Id,
    AccountId,
    AccountName,
    Kind,
    Amount,
    Date,
    Status,
    Description,
}

#[derive(DeriveIden)]
enum ReferredUsers {
    Table,
    Id,
    ReferrerId,
    Name,
    Date,
    Status,
}
