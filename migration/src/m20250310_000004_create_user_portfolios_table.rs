use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `user_portfolios` join table and its columns.
#[derive(DeriveIden)]
enum UserPortfolios {
    Table,
    UserId,
    PortfolioId,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPortfolios::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserPortfolios::UserId).string().not_null())
                    .col(
                        ColumnDef::new(UserPortfolios::PortfolioId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserPortfolios::UserId)
                            .col(UserPortfolios::PortfolioId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_portfolios_user_id")
                            .from(UserPortfolios::Table, UserPortfolios::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_portfolios_portfolio_id")
                            .from(UserPortfolios::Table, UserPortfolios::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserPortfolios::Table).to_owned())
            .await
    }
}
