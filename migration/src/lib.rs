pub use sea_orm_migration::prelude::*;

mod m20250310_000001_create_users_table;
mod m20250310_000002_create_portfolios_table;
mod m20250310_000003_create_portfolio_images_table;
mod m20250310_000004_create_user_portfolios_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250310_000001_create_users_table::Migration),
            Box::new(m20250310_000002_create_portfolios_table::Migration),
            Box::new(m20250310_000003_create_portfolio_images_table::Migration),
            Box::new(m20250310_000004_create_user_portfolios_table::Migration),
        ]
    }
}
