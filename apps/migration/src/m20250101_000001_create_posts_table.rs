use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        tracing::info!("Creating posts table");

        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Posts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Posts::Author).string().null())
                    .col(ColumnDef::new(Posts::PostContent).text().null())
                    .col(ColumnDef::new(Posts::ImageUrl).string().null())
                    .col(ColumnDef::new(Posts::CreatedDate).timestamp().null())
                    .col(ColumnDef::new(Posts::ModifiedDate).timestamp().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    Author,
    PostContent,
    ImageUrl,
    CreatedDate,
    ModifiedDate,
}
