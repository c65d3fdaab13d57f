use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000001_create_user_table::User;
use super::m20251210_000002_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Server::Table)
                    .if_not_exists()
                    .col(pk_auto(Server::Id))
                    .col(string(Server::Name))
                    .col(integer(Server::OwnerId))
                    .col(integer(Server::CategoryId))
                    .col(text_null(Server::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_owner_id")
                            .from(Server::Table, Server::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_category_id")
                            .from(Server::Table, Server::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Server::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Server {
    Table,
    Id,
    Name,
    OwnerId,
    CategoryId,
    Description,
}
