use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Requests::Table)
                    .if_not_exists()
                    .col(pk_auto(Requests::Id))
                    .col(text(Requests::Description))
                    .col(integer(Requests::RequesterId))
                    .col(timestamp(Requests::Created))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_requests_requester_id")
                            .from(Requests::Table, Requests::RequesterId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Requests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Requests {
    Table,
    Id,
    Description,
    RequesterId,
    Created,
}
