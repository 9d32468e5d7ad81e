use sea_orm_migration::{prelude::*, schema::*};

use crate::m20241109_000001_create_student_table::Student;

static IDX_PICKUP_PERSON_STUDENT_ID: &str = "idx-pickup_person-student_id";
static FK_PICKUP_PERSON_STUDENT_ID: &str = "fk-pickup_person-student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The foreign key is declared inline so SQLite, which cannot add constraints
        // to an existing table, gets the same cascade as Postgres.
        manager
            .create_table(
                Table::create()
                    .table(PickupPerson::Table)
                    .if_not_exists()
                    .col(pk_auto(PickupPerson::Id))
                    .col(integer(PickupPerson::StudentId))
                    .col(string_len(PickupPerson::Name, 255))
                    .col(string_len(PickupPerson::Relation, 16))
                    .col(string_len(PickupPerson::ContactNumber, 10))
                    .col(timestamp(PickupPerson::CreatedAt))
                    .col(timestamp(PickupPerson::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PICKUP_PERSON_STUDENT_ID)
                            .from(PickupPerson::Table, PickupPerson::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PICKUP_PERSON_STUDENT_ID)
                    .table(PickupPerson::Table)
                    .col(PickupPerson::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PICKUP_PERSON_STUDENT_ID)
                    .table(PickupPerson::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PickupPerson::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PickupPerson {
    Table,
    Id,
    StudentId,
    Name,
    Relation,
    ContactNumber,
    CreatedAt,
    UpdatedAt,
}
