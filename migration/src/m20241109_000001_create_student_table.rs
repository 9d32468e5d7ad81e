use sea_orm_migration::{prelude::*, schema::*};

static IDX_STUDENT_CREATED_AT: &str = "idx-student-created_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string_len(Student::ChildName, 255))
                    .col(date(Student::DateOfBirth))
                    .col(string(Student::Class))
                    .col(string(Student::Address))
                    .col(string(Student::City))
                    .col(string(Student::State))
                    .col(string_len(Student::Country, 2))
                    .col(string_len(Student::ZipCode, 7))
                    .col(string_null(Student::PhotoPath))
                    .col(timestamp(Student::CreatedAt))
                    .col(timestamp(Student::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Listing is always newest-first
        manager
            .create_index(
                Index::create()
                    .name(IDX_STUDENT_CREATED_AT)
                    .table(Student::Table)
                    .col(Student::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STUDENT_CREATED_AT)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    ChildName,
    DateOfBirth,
    Class,
    Address,
    City,
    State,
    Country,
    ZipCode,
    PhotoPath,
    CreatedAt,
    UpdatedAt,
}
