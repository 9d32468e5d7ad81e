//! Tests for the schema migrations.
#![cfg(feature = "server")]

use entity::sea_orm_active_enums::PickupRelation;
use ::migration::{Migrator, MigratorTrait};
use sea_orm::{EntityTrait, ModelTrait};
use satchel_test_utils::prelude::*;

/// Expect the migrated schema to accept fixtures and cascade student deletes
#[tokio::test]
async fn migrated_schema_cascades_student_delete() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!()?;
    Migrator::up(&test.db, None).await?;

    let student = test.student().insert_student("Asha Rao").await?;
    test.student()
        .insert_pickup_person(student.id, "Ravi Rao", PickupRelation::Father)
        .await?;
    assert_eq!(test.student().count_pickup_persons().await?, 1);

    student.delete(&test.db).await?;

    assert_eq!(test.student().count_students().await?, 0);
    assert_eq!(test.student().count_pickup_persons().await?, 0);

    Ok(())
}

/// Expect every migration to roll back cleanly
#[tokio::test]
async fn migrations_roll_back() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    Migrator::up(&test.db, None).await?;
    Migrator::down(&test.db, None).await?;

    let result = entity::prelude::Student::find().all(&test.db).await;
    assert!(result.is_err());

    Ok(())
}
