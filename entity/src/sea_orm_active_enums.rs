use sea_orm::entity::prelude::*;

/// How a pickup person is related to the student they collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PickupRelation {
    #[sea_orm(string_value = "Father")]
    Father,
    #[sea_orm(string_value = "Mother")]
    Mother,
    #[sea_orm(string_value = "Brother")]
    Brother,
    #[sea_orm(string_value = "Sister")]
    Sister,
    #[sea_orm(string_value = "Grandfather")]
    Grandfather,
    #[sea_orm(string_value = "Grandmother")]
    Grandmother,
}
