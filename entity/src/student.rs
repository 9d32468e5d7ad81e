use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub child_name: String,
    pub date_of_birth: Date,
    pub class: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub photo_path: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pickup_person::Entity")]
    PickupPerson,
}

impl Related<super::pickup_person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PickupPerson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
