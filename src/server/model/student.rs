use chrono::NaiveDate;
use entity::sea_orm_active_enums::PickupRelation;

use crate::{
    model::student::{PickupPersonDto, RelationDto, StudentDetailDto, StudentDto},
    server::model::db::{PickupPersonModel, StudentModel},
};

/// A file part received from a multipart form.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    /// Filename as sent by the client, only used to pick between equivalent extensions
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// Raw student submission, every scalar as sent by the client.
///
/// `pickup_persons` holds the JSON-encoded array exactly as it arrived in the form.
#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    pub child_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub class: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
    pub photo: Option<PhotoUpload>,
    pub pickup_persons: Option<String>,
}

/// Photo that passed validation, ready to be written to storage.
#[derive(Debug, Clone)]
pub struct ValidatedPhoto {
    pub bytes: Vec<u8>,
    /// `jpg`, `jpeg` or `png`
    pub extension: String,
    pub width: u32,
    pub height: u32,
}

/// Validated scalar student columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFields {
    pub child_name: String,
    pub date_of_birth: NaiveDate,
    pub class: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

/// Validated pickup person columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupPersonFields {
    pub name: String,
    pub relation: PickupRelation,
    pub contact_number: String,
}

#[derive(Debug, Clone)]
pub struct NewStudent {
    pub fields: StudentFields,
    pub photo: Option<ValidatedPhoto>,
    pub pickup_persons: Vec<PickupPersonFields>,
}

/// One entry of an update submission, addressed by pickup person id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickupPersonChange {
    Update { id: i32, fields: PickupPersonFields },
    Remove { id: i32 },
}

#[derive(Debug, Clone)]
pub struct StudentUpdate {
    pub fields: StudentFields,
    /// Replacement photo, `None` keeps the stored one
    pub photo: Option<ValidatedPhoto>,
    pub pickup_persons: Vec<PickupPersonChange>,
}

impl From<RelationDto> for PickupRelation {
    fn from(relation: RelationDto) -> Self {
        match relation {
            RelationDto::Father => PickupRelation::Father,
            RelationDto::Mother => PickupRelation::Mother,
            RelationDto::Brother => PickupRelation::Brother,
            RelationDto::Sister => PickupRelation::Sister,
            RelationDto::Grandfather => PickupRelation::Grandfather,
            RelationDto::Grandmother => PickupRelation::Grandmother,
        }
    }
}

impl From<PickupRelation> for RelationDto {
    fn from(relation: PickupRelation) -> Self {
        match relation {
            PickupRelation::Father => RelationDto::Father,
            PickupRelation::Mother => RelationDto::Mother,
            PickupRelation::Brother => RelationDto::Brother,
            PickupRelation::Sister => RelationDto::Sister,
            PickupRelation::Grandfather => RelationDto::Grandfather,
            PickupRelation::Grandmother => RelationDto::Grandmother,
        }
    }
}

impl From<StudentModel> for StudentDto {
    fn from(model: StudentModel) -> Self {
        Self {
            id: model.id,
            child_name: model.child_name,
            date_of_birth: model.date_of_birth,
            class: model.class,
            address: model.address,
            city: model.city,
            state: model.state,
            country: model.country,
            zip_code: model.zip_code,
            photo_path: model.photo_path,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<PickupPersonModel> for PickupPersonDto {
    fn from(model: PickupPersonModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            relation: model.relation.into(),
            contact_number: model.contact_number,
        }
    }
}

impl From<(StudentModel, Vec<PickupPersonModel>)> for StudentDetailDto {
    fn from((student, pickup_persons): (StudentModel, Vec<PickupPersonModel>)) -> Self {
        Self {
            student: student.into(),
            pickup_persons: pickup_persons.into_iter().map(Into::into).collect(),
        }
    }
}
