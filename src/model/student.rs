use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Relation of a pickup person to the student
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum RelationDto {
    Father,
    Mother,
    Brother,
    Sister,
    Grandfather,
    Grandmother,
}

impl RelationDto {
    pub const ALL: [RelationDto; 6] = [
        RelationDto::Father,
        RelationDto::Mother,
        RelationDto::Brother,
        RelationDto::Sister,
        RelationDto::Grandfather,
        RelationDto::Grandmother,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationDto::Father => "Father",
            RelationDto::Mother => "Mother",
            RelationDto::Brother => "Brother",
            RelationDto::Sister => "Sister",
            RelationDto::Grandfather => "Grandfather",
            RelationDto::Grandmother => "Grandmother",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

impl std::fmt::Display for RelationDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PickupPersonDto {
    pub id: i32,
    pub name: String,
    pub relation: RelationDto,
    pub contact_number: String,
}

/// Student row as shown in the paginated listing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StudentDto {
    pub id: i32,
    pub child_name: String,
    pub date_of_birth: NaiveDate,
    pub class: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    /// Filename under `/storage/student-images/`
    pub photo_path: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Student with every pickup person attached
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StudentDetailDto {
    #[serde(flatten)]
    pub student: StudentDto,
    pub pickup_persons: Vec<PickupPersonDto>,
}

/// One page of the newest-first student listing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StudentPageDto {
    pub data: Vec<StudentDto>,
    pub current_page: u64,
    pub last_page: u64,
    pub per_page: u64,
    pub total: u64,
    /// 1-based position of the first row on this page, `None` when the page is empty
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
}

/// Directory photos are served from, relative to the site root
pub const STUDENT_IMAGES_URL: &str = "/storage/student-images";

pub fn photo_url(photo_path: &str) -> String {
    format!("{}/{}", STUDENT_IMAGES_URL, photo_path)
}
