use chrono::NaiveDate;
use entity::sea_orm_active_enums::PickupRelation;

use crate::server::model::student::{PickupPersonFields, StudentFields};


fn student_fields(child_name: &str) -> StudentFields {
    StudentFields {
        child_name: child_name.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2020, 1, 31).unwrap(),
        class: "Kindergarten".to_string(),
        address: "4 Lake View".to_string(),
        city: "Mysuru".to_string(),
        state: "Karnataka".to_string(),
        country: "IN".to_string(),
        zip_code: "5700012".to_string(),
    }
}

fn pickup_person_fields(name: &str, relation: PickupRelation) -> PickupPersonFields {
    PickupPersonFields {
        name: name.to_string(),
        relation,
        contact_number: "9000000001".to_string(),
    }
}
