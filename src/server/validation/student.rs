//! Rules for student create and update submissions.

use entity::sea_orm_active_enums::PickupRelation;
use serde_json::{Map, Value};

use crate::server::{
    model::student::{
        NewStudent, PickupPersonChange, PickupPersonFields, StudentFields, StudentForm,
        StudentUpdate,
    },
    validation::{
        photo::validate_photo,
        rules::{label_for, Field},
        ValidationErrors,
    },
};

/// Fewest pickup persons a submission may carry.
pub const MIN_PICKUP_PERSONS: usize = 1;
/// Most pickup persons a student may own.
pub const MAX_PICKUP_PERSONS: usize = 6;

const PICKUP_PERSONS: &str = "pickupPersons";

/// Validates a create submission; the photo is required.
pub fn validate_new_student(form: StudentForm) -> Result<NewStudent, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let fields = validate_student_fields(&mut errors, &form);

    let photo = match form.photo {
        Some(upload) => validate_photo(&mut errors, "photo", upload),
        None => {
            errors.add("photo", "The photo field is required.");
            None
        }
    };

    let pickup_persons = pickup_person_entries(&mut errors, form.pickup_persons.as_deref())
        .and_then(|entries| {
            let mut persons = Vec::with_capacity(entries.len());
            let mut complete = true;
            for (index, entry) in entries.iter().enumerate() {
                match pickup_person_fields(&mut errors, index, entry) {
                    Some(person) => persons.push(person),
                    None => complete = false,
                }
            }
            complete.then_some(persons)
        });

    let student = match (fields, photo, pickup_persons) {
        (Some(fields), Some(photo), Some(pickup_persons)) => Some(NewStudent {
            fields,
            photo: Some(photo),
            pickup_persons,
        }),
        _ => None,
    };

    errors.finish(student)
}

/// Validates an update submission; the photo is optional and every pickup person entry must
/// name the row it changes.
pub fn validate_student_update(form: StudentForm) -> Result<StudentUpdate, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let fields = validate_student_fields(&mut errors, &form);

    let photo = match form.photo {
        Some(upload) => validate_photo(&mut errors, "photo", upload).map(Some),
        None => Some(None),
    };

    let pickup_persons = pickup_person_entries(&mut errors, form.pickup_persons.as_deref())
        .and_then(|entries| {
            let mut changes = Vec::with_capacity(entries.len());
            let mut complete = true;
            for (index, entry) in entries.iter().enumerate() {
                match pickup_person_change(&mut errors, index, entry) {
                    Some(change) => changes.push(change),
                    None => complete = false,
                }
            }
            complete.then_some(changes)
        });

    let update = match (fields, photo, pickup_persons) {
        (Some(fields), Some(photo), Some(pickup_persons)) => Some(StudentUpdate {
            fields,
            photo,
            pickup_persons,
        }),
        _ => None,
    };

    errors.finish(update)
}

fn validate_student_fields(errors: &mut ValidationErrors, form: &StudentForm) -> Option<StudentFields> {
    let child_name = Field::new(errors, "childName", form.child_name.as_deref())
        .required()
        .max_chars(255)
        .value();
    let date_of_birth = Field::new(errors, "dateOfBirth", form.date_of_birth.as_deref())
        .required()
        .date();
    let class = Field::new(errors, "class", form.class.as_deref())
        .required()
        .value();
    let address = Field::new(errors, "address", form.address.as_deref())
        .required()
        .value();
    let city = Field::new(errors, "city", form.city.as_deref())
        .required()
        .value();
    let state = Field::new(errors, "state", form.state.as_deref())
        .required()
        .value();
    let country = Field::new(errors, "country", form.country.as_deref())
        .required()
        .exact_chars(2)
        .value();
    let zip_code = Field::new(errors, "zipCode", form.zip_code.as_deref())
        .required()
        .exact_chars(7)
        .value();

    Some(StudentFields {
        child_name: child_name?,
        date_of_birth: date_of_birth?,
        class: class?,
        address: address?,
        city: city?,
        state: state?,
        country: country?,
        zip_code: zip_code?,
    })
}

/// Decodes the JSON-encoded pickup person list and checks its length.
fn pickup_person_entries(errors: &mut ValidationErrors, raw: Option<&str>) -> Option<Vec<Value>> {
    let label = label_for(PICKUP_PERSONS);

    let raw = match raw.map(str::trim).filter(|r| !r.is_empty()) {
        Some(raw) => raw,
        None => {
            errors.add(PICKUP_PERSONS, format!("The {} field is required.", label));
            return None;
        }
    };

    let entries = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => entries,
        _ => {
            errors.add(PICKUP_PERSONS, format!("The {} field must be an array.", label));
            return None;
        }
    };

    if entries.len() < MIN_PICKUP_PERSONS {
        errors.add(
            PICKUP_PERSONS,
            format!(
                "The {} field must have at least {} items.",
                label, MIN_PICKUP_PERSONS
            ),
        );
        return None;
    }

    if entries.len() > MAX_PICKUP_PERSONS {
        errors.add(
            PICKUP_PERSONS,
            format!(
                "The {} field must not have more than {} items.",
                label, MAX_PICKUP_PERSONS
            ),
        );
        return None;
    }

    Some(entries)
}

fn entry_object<'v>(
    errors: &mut ValidationErrors,
    index: usize,
    entry: &'v Value,
) -> Option<&'v Map<String, Value>> {
    match entry {
        Value::Object(object) => Some(object),
        _ => {
            let name = format!("{}.{}", PICKUP_PERSONS, index);
            errors.add(name.clone(), format!("The {} field must be an object.", name));
            None
        }
    }
}

/// Reads a string member, recording a type error for anything other than a string or null.
fn string_member<'v>(
    errors: &mut ValidationErrors,
    name: &str,
    object: &'v Map<String, Value>,
    key: &str,
) -> Result<Option<&'v str>, ()> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => {
            errors.add(name, format!("The {} field must be a string.", name));
            Err(())
        }
    }
}

fn pickup_person_fields(
    errors: &mut ValidationErrors,
    index: usize,
    entry: &Value,
) -> Option<PickupPersonFields> {
    let object = entry_object(errors, index, entry)?;

    let name_field = format!("{}.{}.name", PICKUP_PERSONS, index);
    let relation_field = format!("{}.{}.relation", PICKUP_PERSONS, index);
    let contact_field = format!("{}.{}.contactNumber", PICKUP_PERSONS, index);

    let name = string_member(errors, &name_field, object, "name")
        .ok()
        .and_then(|raw| Field::new(errors, name_field.as_str(), raw).required().max_chars(255).value());
    let relation = string_member(errors, &relation_field, object, "relation")
        .ok()
        .and_then(|raw| {
            Field::new(errors, relation_field.as_str(), raw)
                .required()
                .one_of(parse_relation)
        });
    let contact_number = string_member(errors, &contact_field, object, "contactNumber")
        .ok()
        .and_then(|raw| {
            Field::new(errors, contact_field.as_str(), raw)
                .required()
                .exact_chars(10)
                .value()
        });

    Some(PickupPersonFields {
        name: name?,
        relation: relation?,
        contact_number: contact_number?,
    })
}

fn pickup_person_change(
    errors: &mut ValidationErrors,
    index: usize,
    entry: &Value,
) -> Option<PickupPersonChange> {
    let object = entry_object(errors, index, entry)?;

    let id = pickup_person_id(errors, index, object.get("id"));
    let remove = remove_flag(errors, index, object.get("remove"));

    match remove? {
        true => Some(PickupPersonChange::Remove { id: id? }),
        false => {
            let fields = pickup_person_fields(errors, index, entry);
            Some(PickupPersonChange::Update {
                id: id?,
                fields: fields?,
            })
        }
    }
}

/// Accepts a JSON integer or a string holding one.
fn pickup_person_id(errors: &mut ValidationErrors, index: usize, value: Option<&Value>) -> Option<i32> {
    let name = format!("{}.{}.id", PICKUP_PERSONS, index);

    let parsed = match value {
        None | Some(Value::Null) => {
            errors.add(name.clone(), format!("The {} field is required.", name));
            return None;
        }
        Some(Value::Number(number)) => number.as_i64(),
        Some(Value::String(text)) if text.trim().is_empty() => {
            errors.add(name.clone(), format!("The {} field is required.", name));
            return None;
        }
        Some(Value::String(text)) => text.trim().parse::<i64>().ok(),
        Some(_) => None,
    };

    match parsed.and_then(|id| i32::try_from(id).ok()) {
        Some(id) => Some(id),
        None => {
            errors.add(name.clone(), format!("The {} field must be an integer.", name));
            None
        }
    }
}

/// Optional removal flag, absent means keep.
fn remove_flag(errors: &mut ValidationErrors, index: usize, value: Option<&Value>) -> Option<bool> {
    let flag = match value {
        None | Some(Value::Null) => Some(false),
        Some(Value::Bool(flag)) => Some(*flag),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Some(Value::String(text)) => match text.as_str() {
            "0" | "false" => Some(false),
            "1" | "true" => Some(true),
            _ => None,
        },
        Some(_) => None,
    };

    if flag.is_none() {
        let name = format!("{}.{}.remove", PICKUP_PERSONS, index);
        errors.add(name.clone(), format!("The {} field must be true or false.", name));
    }

    flag
}

fn parse_relation(value: &str) -> Option<PickupRelation> {
    crate::model::student::RelationDto::parse(value).map(PickupRelation::from)
}
