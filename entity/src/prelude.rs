pub use super::pickup_person::Entity as PickupPerson;
pub use super::student::Entity as Student;
