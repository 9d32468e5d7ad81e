pub mod home;
pub mod not_found;
pub mod students;
pub mod view_student;

pub use home::Home;
pub use not_found::NotFound;
pub use students::Students;
pub use view_student::ViewStudent;
