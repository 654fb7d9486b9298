//! This file serves as the root for all SeaORM entity modules.
//! The data models cover the four record types of the student records
//! application: the administrator account, students, courses, and grades.

pub mod admin;
pub mod course;
pub mod grade;
pub mod student;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::admin::Entity as Admin;
    pub use super::course::Entity as Course;
    pub use super::grade::Entity as Grade;
    pub use super::student::Entity as Student;
}
