pub mod about;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod tech_stack;
