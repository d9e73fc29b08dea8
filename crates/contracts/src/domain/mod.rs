pub mod contact;
pub mod project;
pub mod tech;
