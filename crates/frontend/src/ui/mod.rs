pub mod astronaut;
pub mod footer;
pub mod project_modal;
