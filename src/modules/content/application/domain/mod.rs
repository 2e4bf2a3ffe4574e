pub mod entities;
pub mod list_input;
pub mod skills;
