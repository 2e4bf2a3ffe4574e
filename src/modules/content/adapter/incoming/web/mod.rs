pub mod forms;
pub mod routes;
