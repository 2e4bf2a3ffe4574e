pub mod domain;
pub mod ports;
pub mod services;
pub mod session_events;
