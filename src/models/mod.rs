pub mod command;
pub mod field_view;
pub mod notification;
pub mod parameters;
pub mod temperature;
