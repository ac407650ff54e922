pub mod admin;
pub mod assignment;
pub mod auth;
pub mod notification;
pub mod submission;
