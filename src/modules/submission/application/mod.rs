pub mod domain;
pub mod ports;
pub mod service;
pub mod submission_use_cases;
