pub mod configs;
pub mod dashboard;
pub mod logs;
