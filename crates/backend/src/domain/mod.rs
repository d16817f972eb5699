pub mod configs;
pub mod logs;
