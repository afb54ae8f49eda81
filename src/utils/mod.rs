pub mod config;
pub mod storage;
pub mod validation;
pub mod vision;
