pub mod cleanup;
pub mod file_manager;
pub mod report;
