pub mod regenerate;
pub mod template;
pub mod verify;
