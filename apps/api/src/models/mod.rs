pub mod conversation;
pub mod directory;
pub mod job;
pub mod resume;
