pub mod attachment;
pub mod document;
pub mod email;
pub mod submission;
