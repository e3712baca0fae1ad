pub mod challenge;
pub mod content;
pub mod message;
pub mod mood;
pub mod response;
pub mod room;
