pub mod log;
pub mod slug;
