pub mod page;
pub mod story;
pub mod user;
