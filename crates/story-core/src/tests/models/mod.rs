mod page;
mod story;
mod user;
