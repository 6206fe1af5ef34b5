pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::page::{Page, PagedUserResponse};
pub use models::story::Story;
pub use models::user::{User, UserId};
