//! Domain models serialized to and from the HTTP layer.

pub mod cafe;
pub mod user;

pub use cafe::Cafe;
pub use user::User;
