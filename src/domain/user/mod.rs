//! User domain: hosts who list caravans and guests who book them.

mod aggregate;
mod errors;
mod role;

pub use aggregate::{RatingStats, User, MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH};
pub use errors::UserError;
pub use role::UserRole;
