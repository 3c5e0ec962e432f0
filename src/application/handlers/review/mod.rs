//! Review handlers.

mod create_review;

pub use create_review::{CreateReviewCommand, CreateReviewHandler};
