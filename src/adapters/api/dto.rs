//! JSON DTOs for the two boundary touchpoints.
//!
//! The core has no wire protocol of its own; a web-request layer maps
//! these shapes onto the handlers. Registration and caravan search are
//! the only operations with an externally fixed JSON shape.

use serde::{Deserialize, Serialize};

use crate::domain::caravan::{Caravan, CaravanStatus};
use crate::domain::user::{User, UserRole};

/// `POST /users/register` request body.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub role: UserRole,
}

/// Successful registration response.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterUserResponse {
    pub user_id: String,
    pub username: String,
    pub role: UserRole,
}

impl From<&User> for RegisterUserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id().to_string(),
            username: user.username().to_string(),
            role: user.role(),
        }
    }
}

/// `POST /caravans/search` request body. The requesting guest comes
/// from the session, not the body.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchCaravansRequest {
    pub min_capacity: u32,
}

/// One caravan in a search result.
#[derive(Debug, Clone, Serialize)]
pub struct CaravanSummary {
    pub caravan_id: String,
    pub name: String,
    pub capacity: u32,
    pub daily_rate: i64,
    pub status: CaravanStatus,
    pub amenities: Vec<String>,
}

impl From<&Caravan> for CaravanSummary {
    fn from(caravan: &Caravan) -> Self {
        Self {
            caravan_id: caravan.id().to_string(),
            name: caravan.name().to_string(),
            capacity: caravan.capacity(),
            daily_rate: caravan.daily_rate(),
            status: caravan.status(),
            amenities: caravan.amenities().to_vec(),
        }
    }
}

/// Validation failure marker returned by the boundary.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

impl ErrorResponse {
    pub fn new(kind: impl std::fmt::Display, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            kind: kind.to_string(),
        }
    }
}
