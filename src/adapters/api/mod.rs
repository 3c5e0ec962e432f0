//! Thin API boundary types.

mod dto;

pub use dto::{
    CaravanSummary, ErrorResponse, RegisterUserRequest, RegisterUserResponse,
    SearchCaravansRequest,
};
