//! Caravan handlers.

mod register_caravan;
mod search_caravans;

pub use register_caravan::{RegisterCaravanCommand, RegisterCaravanHandler};
pub use search_caravans::{SearchCaravansCommand, SearchCaravansHandler};
