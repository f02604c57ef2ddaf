mod active_model;
mod base_entity;
mod behavior;
mod model;
mod timestamp;

pub use active_model::*;
pub use base_entity::*;
pub use behavior::*;
pub use model::*;
