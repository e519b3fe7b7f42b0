pub mod common;
pub mod event;
pub mod pagination;
pub mod participant;
pub mod tirage;
pub mod tour;
pub mod user;

pub use common::*;
pub use event::*;
pub use pagination::*;
pub use participant::*;
pub use tirage::*;
pub use tour::*;
pub use user::*;
