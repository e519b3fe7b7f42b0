pub mod auth_service;
pub mod event_service;
pub mod participant_service;
pub mod tirage_service;
pub mod tirage_store;
pub mod tour_service;
pub mod user_service;

pub use auth_service::*;
pub use event_service::*;
pub use participant_service::*;
pub use tirage_service::*;
pub use tirage_store::*;
pub use tour_service::*;
pub use user_service::*;
