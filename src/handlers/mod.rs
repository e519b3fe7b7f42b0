pub mod auth;
pub mod event;
pub mod participant;
pub mod tirage;
pub mod tour;
pub mod user;

pub use auth::auth_config;
pub use event::event_config;
pub use participant::participant_config;
pub use tirage::tirage_config;
pub use tour::tour_config;
pub use user::user_config;
