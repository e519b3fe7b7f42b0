pub mod events;
pub mod participants;
pub mod tirages;
pub mod tours;
pub mod users;
pub mod vainqueurs;

pub use events as event_entity;
pub use participants as participant_entity;
pub use tirages as tirage_entity;
pub use tours as tour_entity;
pub use users as user_entity;
pub use vainqueurs as vainqueur_entity;
