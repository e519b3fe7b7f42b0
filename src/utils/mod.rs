pub mod jwt;
pub mod password;
pub mod selection;
pub mod validation;

pub use jwt::{Claims, JwtService};
pub use password::{hash_password, validate_password, verify_password};
pub use selection::selectionner_vainqueurs;
pub use validation::validate_email;
