pub mod email;
pub mod name;
pub mod password;

pub use email::is_valid_email;
pub use name::is_valid_person_name;
pub use password::is_valid_password;
