pub mod data_stores;
pub mod email;
pub mod email_client;
pub mod login_request;
pub mod login_response;
pub mod logout_response;
pub mod password;
pub mod person_name;
pub mod register_request;
pub mod register_response;
pub mod resend_activation_request;
pub mod twofa_code;
pub mod user;
pub mod verify_twofa_request;

pub use data_stores::*;
pub use email::*;
pub use email_client::*;
pub use login_request::*;
pub use login_response::*;
pub use logout_response::*;
pub use password::*;
pub use person_name::*;
pub use register_request::*;
pub use register_response::*;
pub use resend_activation_request::*;
pub use twofa_code::*;
pub use user::*;
pub use verify_twofa_request::*;
