pub mod activation;
pub mod auth;
pub mod hashing;
pub mod hashmap_user_store;
pub mod mock_email_client;
pub mod twofa_code_service;
pub mod url_signer;

pub use activation::*;
pub use auth::*;
pub use hashmap_user_store::*;
pub use mock_email_client::*;
pub use twofa_code_service::*;
pub use url_signer::*;
