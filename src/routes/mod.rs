pub(crate) mod activate;
pub(crate) mod activation_status;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod register;
pub(crate) mod resend_activation;
pub(crate) mod verify_twofa;
pub(crate) mod welcome;

// re-export items from sub-modules
pub use activate::*;
pub use activation_status::*;
pub use login::*;
pub use logout::*;
pub use register::*;
pub use resend_activation::*;
pub use verify_twofa::*;
pub use welcome::*;
