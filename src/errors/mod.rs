mod activation;
mod login;
mod register;
mod verify_twofa;
mod welcome;

pub use activation::*;
pub use login::*;
pub use register::*;
pub use verify_twofa::*;
pub use welcome::*;
