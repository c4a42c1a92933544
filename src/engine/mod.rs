mod compare;
pub mod router;
pub mod session;

pub use router::*;
pub use session::*;
