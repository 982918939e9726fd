pub mod account;
pub mod config;
pub mod directory;
pub mod error;
pub mod login;
pub mod navigation;
pub mod registration;
pub mod reset;
pub mod router;
pub mod session;

pub use account::{Account, Identity, Role};
pub use directory::{Directory, MockDirectory};
pub use error::FormError;
pub use navigation::{Navigator, Page};
pub use router::View;
pub use session::{Session, SessionStore};
