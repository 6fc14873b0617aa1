pub mod totp_secret;
pub mod user_password;
pub mod username;

pub use totp_secret::TotpSecret;
pub use user_password::{RawPassword, UserPassword};
pub use username::Username;
