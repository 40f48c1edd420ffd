//! # roster-signin
//!
//! Append-only CSV log of visitor sign-ins. The log has no read API.
//!
//! ```rust,no_run
//! use roster_signin::{append_at, SignIn};
//!
//! let entry = SignIn::now("Sam", "sam@example.com", "Eagles");
//! if let Err(err) = append_at("userinfo.csv", &entry) {
//!     eprintln!("warning: {err}");
//! }
//! ```

pub mod error;
pub mod log;

pub use error::SignInError;
pub use log::{append_at, SignIn, HEADER, TIMESTAMP_FORMAT};
