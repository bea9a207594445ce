//! User domain: accounts, email addresses, and credential rules.

mod account;
mod errors;

pub use account::{
    EmailAddress, User, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_NAME_LENGTH,
    MIN_PASSWORD_LENGTH,
};
pub use errors::AccountError;
