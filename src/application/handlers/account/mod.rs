//! Account command handlers: registration and login.

mod login_user;
mod register_user;

pub use login_user::{LoginUserCommand, LoginUserHandler};
pub use register_user::{AuthenticatedAccount, RegisterUserCommand, RegisterUserHandler};
