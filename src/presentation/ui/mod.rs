//! UI screens.

mod account_screen;
mod app;
mod auth_stack;
mod explorer_screen;
mod sign_in_screen;
mod sign_up_screen;
mod tab_screen;

pub use account_screen::{AccountAction, AccountScreen};
pub use app::{App, AppOptions};
pub use auth_stack::{AuthAction, AuthStack};
pub use explorer_screen::{ExplorerFocus, ExplorerScreen};
pub use sign_in_screen::{SignInAction, SignInFocus, SignInScreen};
pub use sign_up_screen::{SignUpAction, SignUpScreen};
pub use tab_screen::{TabAction, TabScreen};
