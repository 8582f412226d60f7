//! Authentication UI module
//!
//! Session context bridge, login form, route guard and user menu for the
//! back-office frontend.

mod context;
mod login_form;
mod route_guard;
mod user_menu;

pub use context::{
    AppSession, AuthContext, LOGIN_DELAY_META, NavigationBridge, RouterNavigator,
    provide_auth_context, resolve_auth_settings, use_auth_context,
};
pub use login_form::LoginForm;
pub use route_guard::ProtectedRoute;
pub use user_menu::UserMenu;
