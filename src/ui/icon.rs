use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name under /icons without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons shipped in public/icons
pub mod icons {
    pub const COFFEE: &str = "coffee";
    pub const USER: &str = "user";
    pub const LOCK: &str = "lock";
    pub const LOGOUT: &str = "logout";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const LOADER: &str = "loader";
}
