//! Dashboard pages
//!
//! The protected part of the back-office. Only the shell lives here; the
//! entity screens behind each section are placeholders.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::ui::auth::{UserMenu, use_auth_context};
use crate::ui::icon::{Icon, icons};

/// Sections of the dashboard sidebar: (path segment, label)
pub const DASHBOARD_SECTIONS: &[(&str, &str)] = &[
    ("products", "Products"),
    ("customers", "Customers"),
    ("orders", "Orders"),
    ("reports", "Reports"),
    ("employees", "Employees"),
    ("chatbot", "Chatbot"),
    ("settings", "Settings"),
];

/// Label of a dashboard section, if the segment names one
pub fn section_label(segment: &str) -> Option<&'static str> {
    DASHBOARD_SECTIONS
        .iter()
        .find(|(slug, _)| *slug == segment)
        .map(|(_, label)| *label)
}

/// Document title of a dashboard section page
fn section_title(segment: &str) -> String {
    let label = section_label(segment).unwrap_or("Unknown section");
    format!("{} - Coffee Shop Manager", label)
}

/// Header, sidebar and content frame shared by the dashboard pages
#[component]
fn DashboardLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex bg-coffee-50">
            <aside class="w-60 bg-white border-r border-coffee-100 flex flex-col">
                <A href="/dashboard" attr:class="flex items-center gap-3 h-16 px-4 border-b border-coffee-100">
                    <Icon name=icons::COFFEE class="w-6 h-6" />
                    <span class="font-bold text-coffee-800">"Coffee Shop"</span>
                </A>
                <nav class="flex-1 py-4 space-y-1">
                    {DASHBOARD_SECTIONS
                        .iter()
                        .map(|(slug, label)| {
                            view! {
                                <A
                                    href=format!("/dashboard/{}", slug)
                                    attr:class="block px-4 py-2 text-sm text-coffee-700 hover:bg-coffee-50"
                                >
                                    {*label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>

            <div class="flex-1 flex flex-col">
                <header class="h-16 flex items-center justify-end px-6 bg-white border-b border-coffee-100">
                    <UserMenu />
                </header>
                <main class="flex-1 p-6">{children()}</main>
            </div>
        </div>
    }
}

/// Dashboard home
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth_context();

    let greeting = move || {
        auth.user()
            .map(|user| format!("Welcome back, {}!", user.username))
            .unwrap_or_default()
    };

    view! {
        <Title text="Dashboard - Coffee Shop Manager" />
        <DashboardLayout>
            <h1 class="text-2xl font-bold text-coffee-800">{greeting}</h1>
            <p class="mt-2 text-coffee-600">"Pick a section from the sidebar to get started."</p>
        </DashboardLayout>
    }
}

/// Placeholder for a single dashboard section
#[component]
pub fn DashboardSectionPage() -> impl IntoView {
    let params = use_params_map();

    let label = move || {
        params.with(|p| {
            p.get("section")
                .and_then(|segment| section_label(&segment))
        })
    };

    let title = move || {
        params.with(|p| section_title(p.get("section").as_deref().unwrap_or_default()))
    };

    view! {
        <Title text=title />
        <DashboardLayout>
            {move || match label() {
                Some(label) => view! {
                    <h1 class="text-2xl font-bold text-coffee-800">{label}</h1>
                    <p class="mt-2 text-coffee-600">"Nothing to show here yet."</p>
                }.into_any(),
                None => view! {
                    <h1 class="text-2xl font-bold text-coffee-800">"Unknown section"</h1>
                }.into_any(),
            }}
        </DashboardLayout>
    }
}
