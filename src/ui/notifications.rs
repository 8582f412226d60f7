//! Toast notifications
//!
//! Renders the notifications raised by the session context (login, logout,
//! failures) in the top-right corner of the screen.

use crate::core::{Notification, NotificationType, Notifier};
use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 5;

/// Notification item with unique ID for tracking
#[derive(Clone, Debug)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// Notifications container component
/// Place this once near the root of the app
#[component]
pub fn NotificationsContainer(
    /// Signal containing the list of notifications
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            {move || {
                notifications.get().into_iter().map(|item| {
                    view! {
                        <NotificationToast
                            notification=item.notification
                            id=item.id
                            notifications=notifications
                        />
                    }
                }).collect_view()
            }}
        </div>
    }
}

/// Single notification toast
#[component]
fn NotificationToast(
    notification: Notification,
    id: u64,
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    let (is_exiting, _set_is_exiting) = signal(false);

    if let Some(_ms) = notification.auto_dismiss_ms {
        #[cfg(feature = "hydrate")]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                _set_is_exiting.set(true);
                // Wait for exit animation
                TimeoutFuture::new(300).await;
                notifications.update(|n| {
                    n.retain(|i| i.id != id);
                });
            });
        }
    }

    let (bg_class, border_class, text_class) = match notification.notification_type {
        NotificationType::Success => ("bg-green-50", "border-green-300", "text-green-800"),
        NotificationType::Error => ("bg-red-50", "border-red-300", "text-red-800"),
        NotificationType::Warning => ("bg-yellow-50", "border-yellow-300", "text-yellow-800"),
        NotificationType::Info => ("bg-blue-50", "border-blue-300", "text-blue-800"),
    };

    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border shadow-lg transition-all duration-300 {} {}",
        bg_class, border_class
    );

    view! {
        <div
            class=container_class
            role="status"
            style=move || if is_exiting.get() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1; transform: translateX(0);" }
        >
            <div class=format!("flex-1 min-w-0 {}", text_class)>
                <h4 class="text-sm font-semibold">{notification.title}</h4>
                <p class="text-xs mt-0.5">{notification.message}</p>
            </div>
            <button
                class="text-coffee-400 hover:text-coffee-700 transition-colors"
                aria-label="Dismiss"
                on:click=move |_| {
                    notifications.update(|n| {
                        n.retain(|i| i.id != id);
                    });
                }
            >
                "×"
            </button>
        </div>
    }
}

/// Queue of visible notifications
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the notifications signal for the container
    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    /// Add a notification, dropping the oldest beyond the limit
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notifications.update(|n| {
            n.push_back(NotificationItem { id, notification });

            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });
    }

    /// Clear all notifications
    pub fn clear(&self) {
        self.notifications.set(VecDeque::new());
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationManager {
    fn notify(&self, kind: NotificationType, title: &str, message: &str) {
        self.push(Notification::new(kind, title, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_notify_queues_notification() {
        let owner = Owner::new();
        owner.set();

        let manager = NotificationManager::new();

        manager.notify(NotificationType::Success, "Logged out", "bye");

        let queued = manager.notifications().get_untracked();
        assert_eq!(queued.len(), 1);
        assert_eq!(queued[0].notification.title, "Logged out");
        assert_eq!(
            queued[0].notification.notification_type,
            NotificationType::Success
        );
    }

    #[test]
    fn test_queue_is_bounded() {
        let owner = Owner::new();
        owner.set();

        let manager = NotificationManager::new();

        for i in 0..(MAX_NOTIFICATIONS + 2) {
            manager.push(Notification::new(
                NotificationType::Error,
                "Login failed",
                format!("attempt {}", i),
            ));
        }

        let queued = manager.notifications().get_untracked();
        assert_eq!(queued.len(), MAX_NOTIFICATIONS);
        assert_eq!(queued[0].notification.message, "attempt 2");
        // IDs keep increasing even after eviction
        assert_eq!(queued.back().map(|item| item.id), Some(6));
    }

    #[test]
    fn test_clear() {
        let owner = Owner::new();
        owner.set();

        let manager = NotificationManager::new();
        manager.push(Notification::new(NotificationType::Info, "a", "b"));

        manager.clear();

        assert!(manager.notifications().get_untracked().is_empty());
    }
}
