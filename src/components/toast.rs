//! Toast notification stack.

use leptos::prelude::*;

use crate::core::NotificationQueue;
use crate::models::NotificationKind;

stylance::import_crate_style!(css, "src/components/toast.module.css");

/// Renders queued notifications; clicking a toast dismisses it.
#[component]
pub fn Toaster(notifications: RwSignal<NotificationQueue>) -> impl IntoView {
    view! {
        <div class=css::stack aria-live="polite">
            <For
                each=move || notifications.with(|queue| queue.to_vec())
                key=|notification| notification.id
                children=move |notification| {
                    let id = notification.id;
                    let kind_class = match notification.kind {
                        NotificationKind::Info => css::info,
                        NotificationKind::Success => css::success,
                        NotificationKind::Error => css::error,
                    };
                    let dismiss = move |_| {
                        notifications.update(|queue| {
                            queue.dismiss(id);
                        });
                    };

                    view! {
                        <div class=format!("{} {}", css::toast, kind_class) role="status" on:click=dismiss>
                            <span class=css::label>{notification.kind.label()}</span>
                            <span class=css::message>{notification.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
