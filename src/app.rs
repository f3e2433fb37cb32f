//! Root application module.
//!
//! Contains [`AppContext`], the state shared by every behavior, and the
//! startup logic that binds each behavior to the static document.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::components::{Toaster, blog, counters, faq, forms, navigation, reveal};
use crate::config::{SiteConfig, toast};
use crate::core::{DomError, NotificationQueue, Pushed, Scheduler, TaskKey, Ticket};
use crate::models::NotificationKind;
use crate::utils::{dom, log};

// =============================================================================
// AppContext
// =============================================================================

/// State shared by every behavior on the page.
///
/// # Architecture
///
/// - **Config**: timings, possibly overridden by the page
/// - **Scheduler**: cancellable delayed tasks, keyed by [`TaskKey`]
/// - **Notifications**: the toast queue, rendered by [`Toaster`]
///
/// Everything here lives on the UI thread. The scheduler is an
/// `Rc<RefCell<_>>` handle, so cloning the context is cheap and every clone
/// sees the same tasks.
#[derive(Clone)]
pub struct AppContext {
    pub config: SiteConfig,
    pub scheduler: Scheduler,
    pub notifications: RwSignal<NotificationQueue>,
}

impl AppContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            scheduler: Scheduler::new(),
            notifications: RwSignal::new(NotificationQueue::default()),
        }
    }

    /// Run `task` after `delay_ms`, replacing any pending task for `key`.
    ///
    /// The task is skipped if another task for the same key was scheduled (or
    /// the key cancelled) in the meantime.
    pub fn schedule<F>(&self, key: TaskKey, delay_ms: u32, task: F) -> Ticket
    where
        F: FnOnce() + 'static,
    {
        let ticket = self.scheduler.begin(key);
        let scheduler = self.scheduler.clone();

        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if scheduler.is_current(&ticket) {
                scheduler.finish(ticket);
                task();
            }
        });

        ticket
    }

    /// Show a toast that dismisses itself after the configured duration.
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let message = message.into();
        log::debug(&format!("notify [{}] {}", kind.label(), message));

        let mut pushed = None;
        self.notifications.update(|queue| pushed = Some(queue.push(kind, message)));
        let Some(Pushed { id, evicted }) = pushed else {
            return;
        };

        // The evicted toast is already gone; drop its pending expiry
        if let Some(evicted) = evicted {
            self.scheduler.cancel(TaskKey::Toast(evicted));
        }

        let notifications = self.notifications;
        self.schedule(TaskKey::Toast(id), self.config.toast_duration_ms, move || {
            notifications.update(|queue| {
                queue.dismiss(id);
            });
        });
    }
}

// =============================================================================
// Startup
// =============================================================================

type InitFn = fn(&AppContext) -> Result<usize, DomError>;

/// Behaviors in start order, with the name used in log lines.
const BEHAVIORS: &[(&str, InitFn)] = &[
    ("navigation", navigation::init),
    ("reveal", reveal::init),
    ("counters", counters::init),
    ("forms", forms::init),
    ("blog", blog::init),
    ("faq", faq::init),
];

/// Bind every behavior to the document.
///
/// A behavior that fails to start is logged and skipped; the rest still run.
pub fn start() {
    let ctx = AppContext::new(SiteConfig::load());

    if let Err(e) = mount_toaster(ctx.notifications) {
        log::warn(&format!("toasts disabled: {}", e));
    }

    for (name, init) in BEHAVIORS {
        match init(&ctx) {
            Ok(bound) => log::debug(&format!("{}: bound {} element(s)", name, bound)),
            Err(e) => log::warn(&format!("{} disabled: {}", name, e)),
        }
    }
}

/// Mount the toast stack into `#toast-root`, creating it if the page lacks one.
fn mount_toaster(notifications: RwSignal<NotificationQueue>) -> Result<(), DomError> {
    let root = match dom::element_by_id(toast::ROOT_ID) {
        Some(root) => root,
        None => {
            let document = dom::document()?;
            let root = document.create_element("div")?;
            root.set_id(toast::ROOT_ID);
            document
                .body()
                .ok_or(DomError::NoDocument)?
                .append_child(&root)?;
            root
        }
    };

    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), move || {
        view! { <Toaster notifications=notifications /> }
    })
    .forget();
    Ok(())
}
