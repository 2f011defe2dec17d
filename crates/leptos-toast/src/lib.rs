//! Leptos Toast Utilities
//!
//! Transient, auto-dismissing notifications for Leptos apps.
//! All toasts share one container that is created on first use.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Lifetime used by [`ToastHub::show`] when the hub was created with 0
pub const DEFAULT_DURATION_MS: u32 = 3000;

/// Class of the shared container element
pub const CONTAINER_CLASS: &str = "toast-container";

/// Toast category, mapped to a `toast-<kind>` CSS class
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" | "ok" => Some(ToastKind::Success),
            "error" | "danger" => Some(ToastKind::Error),
            "info" => Some(ToastKind::Info),
            "warning" | "warn" => Some(ToastKind::Warning),
            _ => None,
        }
    }
}

/// One toast entry
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
    /// Set on the animation frame after insertion so CSS transitions run
    pub visible: bool,
}

/// Ordered toast entries. Ids are never reused.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    next_id: u32,
    entries: Vec<Toast>,
}

impl ToastStack {
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Toast {
            id,
            message: message.into(),
            kind,
            visible: false,
        });
        id
    }

    /// Mark a toast visible. Returns false if it is already gone.
    pub fn reveal(&mut self, id: u32) -> bool {
        match self.entries.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.visible = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|t| t.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_visible(&self, id: u32) -> bool {
        self.entries.iter().any(|t| t.id == id && t.visible)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.entries.iter().any(|t| t.id == id)
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// CSS class list for a toast element
pub fn toast_class(kind: ToastKind, visible: bool) -> String {
    if visible {
        format!("toast toast-{} show", kind.as_str())
    } else {
        format!("toast toast-{}", kind.as_str())
    }
}

/// Handle to the page's toast stack. `Copy`, so it can move into event closures.
#[derive(Clone, Copy)]
pub struct ToastHub {
    stack: RwSignal<ToastStack>,
    mounted: StoredValue<bool>,
    default_duration_ms: u32,
}

pub fn create_toast_hub(default_duration_ms: u32) -> ToastHub {
    let default_duration_ms = if default_duration_ms == 0 {
        DEFAULT_DURATION_MS
    } else {
        default_duration_ms
    };
    ToastHub {
        stack: RwSignal::new(ToastStack::default()),
        mounted: StoredValue::new(false),
        default_duration_ms,
    }
}

impl ToastHub {
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> u32 {
        self.show_for(message, kind, self.default_duration_ms)
    }

    pub fn success(&self, message: impl Into<String>) -> u32 {
        self.show(message, ToastKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> u32 {
        self.show(message, ToastKind::Error)
    }

    /// Show a toast that removes itself after `duration_ms`
    pub fn show_for(&self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> u32 {
        self.ensure_host();

        let message = message.into();
        let id = self
            .stack
            .try_update(|s| s.push(message, kind))
            .unwrap_or_default();

        let stack = self.stack;
        next_frame(move || {
            stack.update(|s| {
                s.reveal(id);
            });
        });

        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            stack.update(|s| {
                s.remove(id);
            });
        });

        id
    }

    /// Remove a toast before its timer fires
    pub fn dismiss(&self, id: u32) {
        self.stack.update(|s| {
            s.remove(id);
        });
    }

    pub fn clear(&self) {
        self.stack.update(|s| s.clear());
    }

    pub fn len(&self) -> usize {
        self.stack.with_untracked(|s| s.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mount the host into the shared container once per page
    fn ensure_host(&self) {
        if self.mounted.get_value() {
            return;
        }
        let Some(container) = find_or_create_container() else {
            log::warn!("[TOAST] No document body, toast host not mounted");
            return;
        };
        let hub = *self;
        leptos::mount::mount_to(container, move || view! { <ToastHost hub=hub /> }).forget();
        self.mounted.set_value(true);
    }
}

fn find_or_create_container() -> Option<web_sys::HtmlElement> {
    let document = web_sys::window()?.document()?;
    if let Ok(Some(existing)) = document.query_selector(&format!(".{}", CONTAINER_CLASS)) {
        return existing.dyn_into::<web_sys::HtmlElement>().ok();
    }
    let container = document.create_element("div").ok()?;
    container.set_class_name(CONTAINER_CLASS);
    let _ = container.set_attribute("aria-live", "polite");
    document.body()?.append_child(&container).ok()?;
    container.dyn_into::<web_sys::HtmlElement>().ok()
}

/// Run `f` on the next animation frame (immediately outside a browser)
fn next_frame<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(win) = web_sys::window() else {
        f();
        return;
    };
    let cb = Closure::once_into_js(f);
    if win.request_animation_frame(cb.unchecked_ref()).is_err() {
        log::warn!("[TOAST] requestAnimationFrame failed");
    }
}

/// Renders every toast in the stack with a close button
#[component]
pub fn ToastHost(hub: ToastHub) -> impl IntoView {
    let stack = hub.stack;

    view! {
        <For
            each=move || stack.with(|s| s.entries().to_vec())
            key=|toast: &Toast| toast.id
            children=move |toast: Toast| {
                let id = toast.id;
                let kind = toast.kind;
                let class = move || toast_class(kind, stack.with(|s| s.is_visible(id)));
                view! {
                    <div class=class role="status">
                        <span class="toast-message">{toast.message}</span>
                        <button
                            class="toast-close"
                            aria-label="close"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                hub.dismiss(id);
                            }
                        >
                            "×"
                        </button>
                    </div>
                }
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut stack = ToastStack::default();
        let a = stack.push("first", ToastKind::Info);
        let b = stack.push("second", ToastKind::Error);
        assert!(b > a);
        assert_eq!(stack.len(), 2);
        assert!(!stack.is_visible(a));
    }

    #[test]
    fn test_reveal_and_remove() {
        let mut stack = ToastStack::default();
        let id = stack.push("saved", ToastKind::Success);
        assert!(stack.reveal(id));
        assert!(stack.is_visible(id));

        assert!(stack.remove(id));
        assert!(!stack.contains(id));
        // A timer firing after an explicit close is a no-op
        assert!(!stack.remove(id));
        assert!(!stack.reveal(id));
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut stack = ToastStack::default();
        let first = stack.push("a", ToastKind::Info);
        stack.clear();
        assert!(stack.is_empty());
        let second = stack.push("b", ToastKind::Info);
        assert_ne!(first, second);
    }

    #[test]
    fn test_concurrent_toasts_stack_independently() {
        let mut stack = ToastStack::default();
        let ids: Vec<u32> = (0..5).map(|i| stack.push(format!("t{}", i), ToastKind::Warning)).collect();
        stack.remove(ids[2]);
        let remaining: Vec<u32> = stack.entries().iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[1], ids[3], ids[4]]);
    }

    #[test]
    fn test_toast_class() {
        assert_eq!(toast_class(ToastKind::Error, false), "toast toast-error");
        assert_eq!(toast_class(ToastKind::Success, true), "toast toast-success show");
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(ToastKind::parse("Warning"), Some(ToastKind::Warning));
        assert_eq!(ToastKind::parse("danger"), Some(ToastKind::Error));
        assert_eq!(ToastKind::parse("loud"), None);
        assert_eq!(ToastKind::default(), ToastKind::Info);
    }
}
