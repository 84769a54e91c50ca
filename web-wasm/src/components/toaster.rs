//! トースト通知
//!
//! `Toaster` をコンテキストで配り、どのコンポーネントからでも通知を積めるようにする。

use crate::config::TOAST_DURATION_MS;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use visionestate_common::{Notification, NotificationLevel};

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// 表示中のトースト一覧
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            notification,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    pub fn push(&self, notification: Notification) {
        tracing::debug!(message = %notification.message, "toast");
        let queue = self.queue;
        let id = queue
            .try_update(|q| q.push(notification))
            .unwrap_or_default();
        Timeout::new(TOAST_DURATION_MS, move || {
            queue.try_update(|q| q.dismiss(id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster {
        queue: RwSignal::new(ToastQueue::default()),
    };
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="fixed bottom-6 right-6 z-[100] flex flex-col gap-2">
            <For
                each=move || toaster.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                let:toast
            >
                {
                    let id = toast.id;
                    let tone = match toast.notification.level {
                        NotificationLevel::Success => "border-green-200 bg-green-50 text-green-800",
                        NotificationLevel::Error => "border-red-200 bg-red-50 text-red-800",
                    };
                    view! {
                        <div
                            class=format!("flex items-center gap-3 rounded-xl border px-4 py-3 text-sm font-medium shadow-lg {}", tone)
                            role="status"
                        >
                            <span>{toast.notification.message.clone()}</span>
                            <button
                                class="ml-2 opacity-60 hover:opacity-100"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(Notification::success("added"));
        let b = queue.push(Notification::error("Connection Failed"));
        assert_ne!(a, b);
        assert_eq!(queue.items().len(), 2);

        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].notification.message, "Connection Failed");

        queue.dismiss(999);
        assert_eq!(queue.items().len(), 1);
    }
}
