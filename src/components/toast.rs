use crate::icons::*;
use dioxus::prelude::*;

const DISPLAY_MS: u64 = 4000;
const FADE_MS: u64 = 300;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastType {
    Info,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub type_: ToastType,
    pub is_closing: bool,
}

/// Handle for raising notifications from anywhere under the provider.
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<usize>,
}

impl ToastManager {
    pub fn show(&mut self, message: &str, type_: ToastType) {
        let mut id_write = self.next_id.write();
        let id = *id_write;
        *id_write += 1;
        drop(id_write);

        self.toasts.write().push(Toast {
            id,
            message: message.to_string(),
            type_,
            is_closing: false,
        });

        let mut toasts = self.toasts;
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(DISPLAY_MS)).await;

            toasts.with_mut(|t| {
                if let Some(toast) = t.iter_mut().find(|t| t.id == id) {
                    toast.is_closing = true;
                }
            });

            tokio::time::sleep(std::time::Duration::from_millis(FADE_MS)).await;
            toasts.write().retain(|t| t.id != id);
        });
    }
}

pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 0);

    use_context_provider(|| ToastManager { toasts, next_id });

    rsx! {
        div { class: "toast-root",
            {children}

            div { class: "toast-stack",
                for toast in toasts() {
                    div {
                        key: "{toast.id}",
                        class: "toast",
                        class: if toast.is_closing { "toast-closing" },
                        match toast.type_ {
                            ToastType::Info => rsx! {
                                Info { size: 18, class: Some("toast-icon-info".to_string()) }
                            },
                            ToastType::Error => rsx! {
                                CircleAlert { size: 18, class: Some("toast-icon-error".to_string()) }
                            },
                        }
                        span { class: "toast-message", "{toast.message}" }
                    }
                }
            }
        }
    }
}
