//! 模态提示框
//!
//! 资料页与忘记密码页用弹窗代替右上角通知，二者共用 `Notifier` 接口。

use bus_admin::notify::{NoticeKind, Notifier};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupMessage {
    pub title: String,
    pub message: String,
    pub kind: NoticeKind,
}

/// 把通知写进弹窗 signal
#[derive(Clone, Copy)]
pub struct PopupNotifier {
    pub current: RwSignal<Option<PopupMessage>>,
}

impl PopupNotifier {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn close(&self) {
        self.current.set(None);
    }
}

impl Notifier for PopupNotifier {
    fn notify(&self, message: &str, kind: NoticeKind) {
        let title = match kind {
            NoticeKind::Success => "Success",
            NoticeKind::Error => "Error",
        };
        self.current.set(Some(PopupMessage {
            title: title.to_string(),
            message: message.to_string(),
            kind,
        }));
    }
}

/// 弹窗
///
/// 点击 OK 或背景关闭弹窗后都会调用 `on_confirm`。
#[component]
pub fn Popup(
    popup: PopupNotifier,
    #[prop(optional, into)] on_confirm: Option<Callback<NoticeKind>>,
) -> impl IntoView {
    view! {
        <Show when=move || popup.current.with(|p| p.is_some())>
            {move || {
                popup
                    .current
                    .get()
                    .map(|msg| {
                        let kind = msg.kind;
                        let dismiss = move |_: leptos::ev::MouseEvent| {
                            popup.close();
                            if let Some(cb) = on_confirm {
                                cb.run(kind);
                            }
                        };
                        let title_class = match kind {
                            NoticeKind::Success => "font-bold text-lg text-success",
                            NoticeKind::Error => "font-bold text-lg text-error",
                        };
                        view! {
                            <div class="modal modal-open">
                                <div class="modal-box">
                                    <h3 class=title_class>{msg.title}</h3>
                                    <p class="py-4">{msg.message}</p>
                                    <div class="modal-action">
                                        <button class="btn btn-success" on:click=dismiss>
                                            "OK"
                                        </button>
                                    </div>
                                </div>
                                <div class="modal-backdrop" on:click=dismiss></div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}

/// 确认框（删除、注销）
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] confirm_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="font-bold text-lg">{title.clone()}</h3>
                    <p class="py-4">{move || message.get()}</p>
                    <div class="modal-action">
                        <button class="btn btn-ghost" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn-error" on:click=move |_| on_confirm.run(())>
                            {confirm_label.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// 右上角通知栈
#[component]
pub fn NotificationStack() -> impl IntoView {
    let toasts = crate::web::use_toasts();
    let queue = toasts.queue();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || queue.with(|q| q.entries().to_vec())
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    let class = match n.kind {
                        NoticeKind::Success => "alert alert-success shadow-lg",
                        NoticeKind::Error => "alert alert-error shadow-lg",
                    };
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            <span class="text-sm font-medium">{n.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
