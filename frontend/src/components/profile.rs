//! 个人资料页

use crate::auth::{logout, use_auth};
use crate::components::popup::{ConfirmDialog, Popup, PopupNotifier};
use crate::web::{use_router, use_toasts};
use bus_admin::profile::{PasswordOutcome, ProfileEditor};
use bus_admin::route::AppRoute;
use bus_admin_shared::date::long_date;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toasts = use_toasts();
    let popup = PopupNotifier::new();

    let editor = RwSignal::new(auth.session.with_untracked(ProfileEditor::from_session));
    let (confirm_logout, set_confirm_logout) = signal(false);

    let show_current = RwSignal::new(false);
    let show_new = RwSignal::new(false);
    let show_confirm = RwSignal::new(false);

    let on_update_info = move |_| {
        editor.update(|e| e.saving_info = true);
        spawn_local(async move {
            let api = auth.api();
            let mut state = editor.get_untracked();
            let mut session = auth.session.get_untracked();
            if state.update_info(&api, &popup, &mut session).await {
                auth.session.set(session);
            }
            editor.set(state);
        });
    };

    // 修改成功后会话立即注销并跳转登录页，提示走全局通知栈以便跨页面保留
    let on_change_password = move |_| {
        editor.update(|e| e.saving_password = true);
        spawn_local(async move {
            let api = auth.api();
            let mut state = editor.get_untracked();
            let mut session = auth.session.get_untracked();
            let outcome = state.change_password(&api, &toasts, &mut session).await;
            editor.set(state);
            if outcome == PasswordOutcome::LoggedOut {
                auth.session.set(session);
                router.navigate_to(AppRoute::Login);
            }
        });
    };

    let user = move || auth.user();

    view! {
        <div class="w-full mt-12 md:mt-0 p-2 space-y-6 max-w-3xl">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body flex-row items-center gap-4">
                    <div class="avatar placeholder">
                        <div class="bg-success text-success-content rounded-full w-16 text-2xl">
                            <span>{move || user().map(|u| u.initial()).unwrap_or('?').to_string()}</span>
                        </div>
                    </div>
                    <div>
                        <h2 class="card-title">{move || user().map(|u| u.name).unwrap_or_default()}</h2>
                        <p class="text-sm opacity-70">{move || user().map(|u| u.email).unwrap_or_default()}</p>
                        <span class="badge badge-success badge-outline mt-1">
                            {move || user().map(|u| u.role_label()).unwrap_or_else(|| "User".to_string())}
                        </span>
                        <p class="text-xs opacity-60 mt-1">
                            "Member since "
                            {move || long_date(&user().and_then(|u| u.created_at).unwrap_or_default())}
                        </p>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body space-y-3">
                    <h3 class="card-title">"Profile Information"</h3>
                    <label class="form-control">
                        <span class="label-text">"Full Name"</span>
                        <input
                            class="input input-bordered"
                            prop:value=move || editor.with(|e| e.name.clone())
                            on:input=move |ev| editor.update(|e| e.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Email Address"</span>
                        <input
                            type="email"
                            class="input input-bordered"
                            prop:value=move || editor.with(|e| e.email.clone())
                            on:input=move |ev| editor.update(|e| e.email = event_target_value(&ev))
                        />
                    </label>
                    <div class="card-actions justify-end">
                        <button
                            class="btn btn-success"
                            disabled=move || editor.with(|e| e.saving_info)
                            on:click=on_update_info
                        >
                            {move || if editor.with(|e| e.saving_info) { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body space-y-3">
                    <div class="flex justify-between items-center">
                        <h3 class="card-title">"Change Password"</h3>
                        <button
                            class="btn btn-ghost btn-sm"
                            on:click=move |_| editor.update(|e| e.editing_password = !e.editing_password)
                        >
                            {move || if editor.with(|e| e.editing_password) { "Cancel" } else { "Edit" }}
                        </button>
                    </div>
                    <Show when=move || editor.with(|e| e.editing_password)>
                        <PasswordField
                            label="Current Password"
                            visible=show_current
                            value=Signal::derive(move || editor.with(|e| e.password.current_password.clone()))
                            on_input=Callback::new(move |v: String| editor.update(|e| e.password.current_password = v))
                        />
                        <PasswordField
                            label="New Password"
                            visible=show_new
                            value=Signal::derive(move || editor.with(|e| e.password.new_password.clone()))
                            on_input=Callback::new(move |v: String| editor.update(|e| e.password.new_password = v))
                        />
                        <PasswordField
                            label="Confirm New Password"
                            visible=show_confirm
                            value=Signal::derive(move || editor.with(|e| e.password.confirm_password.clone()))
                            on_input=Callback::new(move |v: String| editor.update(|e| e.password.confirm_password = v))
                        />
                        <div class="card-actions justify-end">
                            <button
                                class="btn btn-success"
                                disabled=move || editor.with(|e| e.saving_password)
                                on:click=on_change_password
                            >
                                {move || if editor.with(|e| e.saving_password) { "Updating..." } else { "Update Password" }}
                            </button>
                        </div>
                    </Show>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body flex-row justify-between items-center">
                    <div>
                        <h3 class="card-title">"Logout"</h3>
                        <p class="text-sm opacity-70">"Sign out of the admin panel"</p>
                    </div>
                    <button class="btn btn-outline btn-error" on:click=move |_| set_confirm_logout.set(true)>
                        "Logout"
                    </button>
                </div>
            </div>

            <Popup popup=popup />
            <ConfirmDialog
                open=confirm_logout
                title="Logout"
                message="Are you sure you want to logout?".to_string()
                confirm_label="Logout"
                on_confirm=Callback::new(move |_| {
                    set_confirm_logout.set(false);
                    logout(&auth);
                    router.navigate_to(AppRoute::Login);
                })
                on_cancel=Callback::new(move |_| set_confirm_logout.set(false))
            />
        </div>
    }
}

/// 带显示/隐藏切换的密码输入框
#[component]
fn PasswordField(
    label: &'static str,
    visible: RwSignal<bool>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="form-control">
            <span class="label-text">{label}</span>
            <div class="join w-full">
                <input
                    class="input input-bordered join-item w-full"
                    type=move || if visible.get() { "text" } else { "password" }
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="btn join-item"
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
        </label>
    }
}
