use crate::auth::use_auth;
use crate::components::popup::{Popup, PopupNotifier};
use crate::web::{Link, use_router};
use bus_admin::notify::NoticeKind;
use bus_admin::password_reset::{PasswordReset, ResetStep};
use bus_admin::route::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 忘记密码：邮箱 -> 新密码 两步
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let popup = PopupNotifier::new();

    let flow = RwSignal::new(PasswordReset::new());
    let (submitting, set_submitting) = signal(false);

    let on_send_email = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        spawn_local(async move {
            let api = auth.api();
            let mut state = flow.get_untracked();
            state.request_token(&api, &popup).await;
            flow.set(state);
            set_submitting.set(false);
        });
    };

    let on_reset = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        spawn_local(async move {
            let api = auth.api();
            let mut state = flow.get_untracked();
            state.reset(&api, &popup).await;
            flow.set(state);
            set_submitting.set(false);
        });
    };

    // 重置成功后确认弹窗即回到登录页
    let on_popup_confirm = Callback::new(move |kind: NoticeKind| {
        if kind == NoticeKind::Success && flow.with_untracked(|f| *f.step() == ResetStep::Done) {
            router.navigate_to(AppRoute::Login);
        }
    });

    let is_email_step = move || flow.with(|f| *f.step() == ResetStep::Email);

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold text-success">"Forgot Password"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <Show
                        when=is_email_step
                        fallback=move || view! {
                            <form class="card-body" on:submit=on_reset>
                                <p class="text-sm text-base-content/70">"Enter your new password"</p>
                                <input
                                    type="password"
                                    placeholder="New password"
                                    class="input input-bordered"
                                    prop:value=move || flow.with(|f| f.password.new_password.clone())
                                    on:input=move |ev| flow.update(|f| f.password.new_password = event_target_value(&ev))
                                    required
                                />
                                <input
                                    type="password"
                                    placeholder="Confirm new password"
                                    class="input input-bordered"
                                    prop:value=move || flow.with(|f| f.password.confirm_password.clone())
                                    on:input=move |ev| flow.update(|f| f.password.confirm_password = event_target_value(&ev))
                                    required
                                />
                                <button class="btn btn-success mt-4" disabled=move || submitting.get()>
                                    {move || if submitting.get() { "Resetting..." } else { "Reset Password" }}
                                </button>
                            </form>
                        }
                    >
                        <form class="card-body" on:submit=on_send_email>
                            <p class="text-sm text-base-content/70">
                                "Enter the email address of your admin account"
                            </p>
                            <input
                                type="email"
                                placeholder="admin@example.com"
                                class="input input-bordered"
                                prop:value=move || flow.with(|f| f.email.clone())
                                on:input=move |ev| flow.update(|f| f.email = event_target_value(&ev))
                            />
                            <button class="btn btn-success mt-4" disabled=move || submitting.get()>
                                {move || if submitting.get() { "Validating..." } else { "Continue" }}
                            </button>
                        </form>
                    </Show>
                    <div class="text-center pb-6">
                        <Link route=AppRoute::Login class="link link-success text-sm">
                            "Back to Login"
                        </Link>
                    </div>
                </div>
            </div>
            <Popup popup=popup on_confirm=on_popup_confirm />
        </div>
    }
}
