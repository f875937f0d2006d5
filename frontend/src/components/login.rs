use crate::auth::{login, use_auth};
use crate::web::Link;
use bus_admin::route::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 登录成功后的跳转由路由服务监听认证阶段完成
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let ok = login(&auth, email.get_untracked(), password.get_untracked()).await;
            if !ok {
                set_error_msg.set(Some("Invalid email or password".to_string()));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold text-success">"Admin Login"</h1>
                    <p class="text-base-content/70">"Bus Tracker Admin Panel"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="admin@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <div class="join w-full">
                                <input
                                    id="password"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    placeholder="••••••••"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered join-item w-full"
                                    required
                                />
                                <button
                                    type="button"
                                    class="btn join-item"
                                    on:click=move |_| set_show_password.update(|v| *v = !*v)
                                >
                                    {move || if show_password.get() { "Hide" } else { "Show" }}
                                </button>
                            </div>
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-success" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Logging in..." }.into_any()
                                } else {
                                    "Login".into_any()
                                }}
                            </button>
                        </div>
                        <div class="text-center mt-2">
                            <Link route=AppRoute::ForgotPassword class="link link-success text-sm">
                                "Forgot Password?"
                            </Link>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
