//! 后台布局：侧边栏 + 顶栏 + 内容区

use crate::auth::{logout, use_auth};
use crate::components::popup::ConfirmDialog;
use crate::web::{Link, use_router};
use bus_admin::route::{AppRoute, NAV_LINKS};
use leptos::prelude::*;

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let current = router.current_route();

    let (sidebar_open, set_sidebar_open) = signal(false);
    let (confirm_logout, set_confirm_logout) = signal(false);

    let initial = move || {
        auth.session
            .with(|s| s.user().map(|u| u.initial()).unwrap_or('?'))
            .to_string()
    };
    let user_name = move || auth.session.with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default());

    view! {
        <div class="min-h-screen bg-base-200 md:flex">
            // 移动端顶栏
            <div class="md:hidden fixed top-0 inset-x-0 z-40 navbar bg-success text-success-content">
                <button class="btn btn-ghost btn-square" on:click=move |_| set_sidebar_open.update(|v| *v = !*v)>
                    "☰"
                </button>
                <span class="font-bold">"Admin Panel"</span>
            </div>

            <aside class=move || {
                if sidebar_open.get() {
                    "fixed md:static z-30 inset-y-0 left-0 w-64 bg-success text-success-content flex flex-col pt-16 md:pt-0"
                } else {
                    "hidden md:flex md:static w-64 bg-success text-success-content flex-col"
                }
            }>
                <div class="p-6 text-2xl font-bold">"Admin Panel"</div>
                <ul class="menu flex-1 gap-1">
                    {NAV_LINKS
                        .into_iter()
                        .map(|route| {
                            let class = Signal::derive(move || {
                                if current.get() == route {
                                    "active font-semibold".to_string()
                                } else {
                                    String::new()
                                }
                            });
                            view! {
                                <li on:click=move |_| set_sidebar_open.set(false)>
                                    <Link route=route class=class>{route.title()}</Link>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="p-4">
                    <button class="btn btn-outline w-full" on:click=move |_| set_confirm_logout.set(true)>
                        "Logout"
                    </button>
                </div>
            </aside>

            <div class="flex-1 flex flex-col">
                <header class="hidden md:flex navbar bg-base-100 shadow px-6 justify-end gap-3">
                    <span class="text-sm text-base-content/70">{user_name}</span>
                    <div class="avatar placeholder">
                        <div class="bg-success text-success-content rounded-full w-10">
                            <span>{initial}</span>
                        </div>
                    </div>
                </header>
                <main class="flex-1 p-4 md:p-6">{children()}</main>
            </div>

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
