//! 用户管理页（服务端分页）

use crate::auth::use_auth;
use crate::components::pagination::PaginationFooter;
use crate::components::popup::ConfirmDialog;
use crate::web::use_toasts;
use bus_admin::users::UserDirectory;
use bus_admin_shared::User;
use bus_admin_shared::date::short_date;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let directory = RwSignal::new(UserDirectory::new());
    let deleting = RwSignal::new(Option::<User>::None);

    let load = move |page: u32| {
        directory.update(|d| d.set_loading(true));
        spawn_local(async move {
            let api = auth.api();
            let mut state = directory.get_untracked();
            state.load_page(&api, &toasts, page).await;
            directory.set(state);
        });
    };

    let token = auth.token_memo();
    Effect::new(move |_| {
        token.track();
        load(1);
    });

    let on_confirm_delete = Callback::new(move |_| {
        let Some(user) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        spawn_local(async move {
            let api = auth.api();
            let mut state = directory.get_untracked();
            state.delete(&api, &toasts, user.id).await;
            directory.set(state);
        });
    });

    view! {
        <div class="p-2 mt-12 md:mt-0 w-full space-y-6">
            <div>
                <h1 class="text-2xl md:text-3xl font-bold">"User Management"</h1>
                <p class="text-base-content/70">"Manage system users and permissions"</p>
            </div>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Total Users"</div>
                    <div class="stat-value">{move || directory.with(|d| d.list().total())}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"On This Page"</div>
                    <div class="stat-value text-success">{move || directory.with(|d| d.shown())}</div>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"User"</th>
                                <th>"Role"</th>
                                <th class="hidden md:table-cell">"Joined"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || directory.with(|d| d.loading())>
                                <tr>
                                    <td colspan="4" class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span>
                                        " Loading users..."
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || directory.with(|d| !d.loading() && d.list().is_empty())>
                                <tr>
                                    <td colspan="4" class="text-center py-8 text-base-content/50">
                                        "No users found."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || directory.with(|d| d.list().visible().to_vec())
                                key=|user| user.id
                                children=move |user| {
                                    let for_delete = user.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="flex items-center gap-3">
                                                    <div class="avatar placeholder">
                                                        <div class="bg-success text-success-content rounded-full w-9">
                                                            <span>{user.initial().to_string()}</span>
                                                        </div>
                                                    </div>
                                                    <div>
                                                        <div class="font-semibold">{user.name.clone()}</div>
                                                        <div class="text-sm opacity-60">{user.email.clone()}</div>
                                                    </div>
                                                </div>
                                            </td>
                                            <td>
                                                <span class="badge badge-outline">{user.role_label()}</span>
                                            </td>
                                            <td class="hidden md:table-cell text-sm opacity-70">
                                                {short_date(user.created_at.as_deref().unwrap_or_default())}
                                            </td>
                                            <td>
                                                <button
                                                    class="btn btn-ghost btn-sm text-error"
                                                    on:click=move |_| deleting.set(Some(for_delete.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
                <PaginationFooter
                    label=Signal::derive(move || directory.with(|d| format!("{} users", d.list().range_label())))
                    current=Signal::derive(move || directory.with(|d| d.list().current_page()))
                    last=Signal::derive(move || directory.with(|d| d.list().last_page()))
                    on_page=Callback::new(move |page: u32| {
                        let target = directory.with_untracked(|d| page.clamp(1, d.list().last_page()));
                        load(target);
                    })
                />
            </div>

            <ConfirmDialog
                open=Signal::derive(move || deleting.with(|d| d.is_some()))
                title="Delete User"
                message=Signal::derive(move || {
                    deleting
                        .with(|d| d.as_ref().map(|u| u.name.clone()))
                        .map(|name| format!("Are you sure you want to delete {}? This action cannot be undone.", name))
                        .unwrap_or_default()
                })
                confirm_label="Delete User"
                on_confirm=on_confirm_delete
                on_cancel=Callback::new(move |_| deleting.set(None))
            />
        </div>
    }
}
