//! 车辆管理页
//!
//! 整表取回、本地每页 5 条。新增/编辑/删除均为模态框。

use crate::auth::use_auth;
use crate::components::pagination::PaginationFooter;
use crate::components::popup::ConfirmDialog;
use crate::web::use_toasts;
use bus_admin::buses::BusFleet;
use bus_admin_shared::date::short_date;
use bus_admin_shared::{Bus, BusPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn BusesPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let fleet = RwSignal::new(BusFleet::new(auth.config().bus_page_size));

    let add_form = RwSignal::new(BusPayload::default());
    let (show_add, set_show_add) = signal(false);
    let editing = RwSignal::new(Option::<Bus>::None);
    let deleting = RwSignal::new(Option::<Bus>::None);

    let load = move || {
        fleet.update(|f| f.set_loading(true));
        spawn_local(async move {
            let api = auth.api();
            let mut state = fleet.get_untracked();
            state.refresh(&api, &toasts).await;
            fleet.set(state);
        });
    };

    // 进入页面及令牌变化时重新加载
    let token = auth.token_memo();
    Effect::new(move |_| {
        token.track();
        load();
    });

    let on_add = move |_| {
        let form = add_form.get_untracked();
        spawn_local(async move {
            let api = auth.api();
            let mut state = fleet.get_untracked();
            let ok = state.create(&api, &toasts, &form).await;
            fleet.set(state);
            if ok {
                add_form.set(BusPayload::default());
            }
            if ok || form.bus_name.trim().is_empty() {
                set_show_add.set(false);
            }
        });
    };

    let on_save_edit = move |_| {
        let Some(edited) = editing.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let api = auth.api();
            let mut state = fleet.get_untracked();
            if state.update(&api, &toasts, &edited).await {
                editing.set(None);
            }
            fleet.set(state);
        });
    };

    let on_toggle = move |id: u64| {
        spawn_local(async move {
            let api = auth.api();
            let mut state = fleet.get_untracked();
            state.toggle_active(&api, &toasts, id).await;
            fleet.set(state);
        });
    };

    let on_confirm_delete = Callback::new(move |_| {
        let Some(bus) = deleting.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let api = auth.api();
            let mut state = fleet.get_untracked();
            if state.delete(&api, &toasts, bus.id).await {
                deleting.set(None);
            }
            fleet.set(state);
        });
    });

    let stat = move |f: fn(&BusFleet) -> usize| move || fleet.with(f);

    view! {
        <div class="w-full mt-12 md:mt-0 p-2 space-y-6">
            <div class="flex flex-col md:flex-row justify-between items-start md:items-center gap-4">
                <div>
                    <h1 class="text-2xl md:text-3xl font-bold">"Bus Management"</h1>
                    <p class="text-base-content/70">"Manage your fleet of buses"</p>
                </div>
                <button class="btn btn-success" on:click=move |_| set_show_add.set(true)>
                    "+ Add New Bus"
                </button>
            </div>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Total Buses"</div>
                    <div class="stat-value">{stat(BusFleet::total)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Active"</div>
                    <div class="stat-value text-success">{stat(BusFleet::active_count)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Inactive"</div>
                    <div class="stat-value text-error">{stat(BusFleet::inactive_count)}</div>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Bus Name"</th>
                                <th>"Driver"</th>
                                <th class="hidden md:table-cell">"License Plate"</th>
                                <th>"Status"</th>
                                <th class="hidden md:table-cell">"Updated"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || fleet.with(|f| f.loading() && f.total() == 0)>
                                <tr>
                                    <td colspan="6" class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span>
                                        " Loading buses..."
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || fleet.with(|f| !f.loading() && f.total() == 0)>
                                <tr>
                                    <td colspan="6" class="text-center py-8 text-base-content/50">
                                        "No buses found. Add one to get started."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || fleet.with(|f| f.list().visible().to_vec())
                                key=|bus| (bus.id, bus.is_active, bus.updated_at.clone(), bus.bus_name.clone())
                                children=move |bus| {
                                    let id = bus.id;
                                    let pill = if bus.is_active {
                                        "badge badge-success cursor-pointer"
                                    } else {
                                        "badge badge-error cursor-pointer"
                                    };
                                    let for_edit = bus.clone();
                                    let for_delete = bus.clone();
                                    view! {
                                        <tr>
                                            <td class="font-semibold">{bus.bus_name.clone()}</td>
                                            <td>{bus.driver_name.clone()}</td>
                                            <td class="hidden md:table-cell font-mono text-sm">
                                                {bus.license_plate.clone()}
                                            </td>
                                            <td>
                                                <span class=pill on:click=move |_| on_toggle(id)>
                                                    {bus.status_label()}
                                                </span>
                                            </td>
                                            <td class="hidden md:table-cell text-sm opacity-70">
                                                {short_date(&bus.updated_at)}
                                            </td>
                                            <td class="flex gap-2">
                                                <button
                                                    class="btn btn-ghost btn-sm"
                                                    on:click=move |_| editing.set(Some(for_edit.clone()))
                                                >
                                                    "Edit"
                                                </button>
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
                    label=Signal::derive(move || fleet.with(|f| f.list().range_label()))
                    current=Signal::derive(move || fleet.with(|f| f.list().current_page()))
                    last=Signal::derive(move || fleet.with(|f| f.list().last_page()))
                    on_page=Callback::new(move |page| {
                        fleet.update(|f| {
                            f.list_mut().go_to(page);
                        });
                    })
                />
            </div>

            // 新增
            <Show when=move || show_add.get()>
                <div class="modal modal-open">
                    <div class="modal-box">
                        <h3 class="font-bold text-lg">"Add New Bus"</h3>
                        <BusFormFields form=add_form />
                        <div class="modal-action">
                            <button class="btn btn-ghost" on:click=move |_| set_show_add.set(false)>"Cancel"</button>
                            <button class="btn btn-success" on:click=on_add>"Add Bus"</button>
                        </div>
                    </div>
                </div>
            </Show>

            // 编辑
            <Show when=move || editing.with(|e| e.is_some())>
                {move || {
                    let form = RwSignal::new(
                        editing.get_untracked().map(|b| b.payload()).unwrap_or_default(),
                    );
                    // 表单改动同步回正在编辑的记录
                    Effect::new(move |_| {
                        let payload = form.get();
                        editing.update_untracked(|e| {
                            if let Some(bus) = e.as_mut() {
                                bus.bus_name = payload.bus_name;
                                bus.driver_name = payload.driver_name;
                                bus.license_plate = payload.license_plate;
                                bus.is_active = payload.is_active;
                            }
                        });
                    });
                    view! {
                        <div class="modal modal-open">
                            <div class="modal-box">
                                <h3 class="font-bold text-lg">"Edit Bus"</h3>
                                <BusFormFields form=form />
                                <div class="modal-action">
                                    <button class="btn btn-ghost" on:click=move |_| editing.set(None)>"Cancel"</button>
                                    <button class="btn btn-success" on:click=on_save_edit>"Save Changes"</button>
                                </div>
                            </div>
                        </div>
                    }
                }}
            </Show>

            <ConfirmDialog
                open=Signal::derive(move || deleting.with(|d| d.is_some()))
                title="Delete Bus"
                message=Signal::derive(move || {
                    deleting
                        .with(|d| d.as_ref().map(|b| b.bus_name.clone()))
                        .map(|name| format!("Are you sure you want to delete {}? This action cannot be undone.", name))
                        .unwrap_or_default()
                })
                confirm_label="Delete Bus"
                on_confirm=on_confirm_delete
                on_cancel=Callback::new(move |_| deleting.set(None))
            />
        </div>
    }
}

/// 新增与编辑共用的字段
#[component]
fn BusFormFields(form: RwSignal<BusPayload>) -> impl IntoView {
    view! {
        <div class="space-y-3 py-4">
            <label class="form-control">
                <span class="label-text">"Bus Name *"</span>
                <input
                    class="input input-bordered"
                    prop:value=move || form.with(|f| f.bus_name.clone())
                    on:input=move |ev| form.update(|f| f.bus_name = event_target_value(&ev))
                />
            </label>
            <label class="form-control">
                <span class="label-text">"Driver Name"</span>
                <input
                    class="input input-bordered"
                    prop:value=move || form.with(|f| f.driver_name.clone())
                    on:input=move |ev| form.update(|f| f.driver_name = event_target_value(&ev))
                />
            </label>
            <label class="form-control">
                <span class="label-text">"License Plate"</span>
                <input
                    class="input input-bordered"
                    prop:value=move || form.with(|f| f.license_plate.clone())
                    on:input=move |ev| form.update(|f| f.license_plate = event_target_value(&ev))
                />
            </label>
            <label class="label cursor-pointer justify-start gap-3">
                <input
                    type="checkbox"
                    class="toggle toggle-success"
                    prop:checked=move || form.with(|f| f.is_active)
                    on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                />
                <span class="label-text">"Active"</span>
            </label>
        </div>
    }
}
