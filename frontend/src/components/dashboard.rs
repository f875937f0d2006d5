use bus_admin_shared::date::clock_now;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let clock = RwSignal::new(clock_now());

    // 每秒刷新时钟；Interval 被丢弃时自动清除
    let interval = StoredValue::new_local(Some(Interval::new(1_000, move || {
        clock.try_set(clock_now());
    })));
    on_cleanup(move || {
        let _ = interval.try_update_value(|slot| slot.take());
    });

    view! {
        <div class="min-h-[calc(100vh-100px)] flex items-center justify-center p-6 mt-14 md:mt-0">
            <div class="text-center max-w-2xl">
                <h1 class="text-2xl md:text-5xl font-bold text-success mb-6">
                    "Welcome to Bus Tracker Admin"
                </h1>
                <p class="text-base md:text-xl text-base-content/80 mb-10">
                    "Manage your transportation system efficiently and effectively"
                </p>
                <div class="w-32 h-1 bg-success mx-auto mb-6 rounded-full"></div>
                <div class="space-y-2 text-base-content/70">
                    <p>"Use the sidebar to navigate through different sections"</p>
                    <p>"Track buses, manage users, and monitor system performance"</p>
                    <p>"Everything you need is just a click away"</p>
                </div>
                <div class="mt-6 p-4 bg-neutral rounded-xl inline-block">
                    <div class="text-2xl font-mono text-success">{move || clock.get().0}</div>
                    <div class="text-sm text-neutral-content">{move || clock.get().1}</div>
                </div>
            </div>
        </div>
    }
}
