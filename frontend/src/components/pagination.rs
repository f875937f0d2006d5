use leptos::prelude::*;

/// 列表底部：范围说明 + 上一页 / 页码 / 下一页
#[component]
pub fn PaginationFooter(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] last: Signal<u32>,
    on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row items-center justify-between gap-3 p-4 border-t border-base-200">
            <span class="text-sm text-base-content/70">{move || label.get()}</span>
            <div class="join">
                <button
                    class="join-item btn btn-sm"
                    disabled=move || current.get() <= 1
                    on:click=move |_| on_page.run(current.get_untracked().saturating_sub(1))
                >
                    "Previous"
                </button>
                {move || {
                    (1..=last.get())
                        .map(|page| {
                            let class = move || {
                                if current.get() == page {
                                    "join-item btn btn-sm btn-success"
                                } else {
                                    "join-item btn btn-sm"
                                }
                            };
                            view! {
                                <button class=class on:click=move |_| on_page.run(page)>
                                    {page}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="join-item btn btn-sm"
                    disabled=move || current.get() >= last.get()
                    on:click=move |_| on_page.run(current.get_untracked() + 1)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
