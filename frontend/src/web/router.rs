//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 守卫决策由核心库的 `guard` 给出，这里负责"监听 -> 验证 -> 写历史 -> 加载"。

use bus_admin::route::{AppRoute, RouteDecision, guard};
use bus_admin::session::AuthPhase;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(path: &str, use_push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if use_push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if result.is_err() {
        log::warn!("[Router] failed to update history for {}", path);
    }
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新，认证阶段以信号形式注入。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 用户请求的路由（守卫前）
    requested: RwSignal<AppRoute>,
    /// 认证阶段（注入的信号）
    phase: Signal<AuthPhase>,
}

impl RouterService {
    fn new(phase: Signal<AuthPhase>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        Self {
            requested: RwSignal::new(initial_route),
            phase,
        }
    }

    /// 当前应渲染的内容，每次读取都重新执行守卫
    pub fn decision(&self) -> RouteDecision {
        guard(self.requested.get(), self.phase.get())
    }

    /// 当前生效的路由（侧边栏高亮用）
    pub fn current_route(&self) -> Signal<AppRoute> {
        let requested = self.requested;
        let phase = self.phase;
        Signal::derive(move || match guard(requested.get(), phase.get()) {
            RouteDecision::Redirect(route) | RouteDecision::Render(route) => route,
            RouteDecision::Blank => requested.get(),
        })
    }

    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    pub fn navigate_to(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    /// **核心方法：导航与守卫**
    ///
    /// 被重定向时写入的是重定向目标，地址栏与页面保持一致。
    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        match guard(target, self.phase.get_untracked()) {
            RouteDecision::Redirect(redirect) => {
                log::info!("[Router] {} redirected to {}", target, redirect);
                write_history(redirect.to_path(), use_push);
                self.requested.set(redirect);
            }
            RouteDecision::Render(route) => {
                write_history(route.to_path(), use_push);
                self.requested.set(route);
            }
            // 会话尚未恢复：先记下目标，恢复完成后由 setup_auth_redirect 落地
            RouteDecision::Blank => {
                write_history(target.to_path(), use_push);
                self.requested.set(target);
            }
        }
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            router.navigate_to_route(AppRoute::from_path(&current_path()), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证阶段变化（恢复完成、登录、注销）时重新守卫当前路由
    fn setup_auth_redirect(&self) {
        let router = *self;
        Effect::new(move |_| {
            let phase = router.phase.get();
            let route = router.requested.get_untracked();
            if let RouteDecision::Redirect(redirect) = guard(route, phase) {
                log::info!("[Router] auth changed ({:?}), redirecting to {}", phase, redirect);
                write_history(redirect.to_path(), true);
                router.requested.set(redirect);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(phase: Signal<AuthPhase>) -> RouterService {
    let router = RouterService::new(phase);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 认证阶段信号
    phase: Signal<AuthPhase>,
    children: Children,
) -> impl IntoView {
    provide_router(phase);

    children()
}

/// 路由出口组件
///
/// 会话恢复前受保护路由渲染为空白，重定向由服务本身处理。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收已通过守卫的路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || match router.decision() {
        RouteDecision::Render(route) | RouteDecision::Redirect(route) => matcher(route),
        RouteDecision::Blank => ().into_any(),
    }
}

/// 站内链接，拦截点击改走路由服务
#[component]
pub fn Link(
    route: AppRoute,
    #[prop(into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate_to(route);
    };

    view! {
        <a href=route.to_path() class=move || class.get() on:click=on_click>
            {children()}
        </a>
    }
}
