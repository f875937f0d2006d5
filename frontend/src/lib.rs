//! 公交调度后台前端
//!
//! 采用 Context-Driven 的架构：
//! - `web::router`: 路由服务（守卫决策来自核心库）
//! - `auth`: 会话状态
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod buses;
    pub mod dashboard;
    pub mod forgot_password;
    pub mod layout;
    pub mod login;
    pub mod pagination;
    pub mod popup;
    pub mod profile;
    pub mod users;
}
pub(crate) mod web;

use crate::auth::{AuthContext, init_auth};
use crate::components::buses::BusesPage;
use crate::components::dashboard::DashboardPage;
use crate::components::forgot_password::ForgotPasswordPage;
use crate::components::layout::AdminLayout;
use crate::components::login::LoginPage;
use crate::components::popup::NotificationStack;
use crate::components::profile::ProfilePage;
use crate::components::users::UsersPage;

use bus_admin::config::{API_URL_ENV, AdminConfig};
use bus_admin::route::AppRoute;
use leptos::prelude::*;
use std::time::Duration;
use web::{Router, RouterOutlet, provide_toasts};

/// 构建时注入的 API 地址
fn load_config() -> AdminConfig {
    let config = AdminConfig::from_api_url(option_env!("BUS_ADMIN_API_URL"));
    log::debug!("{} = {}", API_URL_ENV, config.api_url);
    config
}

/// 路由匹配函数
///
/// 只会收到已通过守卫的路由。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        AppRoute::Dashboard => view! { <AdminLayout><DashboardPage /></AdminLayout> }.into_any(),
        AppRoute::Buses => view! { <AdminLayout><BusesPage /></AdminLayout> }.into_any(),
        AppRoute::Users => view! { <AdminLayout><UsersPage /></AdminLayout> }.into_any(),
        AppRoute::Profile => view! { <AdminLayout><ProfilePage /></AdminLayout> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    provide_toasts(Duration::from_millis(config.notification_ttl_ms));

    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new(config);
    provide_context(auth_ctx);

    // 2. 从 LocalStorage 恢复会话（只做一次）
    init_auth(&auth_ctx);

    // 3. 认证阶段信号注入路由服务
    let phase = auth_ctx.phase_signal();

    view! {
        <NotificationStack />
        <Router phase=phase>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
