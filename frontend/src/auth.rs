//! 认证模块
//!
//! 会话状态放在 signal 里，通过 Context 共享。
//! 路由服务只拿到派生出的认证阶段信号，与会话细节解耦。

use crate::web::{BrowserStorage, GlooHttpClient};
use bus_admin::api::AdminApi;
use bus_admin::config::AdminConfig;
use bus_admin::session::{AuthPhase, SessionStore};
use bus_admin_shared::User;
use leptos::prelude::*;

pub type Api = AdminApi<GlooHttpClient>;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<SessionStore<BrowserStorage>>,
    config: StoredValue<AdminConfig>,
}

impl AuthContext {
    pub fn new(config: AdminConfig) -> Self {
        Self {
            session: RwSignal::new(SessionStore::new(BrowserStorage)),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AdminConfig {
        self.config.get_value()
    }

    /// 认证阶段信号（用于路由服务注入）
    pub fn phase_signal(&self) -> Signal<AuthPhase> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.session().phase()))
    }

    /// 当前令牌，只在令牌变化时通知订阅者
    pub fn token_memo(&self) -> Memo<Option<String>> {
        let session = self.session;
        Memo::new(move |_| session.with(|s| s.token().map(str::to_owned)))
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user().cloned())
    }

    /// 绑定当前令牌的 API 客户端
    pub fn api(&self) -> Api {
        let base = AdminApi::new(GlooHttpClient, &self.config.with_value(|c| c.api_url.clone()));
        self.session.with_untracked(|s| s.bind(base))
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态：从 LocalStorage 恢复一次
pub fn init_auth(ctx: &AuthContext) {
    ctx.session.update(|s| s.restore());
}

/// 登录并保存状态
///
/// 失败时会话保持不变，调用方只拿到 `false`。
pub async fn login(ctx: &AuthContext, email: String, password: String) -> bool {
    let api = ctx.api();
    let mut store = ctx.session.get_untracked();
    if store.login(&api, &email, &password).await {
        ctx.session.set(store);
        true
    } else {
        false
    }
}

/// 注销并清除状态
///
/// 导航由路由服务监听认证阶段自动处理。
pub fn logout(ctx: &AuthContext) {
    ctx.session.update(|s| s.logout());
}
