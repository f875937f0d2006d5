//! 浏览器侧适配层
//!
//! 核心库只定义接口，这里用 gloo-* 与 web_sys 把它们接到浏览器上。

mod http;
pub mod router;
mod storage;
mod toast;

pub use http::GlooHttpClient;
pub use router::{Link, Router, RouterOutlet, use_router};
pub use storage::BrowserStorage;
pub use toast::{provide_toasts, use_toasts};
