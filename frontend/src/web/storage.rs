//! LocalStorage 封装模块
//!
//! 使用 `gloo-storage` 的原始 `web_sys::Storage` 句柄，
//! 令牌按原始字符串保存，用户资料由会话层序列化为 JSON 后保存。

use bus_admin::storage::KeyValueStore;
use gloo_storage::{LocalStorage, Storage};

/// 浏览器 LocalStorage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        LocalStorage::raw().set_item(key, value).is_ok()
    }

    fn remove(&self, key: &str) -> bool {
        LocalStorage::raw().remove_item(key).is_ok()
    }
}
