use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

pub use date::Timestamp;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: u64,
    pub name: String,
}

/// 管理端用户
///
/// 由外部 API 持有，客户端只保存一份缓存副本（登录时写入 LocalStorage）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl User {
    /// 头像圆圈里显示的首字母，名字为空时为 `?`
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?')
    }

    /// 角色展示名（首字母大写），缺失时按普通用户处理
    pub fn role_label(&self) -> String {
        let name = self.role.as_ref().map(|r| r.name.as_str()).unwrap_or("user");
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => "User".to_string(),
        }
    }
}

/// 车辆记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bus {
    pub id: u64,
    pub bus_name: String,
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub license_plate: String,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Bus {
    pub fn status_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Inactive" }
    }

    /// 提取可提交的字段
    pub fn payload(&self) -> BusPayload {
        BusPayload {
            bus_name: self.bus_name.clone(),
            driver_name: self.driver_name.clone(),
            license_plate: self.license_plate.clone(),
            is_active: self.is_active,
        }
    }
}

/// 创建 / 更新车辆时提交的字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusPayload {
    pub bus_name: String,
    pub driver_name: String,
    pub license_plate: String,
    pub is_active: bool,
}

impl Default for BusPayload {
    fn default() -> Self {
        Self {
            bus_name: String::new(),
            driver_name: String::new(),
            license_plate: String::new(),
            is_active: true,
        }
    }
}

// =========================================================
// 响应外壳 (Response Envelopes)
// =========================================================

/// 部分接口把数据包在 `{ "data": ... }` 里，部分直接返回裸数据。
/// 在边界处统一解析，调用方只拿到 `T`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(data) => data,
        }
    }
}

/// 服务端分页结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
    pub total: u64,
}

/// 错误响应体，只关心 `message` 字段
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_accepts_wrapped_and_bare_lists() {
        let bus = json!({
            "id": 1, "bus_name": "A1", "driver_name": "Ann", "license_plate": "KA-01",
            "is_active": true, "created_at": "2025-01-15T10:00:00Z", "updated_at": "2025-01-15T10:00:00Z"
        });

        let wrapped: Envelope<Vec<Bus>> =
            serde_json::from_value(json!({ "data": [bus.clone()] })).unwrap();
        let bare: Envelope<Vec<Bus>> = serde_json::from_value(json!([bus])).unwrap();

        assert_eq!(wrapped.into_inner(), bare.into_inner());
    }

    #[test]
    fn user_labels() {
        let mut user: User = serde_json::from_value(json!({
            "id": 1, "name": "admin", "email": "a@b.com", "role": { "id": 1, "name": "admin" }
        }))
        .unwrap();
        assert_eq!(user.initial(), 'A');
        assert_eq!(user.role_label(), "Admin");

        user.name.clear();
        user.role = None;
        assert_eq!(user.initial(), '?');
        assert_eq!(user.role_label(), "User");
    }

    #[test]
    fn bus_status_label() {
        let mut bus = Bus {
            id: 7,
            bus_name: "Night Line".into(),
            driver_name: String::new(),
            license_plate: String::new(),
            is_active: true,
            created_at: String::new(),
            updated_at: String::new(),
        };
        assert_eq!(bus.status_label(), "Active");
        bus.is_active = false;
        assert_eq!(bus.status_label(), "Inactive");
    }
}
