use crate::{Bus, BusPayload, Envelope, Page, User};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// GET / DELETE 不携带请求体
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the bearer token must be attached.
    const AUTHENTICATED: bool = true;

    /// The URL path (with ids / query string filled in).
    fn path(&self) -> String;
}

/// 只确认成功、不关心内容的响应
pub type Ack = IgnoredAny;

// =========================================================
// Auth
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;

    fn path(&self) -> String {
        "/auth/login-admin".to_string()
    }
}

// =========================================================
// Buses
// =========================================================

/// List all buses
#[derive(Debug, Serialize, Deserialize)]
pub struct ListBuses;

impl ApiRequest for ListBuses {
    type Response = Envelope<Vec<Bus>>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/buses".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreateBus(pub BusPayload);

impl ApiRequest for CreateBus {
    type Response = Envelope<Bus>;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/buses".to_string()
    }
}

/// 更新车辆（状态切换也走这里）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBus {
    #[serde(skip)]
    pub id: u64,
    #[serde(flatten)]
    pub payload: BusPayload,
}

impl ApiRequest for UpdateBus {
    type Response = Envelope<Bus>;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/buses/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteBus {
    #[serde(skip)]
    pub id: u64,
}

impl ApiRequest for DeleteBus {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/buses/{}", self.id)
    }
}

// =========================================================
// Users
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsers {
    #[serde(skip)]
    pub page: u32,
}

/// `{ "data": { "data": [...], "current_page": .., "last_page": .., "total": .. } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersPage {
    pub data: Page<User>,
}

impl ApiRequest for ListUsers {
    type Response = UsersPage;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/bta/users?page={}", self.page)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUser {
    #[serde(skip)]
    pub id: u64,
}

impl ApiRequest for DeleteUser {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/bta/users/{}", self.id)
    }
}

// =========================================================
// Profile & Password
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    pub name: String,
    pub email: String,
}

impl ApiRequest for UpdateProfile {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/update/info".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePassword {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirmation: String,
}

impl ApiRequest for ChangePassword {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/bta/direct/password".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPassword {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetToken {
    pub token: String,
}

impl ApiRequest for ForgotPassword {
    type Response = ResetToken;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;

    fn path(&self) -> String {
        "/update/forgot-password".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPassword {
    pub token: String,
    pub password: String,
    pub password_confirmation: String,
}

impl ApiRequest for ResetPassword {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;

    fn path(&self) -> String {
        "/update/reset-password".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_bus_serializes_payload_only() {
        let req = UpdateBus {
            id: 42,
            payload: BusPayload {
                bus_name: "Express".into(),
                driver_name: "Bo".into(),
                license_plate: "XY-9".into(),
                is_active: false,
            },
        };

        assert_eq!(req.path(), "/buses/42");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "bus_name": "Express", "driver_name": "Bo", "license_plate": "XY-9", "is_active": false })
        );
    }

    #[test]
    fn paths_carry_ids_and_pages() {
        assert_eq!(ListUsers { page: 3 }.path(), "/bta/users?page=3");
        assert_eq!(DeleteUser { id: 9 }.path(), "/bta/users/9");
        assert_eq!(DeleteBus { id: 5 }.path(), "/buses/5");
        assert!(!LoginRequest::AUTHENTICATED);
        assert!(ListBuses::AUTHENTICATED);
    }
}
