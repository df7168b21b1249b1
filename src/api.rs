// API client module: a small blocking HTTP client for the complaint
// backend. Every authenticated call funnels through `authorized` + `send`,
// which attach the bearer token and handle session expiry in one place so
// the operation wrappers never re-check for a 401 themselves.

use crate::error::ApiError;
use crate::session::{Credential, FileStore, SessionStore};
use crate::types::{
    Complaint, ComplaintStatus, LoginRequest, NewComplaint, RegisterRequest, TokenResponse,
    UserOut, UserRole,
};
use reqwest::blocking::{multipart, Client, RequestBuilder, Response};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, StatusCode};
use std::sync::Arc;

/// Fallback origin; override with the `ROADWATCH_API_URL` environment
/// variable.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client for the complaint API. Holds a reqwest blocking client, the
/// backend origin and the session store the bearer token is read from.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Client configured from `ROADWATCH_API_URL` (or the default origin),
    /// with the session persisted in the user's home directory.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url =
            std::env::var("ROADWATCH_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(base_url, Arc::new(FileStore::new()))
    }

    /// Client against `base_url` using the given session store. Tests pass
    /// an in-memory store here.
    pub fn new(
        base_url: impl Into<String>,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(ApiClient {
            client,
            base_url,
            store,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current session, if any.
    pub fn credential(&self) -> Option<Credential> {
        self.store.get()
    }

    /// Build a request for `path` with the bearer token attached when a
    /// session exists; without one the request goes out unauthenticated.
    /// Anything the wrapper layers on afterwards (JSON body, multipart
    /// form, extra headers) wins over what is set here, except that no
    /// wrapper sets Authorization itself.
    fn authorized(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, url);
        if let Some(c) = self.store.get() {
            req = req.header(AUTHORIZATION, format!("Bearer {}", c.token));
        }
        req
    }

    /// Dispatch exactly one request, no retries. A 401 invalidates the
    /// session before the error reaches the caller; this is the only path
    /// that mutates session state. Every other status passes through for
    /// the wrapper to judge.
    fn send(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let res = req.send()?;
        if res.status() == StatusCode::UNAUTHORIZED {
            self.store.clear();
            return Err(ApiError::AuthExpired);
        }
        Ok(res)
    }

    /// Log in and persist the resulting credential. Sent unauthenticated
    /// and outside the 401 pipeline: a 401 here means wrong password, not
    /// an expired session.
    pub fn login(&self, username: &str, password: &str) -> Result<Credential, ApiError> {
        let url = format!("{}/auth/token", self.base_url);
        let res = self
            .client
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()?;
        if !res.status().is_success() {
            return Err(failure(res, "Login failed"));
        }
        let token: TokenResponse = res.json()?;
        let credential = Credential {
            token: token.access_token,
            role: token.role,
            username: token.username,
        };
        self.store.set(&credential);
        Ok(credential)
    }

    /// Register a new user. No session mutation; the caller logs in
    /// afterwards.
    pub fn register(
        &self,
        username: &str,
        password: &str,
        role: UserRole,
    ) -> Result<UserOut, ApiError> {
        let url = format!("{}/auth/register", self.base_url);
        let res = self
            .client
            .post(&url)
            .json(&RegisterRequest {
                username,
                password,
                role,
            })
            .send()?;
        if !res.status().is_success() {
            return Err(failure(res, "Registration failed"));
        }
        Ok(res.json()?)
    }

    /// Drop the stored credential. No network call; safe to call with no
    /// session.
    pub fn logout(&self) {
        self.store.clear();
    }

    /// Complaints submitted by the logged-in user.
    pub fn my_complaints(&self) -> Result<Vec<Complaint>, ApiError> {
        let res = self.send(self.authorized(Method::GET, "/complaints/my"))?;
        Ok(expect_success(res, "Could not load complaints")?.json()?)
    }

    /// Every complaint in the system. The backend restricts this to the
    /// employee role; a 403 surfaces like any other failure.
    pub fn all_complaints(&self) -> Result<Vec<Complaint>, ApiError> {
        let res = self.send(self.authorized(Method::GET, "/complaints/all"))?;
        Ok(expect_success(res, "Could not load complaints")?.json()?)
    }

    /// Submit a complaint as a multipart form, streaming the video from
    /// disk when one is attached. The multipart transport sets its own
    /// content type.
    pub fn submit_complaint(&self, complaint: &NewComplaint) -> Result<Complaint, ApiError> {
        let mut form = multipart::Form::new()
            .text("location", complaint.location.clone())
            .text("type", complaint.kind.as_str());
        if let Some(road) = &complaint.road_name {
            form = form.text("road_name", road.clone());
        }
        if let Some(path) = &complaint.video {
            form = form.file("video", path)?;
        }

        let res = self.send(self.authorized(Method::POST, "/complaints/").multipart(form))?;
        Ok(expect_success(res, "Submission failed")?.json()?)
    }

    /// Change a complaint's status. The status travels as a query
    /// parameter; the enum's fixed spellings keep it URL-safe.
    pub fn update_status(&self, id: i64, status: ComplaintStatus) -> Result<Complaint, ApiError> {
        let path = format!("/complaints/{}/status?status={}", id, status.as_str());
        let res = self.send(self.authorized(Method::PUT, &path))?;
        Ok(expect_success(res, "Update failed")?.json()?)
    }
}

/// Complaint endpoints report failures with a fixed message; their bodies
/// are not inspected.
fn expect_success(res: Response, message: &str) -> Result<Response, ApiError> {
    let status = res.status();
    if status.is_success() {
        Ok(res)
    } else {
        Err(ApiError::RequestFailed {
            status: status.as_u16(),
            message: message.to_string(),
        })
    }
}

/// Auth endpoints explain failures in their body. Consume the response and
/// build the richest message available.
fn failure(res: Response, default: &str) -> ApiError {
    let status = res.status().as_u16();
    let body = res.text().unwrap_or_default();
    ApiError::RequestFailed {
        status,
        message: failure_message(&body, default),
    }
}

/// Message fallback chain: the `detail` field of a JSON error body, else
/// the raw body text, else the operation's default. The upstream web
/// client only ran the full chain for login and parsed registration
/// errors strictly; both paths share the robust version here.
fn failure_message(body: &str, default: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            if !detail.is_empty() {
                return detail.to_string();
            }
        }
        return default.to_string();
    }
    if body.trim().is_empty() {
        default.to_string()
    } else {
        body.to_string()
    }
}
