// Wire formats shared with the backend. Field names and enum spellings
// mirror the server's schemas; serde renames cover the places where the
// backend's names collide with Rust keywords.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Login payload for `POST /auth/token`.
#[derive(Serialize, Debug)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Registration payload for `POST /auth/register`.
#[derive(Serialize, Debug)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub role: UserRole,
}

/// Successful login response. `token_type` is always "bearer" and some
/// deployments omit it, so it is defaulted rather than required.
#[derive(Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub role: String,
    pub username: String,
}

/// Registration result (`UserOut` on the backend).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserOut {
    pub id: i64,
    pub username: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Employee,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Employee => "employee",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complaint record as returned by the backend. `automated` submissions
/// with a video may already carry pothole detections and a priority score
/// computed server-side.
#[derive(Deserialize, Debug, Clone)]
pub struct Complaint {
    pub id: i64,
    pub user_id: i64,
    pub location: String,
    pub road_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: ComplaintType,
    pub status: ComplaintStatus,
    pub video_path: Option<String>,
    pub priority_score: f64,
    pub created_at: String,
    #[serde(default)]
    pub potholes: Vec<Pothole>,
}

/// One pothole detected in a submitted video.
#[derive(Deserialize, Debug, Clone)]
pub struct Pothole {
    pub id: i64,
    pub severity: f64,
    pub confidence: f64,
    pub frame_timestamp: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintStatus {
    Pending,
    Approved,
    Rejected,
    Fixed,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 4] = [
        ComplaintStatus::Pending,
        ComplaintStatus::Approved,
        ComplaintStatus::Rejected,
        ComplaintStatus::Fixed,
    ];

    /// The exact lowercase spelling the backend expects. Also what goes
    /// into the status query parameter, which keeps it URL-safe.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::Approved => "approved",
            ComplaintStatus::Rejected => "rejected",
            ComplaintStatus::Fixed => "fixed",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintType {
    Manual,
    Automated,
}

impl ComplaintType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintType::Manual => "manual",
            ComplaintType::Automated => "automated",
        }
    }
}

impl fmt::Display for ComplaintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complaint to be submitted. Sent as a multipart form; the optional
/// video is streamed from disk.
#[derive(Debug, Clone)]
pub struct NewComplaint {
    pub location: String,
    pub road_name: Option<String>,
    pub kind: ComplaintType,
    pub video: Option<PathBuf>,
}
