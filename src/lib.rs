// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive CLI.
//
// Module responsibilities:
// - `session`: owns the stored credential (token, role, username) behind a
//   get/set/clear trait, with a file-backed store for real runs and an
//   in-memory one for tests.
// - `error`: the client's error taxonomy; session expiry is its own
//   variant so callers can route back to login.
// - `types`: serde models for the backend's wire formats.
// - `api`: the authenticated request pipeline and the operation wrappers
//   (login, register, complaint listing/submission/status updates, logout).
// - `ui`: the terminal menu flows, delegating everything to `api`.
//
// Keeping this separation makes it easier to test the API logic or
// replace the UI in the future (for example, adding a TUI or GUI).
pub mod api;
pub mod error;
pub mod session;
pub mod types;
pub mod ui;
