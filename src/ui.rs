// UI layer: provides a simple interactive menu using `dialoguer`.
// The functions are small and synchronous to make the flow easy to follow.

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::types::{Complaint, ComplaintStatus, ComplaintType, NewComplaint, UserRole};
use anyhow::Result;
use dialoguer::{Confirm, Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// Main interactive menu. Receives an `ApiClient` instance and runs a
/// select loop until the user chooses "Exit". A session persisted by a
/// previous run is picked up automatically through the client's store.
///
/// Note: `Select::interact()` is keyboard-driven: you can use arrow keys
/// and Enter to choose an option.
pub fn main_menu(api: ApiClient) -> Result<()> {
    if let Some(c) = api.credential() {
        println!("Resuming session for {} ({})", c.username, c.role);
    }
    loop {
        let items = vec![
            "Register",
            "Login",
            "My complaints",
            "All complaints",
            "Submit complaint",
            "Update complaint status",
            "Logout",
            "Exit",
        ];
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => handle_register(&api)?,
            1 => handle_login(&api)?,
            2 => show_complaints(api.my_complaints()),
            3 => show_complaints(api.all_complaints()),
            4 => handle_submit(&api)?,
            5 => handle_update(&api)?,
            6 => {
                api.logout();
                println!("Logged out.");
            }
            7 => break,
            _ => {}
        }
    }
    Ok(())
}

/// Collect input fields for registration and call `ApiClient::register`.
fn handle_register(api: &ApiClient) -> Result<()> {
    let username: String = Input::new().with_prompt("Username").interact_text()?;
    // `Password` hides input in the terminal.
    let password: String = Password::new().with_prompt("Password").interact()?;
    let roles = [UserRole::User, UserRole::Employee];
    let role = roles[Select::new()
        .with_prompt("Role")
        .items(&["user", "employee"])
        .default(0)
        .interact()?];

    let pb = spinner("Registering...");
    let result = api.register(&username, &password, role);
    pb.finish_and_clear();

    match result {
        Ok(user) => println!("Registered {} as {}. Please login.", user.username, user.role),
        Err(e) => println!("Register failed: {}", e),
    }
    Ok(())
}

/// Collect credentials and perform login. The client persists the session
/// itself, so there is nothing to carry back out of here.
fn handle_login(api: &ApiClient) -> Result<()> {
    let username: String = Input::new().with_prompt("Username").interact_text()?;
    let password: String = Password::new().with_prompt("Password").interact()?;

    let pb = spinner("Logging in...");
    let result = api.login(&username, &password);
    pb.finish_and_clear();

    match result {
        Ok(c) => println!("Welcome {} ({})!", c.username, c.role),
        Err(e) => println!("Login failed: {}", e),
    }
    Ok(())
}

/// Collect the complaint fields and submit them as a multipart form.
fn handle_submit(api: &ApiClient) -> Result<()> {
    if api.credential().is_none() {
        println!("You should login first to submit a complaint.");
        return Ok(());
    }
    let location: String = Input::new()
        .with_prompt("Location (lat,long)")
        .interact_text()?;
    let road_name: String = Input::new()
        .with_prompt("Road name (optional)")
        .allow_empty(true)
        .interact_text()?;
    let kinds = [ComplaintType::Manual, ComplaintType::Automated];
    let kind = kinds[Select::new()
        .with_prompt("Type")
        .items(&["manual", "automated"])
        .default(0)
        .interact()?];
    // Automated complaints are analyzed server-side, which needs footage.
    let video = if Confirm::new().with_prompt("Attach a video?").interact()? {
        let path: String = Input::new().with_prompt("Video file path").interact_text()?;
        Some(PathBuf::from(path))
    } else {
        None
    };

    let complaint = NewComplaint {
        location,
        road_name: if road_name.is_empty() {
            None
        } else {
            Some(road_name)
        },
        kind,
        video,
    };

    let pb = spinner("Submitting...");
    let result = api.submit_complaint(&complaint);
    pb.finish_and_clear();

    match result {
        Ok(c) => println!("Submitted complaint #{} (status: {})", c.id, c.status),
        Err(e) => report_error(e),
    }
    Ok(())
}

/// Pick a complaint id and a new status, then call the update endpoint.
fn handle_update(api: &ApiClient) -> Result<()> {
    let id: i64 = Input::new().with_prompt("Complaint id").interact_text()?;
    let labels: Vec<&str> = ComplaintStatus::ALL.iter().map(|s| s.as_str()).collect();
    let status = ComplaintStatus::ALL[Select::new()
        .with_prompt("New status")
        .items(&labels)
        .default(0)
        .interact()?];

    let pb = spinner("Updating...");
    let result = api.update_status(id, status);
    pb.finish_and_clear();

    match result {
        Ok(c) => println!("Complaint #{} is now {}", c.id, c.status),
        Err(e) => report_error(e),
    }
    Ok(())
}

fn show_complaints(result: Result<Vec<Complaint>, ApiError>) {
    match result {
        Ok(list) if list.is_empty() => println!("No complaints found."),
        Ok(list) => {
            for c in &list {
                print_complaint(c);
            }
        }
        Err(e) => report_error(e),
    }
}

fn print_complaint(c: &Complaint) {
    println!("#{} [{}] {} at {}", c.id, c.status, c.kind, c.location);
    if let Some(road) = &c.road_name {
        println!("    road: {}", road);
    }
    if c.priority_score > 0.0 {
        println!("    priority: {:.2}", c.priority_score);
    }
    if !c.potholes.is_empty() {
        println!("    detections: {}", c.potholes.len());
    }
}

// The browser original navigated to the login page at this point; the CLI
// tells the user and drops back to the menu instead.
fn report_error(e: ApiError) {
    match e {
        ApiError::AuthExpired => println!("Session expired, please login again."),
        other => println!("{}", other),
    }
}

/// Spinner shown while a blocking API call is in flight.
fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
