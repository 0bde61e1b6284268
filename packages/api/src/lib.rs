//! # API crate — shared fullstack server functions for Devfolio
//!
//! This crate is the backbone of the Devfolio fullstack architecture. It
//! defines every Dioxus server function the web frontend calls, along with
//! the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Local (email + password) authentication, session key, password hashing |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database models (`User`, `ProfileRow`) and their client-safe projections |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` or `#[post(...)]` and compiled twice: once with full
//! server logic (behind `#[cfg(feature = "server")]`) and once as a thin
//! client stub that simply forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `logout`, `register`, `login_password`
//! - **Profile gateway**: `get_profile` (point read by the session's owner id,
//!   `Ok(None)` when nothing is stored), `save_profile` (whole-record upsert
//!   that stamps `updated_at`)

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;

pub use models::UserInfo;
pub use profile::ProfileRecord;

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Register a new user with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();
    let name = name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }
    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Check if user already exists. SELECT 1 comes back as INT4.
    let existing: Option<(i32,)> =
        sqlx::query_as("SELECT 1 as n FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new("An account with this email already exists"));
    }

    let password_hash = auth::hash_password(&password)
        .map_err(|e| ServerFnError::new(e))?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, name, password_hash) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&email)
    .bind(&name)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login-password", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, &user.password_hash)
        .map_err(|e| ServerFnError::new(e))?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login-password")]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch the profile record for the current session's owner.
///
/// Returns `Ok(None)` both when nobody is signed in and when the owner has
/// not saved a record yet — absence is not an error. Display components call
/// this independently on mount and substitute sample content for `None`;
/// store failures propagate as `Err` so callers can show a non-fatal notice.
#[cfg(feature = "server")]
#[get("/api/profile", session: tower_sessions::Session)]
pub async fn get_profile() -> Result<Option<ProfileRecord>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ProfileRow;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<ProfileRow> = sqlx::query_as("SELECT * FROM profiles WHERE user_id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.map(|r| r.into_record()))
}

#[cfg(not(feature = "server"))]
#[get("/api/profile")]
pub async fn get_profile() -> Result<Option<ProfileRecord>, ServerFnError> {
    Ok(None)
}

/// Upsert the full profile record for the current session's owner.
///
/// Whole-record replace, not a field-level patch: the row is created on first
/// save and every column is overwritten on later saves, with `updated_at`
/// stamped server-side. Failure is reported to the caller and leaves the
/// caller's draft untouched.
#[cfg(feature = "server")]
#[post("/api/profile", session: tower_sessions::Session)]
pub async fn save_profile(record: ProfileRecord) -> Result<(), ServerFnError> {
    use crate::db::get_pool;
    use sqlx::types::Json;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO profiles (user_id, full_name, job_title, email, phone, birthday, location,
                               bio, avatar_url, github_url, linkedin_url, twitter_url, about_text,
                               skills, education, experience, projects)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
         ON CONFLICT (user_id) DO UPDATE SET
            full_name = $2,
            job_title = $3,
            email = $4,
            phone = $5,
            birthday = $6,
            location = $7,
            bio = $8,
            avatar_url = $9,
            github_url = $10,
            linkedin_url = $11,
            twitter_url = $12,
            about_text = $13,
            skills = $14,
            education = $15,
            experience = $16,
            projects = $17,
            updated_at = NOW()",
    )
    .bind(user_uuid)
    .bind(&record.full_name)
    .bind(&record.job_title)
    .bind(&record.email)
    .bind(&record.phone)
    .bind(&record.birthday)
    .bind(&record.location)
    .bind(&record.bio)
    .bind(&record.avatar_url)
    .bind(&record.github_url)
    .bind(&record.linkedin_url)
    .bind(&record.twitter_url)
    .bind(&record.about_text)
    .bind(Json(&record.skills))
    .bind(Json(&record.education))
    .bind(Json(&record.experience))
    .bind(Json(&record.projects))
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user = %user_uuid, "profile saved");

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/profile")]
pub async fn save_profile(record: ProfileRecord) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
