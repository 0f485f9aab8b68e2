use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::user::CurrentUser;

/// One profile row. Contact fields stay empty until the first update;
/// `updated_at` stays `None` until then too.
#[derive(Debug, Clone)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Full overwrite of the contact fields.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub phone: String,
    pub address: String,
}

/// The merged view returned to clients: identity fields from the
/// authenticated user, contact fields and timestamps from the profile row.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProfileView {
    pub fn merge(user: &CurrentUser, profile: ProfileRecord) -> Self {
        Self {
            user_id: user.id,
            name: profile.full_name,
            email: user.email.clone(),
            phone: profile.phone,
            address: profile.address,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
