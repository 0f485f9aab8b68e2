use uuid::Uuid;

/// A user row joined with its role name, as the repositories return it.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

#[derive(Debug, Clone)]
pub struct RoleRecord {
    pub id: Uuid,
    pub name: String,
}

/// The identity the boundary resolves from a verified bearer token and
/// threads into every workflow call. Workflows never read ambient state.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: String,
}

/// What `login` hands back to the client.
#[derive(Debug, Clone)]
pub struct AuthSuccess {
    pub token: String,
    pub email: String,
    pub role: String,
}
