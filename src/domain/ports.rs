use uuid::Uuid;

use super::errors::DomainError;
use super::order::{NewPlacedOrder, OrderSummary, OrderView};
use super::profile::{ProfileRecord, ProfileUpdate};
use super::user::{RoleRecord, UserRecord};

pub trait UserRepository: Send + Sync + 'static {
    fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError>;
    fn email_exists(&self, email: &str) -> Result<bool, DomainError>;
    fn find_role_by_name(&self, name: &str) -> Result<Option<RoleRecord>, DomainError>;
    fn create(&self, email: &str, password_hash: &str, role_id: Uuid)
        -> Result<Uuid, DomainError>;
}

pub trait ProfileRepository: Send + Sync + 'static {
    fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<ProfileRecord>, DomainError>;
    fn create_empty(&self, user_id: Uuid) -> Result<ProfileRecord, DomainError>;
    /// Overwrites the contact fields and refreshes `updated_at`. Returns
    /// `None` when the user has no profile row yet.
    fn update_contact(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<Option<ProfileRecord>, DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    /// Persists the order, its item snapshots and the initial tracking
    /// event as one atomic unit.
    fn create_placed(&self, user_id: Uuid, order: NewPlacedOrder) -> Result<Uuid, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError>;
    /// The user's orders, newest first, without their items.
    fn list_by_user(&self, user_id: Uuid) -> Result<Vec<OrderSummary>, DomainError>;
}
