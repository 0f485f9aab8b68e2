use crate::domain::errors::DomainError;
use crate::domain::ports::ProfileRepository;
use crate::domain::profile::{ProfileUpdate, ProfileView};
use crate::domain::user::CurrentUser;

pub struct ProfileService<P> {
    profiles: P,
}

impl<P: ProfileRepository> ProfileService<P> {
    pub fn new(profiles: P) -> Self {
        Self { profiles }
    }

    /// Fetches the user's profile, creating an empty one on first access.
    /// Idempotent after that first call.
    pub fn get_my_profile(&self, user: &CurrentUser) -> Result<ProfileView, DomainError> {
        let profile = match self.profiles.find_by_user_id(user.id)? {
            Some(p) => p,
            None => self.profiles.create_empty(user.id)?,
        };
        Ok(ProfileView::merge(user, profile))
    }

    /// Unlike reads, updates do not auto-create: a user who has never
    /// fetched their profile gets a 404 here. Matches the upstream policy;
    /// pinned by tests below.
    pub fn update_profile(
        &self,
        user: &CurrentUser,
        update: ProfileUpdate,
    ) -> Result<ProfileView, DomainError> {
        let profile = self
            .profiles
            .update_contact(user.id, &update)?
            .ok_or(DomainError::NotFound("Profile"))?;
        Ok(ProfileView::merge(user, profile))
    }
}
