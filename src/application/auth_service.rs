use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::ports::UserRepository;
use crate::domain::user::AuthSuccess;
use crate::security::password::PasswordHasher;
use crate::security::token::TokenService;

/// Every registration lands in this role; the registry is seeded by
/// migration and never written by the workflows.
pub const DEFAULT_ROLE: &str = "USER";

pub struct AuthService<R, H> {
    users: R,
    hasher: H,
    tokens: Arc<TokenService>,
}

impl<R: UserRepository, H: PasswordHasher> AuthService<R, H> {
    pub fn new(users: R, hasher: H, tokens: Arc<TokenService>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Creates a user with the default role. No token is issued here;
    /// login is a separate step.
    pub fn register(&self, email: &str, password: &str) -> Result<(), DomainError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::Validation("a valid email is required".into()));
        }
        if password.is_empty() {
            return Err(DomainError::Validation("a password is required".into()));
        }
        if self.users.email_exists(email)? {
            return Err(DomainError::Conflict("Email already registered".into()));
        }
        let role = self.users.find_role_by_name(DEFAULT_ROLE)?.ok_or_else(|| {
            DomainError::Configuration(format!("default role {DEFAULT_ROLE} is not seeded"))
        })?;
        let password_hash = self.hasher.hash(password)?;
        self.users.create(email, &password_hash, role.id)?;
        Ok(())
    }

    /// An unknown email and a wrong password fail identically so the
    /// response never reveals which check tripped.
    pub fn login(&self, email: &str, password: &str) -> Result<AuthSuccess, DomainError> {
        let user = self
            .users
            .find_by_email(email)?
            .ok_or(DomainError::Authentication)?;
        if !self.hasher.verify(password, &user.password_hash) {
            return Err(DomainError::Authentication);
        }
        let token = self.tokens.issue(&user.email, &user.role)?;
        Ok(AuthSuccess {
            token,
            email: user.email,
            role: user.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::Duration;
    use uuid::Uuid;

    use super::*;
    use crate::domain::user::{RoleRecord, UserRecord};
    use crate::security::password::BcryptHasher;

    #[derive(Default)]
    struct Store {
        roles: Vec<RoleRecord>,
        users: Vec<UserRecord>,
    }

    #[derive(Clone, Default)]
    struct InMemoryUsers {
        store: Arc<Mutex<Store>>,
    }

    impl InMemoryUsers {
        fn with_default_role() -> Self {
            let repo = Self::default();
            repo.store.lock().unwrap().roles.push(RoleRecord {
                id: Uuid::new_v4(),
                name: DEFAULT_ROLE.to_string(),
            });
            repo
        }

        fn user_count(&self) -> usize {
            self.store.lock().unwrap().users.len()
        }
    }

    impl UserRepository for InMemoryUsers {
        fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError> {
            Ok(self
                .store
                .lock()
                .unwrap()
                .users
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
            Ok(self.find_by_email(email)?.is_some())
        }

        fn find_role_by_name(&self, name: &str) -> Result<Option<RoleRecord>, DomainError> {
            Ok(self
                .store
                .lock()
                .unwrap()
                .roles
                .iter()
                .find(|r| r.name == name)
                .cloned())
        }

        fn create(
            &self,
            email: &str,
            password_hash: &str,
            role_id: Uuid,
        ) -> Result<Uuid, DomainError> {
            let mut store = self.store.lock().unwrap();
            let role = store
                .roles
                .iter()
                .find(|r| r.id == role_id)
                .expect("unknown role id")
                .name
                .clone();
            let id = Uuid::new_v4();
            store.users.push(UserRecord {
                id,
                email: email.to_string(),
                password_hash: password_hash.to_string(),
                role,
            });
            Ok(id)
        }
    }

    fn service(users: InMemoryUsers) -> AuthService<InMemoryUsers, BcryptHasher> {
        let tokens = Arc::new(TokenService::new(b"unit-test-secret", Duration::hours(24)));
        AuthService::new(users, BcryptHasher::new(4), tokens)
    }

    #[test]
    fn register_then_login_round_trips() {
        let users = InMemoryUsers::with_default_role();
        let svc = service(users);

        svc.register("a@x.com", "pw").expect("register failed");
        let auth = svc.login("a@x.com", "pw").expect("login failed");

        assert_eq!(auth.email, "a@x.com");
        assert_eq!(auth.role, "USER");
        assert!(!auth.token.is_empty());
    }

    #[test]
    fn issued_token_carries_subject_and_role() {
        let users = InMemoryUsers::with_default_role();
        let tokens = Arc::new(TokenService::new(b"unit-test-secret", Duration::hours(24)));
        let svc = AuthService::new(users, BcryptHasher::new(4), Arc::clone(&tokens));

        svc.register("a@x.com", "pw").expect("register failed");
        let auth = svc.login("a@x.com", "pw").expect("login failed");

        let claims = tokens.verify(&auth.token).expect("token should verify");
        assert_eq!(claims.sub, "a@x.com");
        assert_eq!(claims.role, "USER");
    }

    #[test]
    fn duplicate_registration_conflicts_and_keeps_the_first_user() {
        let users = InMemoryUsers::with_default_role();
        let svc = service(users.clone());

        svc.register("a@x.com", "first-pw").expect("register failed");
        let err = svc.register("a@x.com", "second-pw").unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(users.user_count(), 1);
        // The original credentials still work.
        svc.login("a@x.com", "first-pw").expect("login failed");
    }

    #[test]
    fn login_failures_are_indistinguishable() {
        let users = InMemoryUsers::with_default_role();
        let svc = service(users);
        svc.register("a@x.com", "pw").expect("register failed");

        let wrong_password = svc.login("a@x.com", "nope").unwrap_err();
        let unknown_email = svc.login("nobody@x.com", "pw").unwrap_err();

        assert!(matches!(wrong_password, DomainError::Authentication));
        assert!(matches!(unknown_email, DomainError::Authentication));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[test]
    fn register_rejects_blank_input() {
        let svc = service(InMemoryUsers::with_default_role());
        assert!(matches!(
            svc.register("", "pw").unwrap_err(),
            DomainError::Validation(_)
        ));
        assert!(matches!(
            svc.register("not-an-email", "pw").unwrap_err(),
            DomainError::Validation(_)
        ));
        assert!(matches!(
            svc.register("a@x.com", "").unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn missing_default_role_is_a_configuration_error() {
        // No roles seeded at all.
        let svc = service(InMemoryUsers::default());
        let err = svc.register("a@x.com", "pw").unwrap_err();
        assert!(matches!(err, DomainError::Configuration(_)));
    }
}
