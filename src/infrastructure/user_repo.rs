use diesel::dsl::{exists, select};
use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::UserRepository;
use crate::domain::user::{RoleRecord, UserRecord};
use crate::schema::{roles, users};

use super::models::{NewUserRow, RoleRow, UserRow};

#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for DieselUserRepository {
    fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = users::table
            .inner_join(roles::table)
            .filter(users::email.eq(email))
            .select((UserRow::as_select(), RoleRow::as_select()))
            .first::<(UserRow, RoleRow)>(&mut conn)
            .optional()?;

        Ok(row.map(|(user, role)| UserRecord {
            id: user.id,
            email: user.email,
            password_hash: user.password_hash,
            role: role.name,
        }))
    }

    fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;
        let found: bool = select(exists(users::table.filter(users::email.eq(email))))
            .get_result(&mut conn)?;
        Ok(found)
    }

    fn find_role_by_name(&self, name: &str) -> Result<Option<RoleRecord>, DomainError> {
        let mut conn = self.pool.get()?;
        let row = roles::table
            .filter(roles::name.eq(name))
            .select(RoleRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(|role| RoleRecord {
            id: role.id,
            name: role.name,
        }))
    }

    fn create(
        &self,
        email: &str,
        password_hash: &str,
        role_id: Uuid,
    ) -> Result<Uuid, DomainError> {
        let mut conn = self.pool.get()?;
        let id = Uuid::new_v4();
        diesel::insert_into(users::table)
            .values(&NewUserRow {
                id,
                email: email.to_string(),
                password_hash: password_hash.to_string(),
                role_id,
            })
            .execute(&mut conn)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testutil::setup_db;

    #[tokio::test]
    async fn roles_are_seeded_by_migration() {
        let (_container, pool) = setup_db().await;
        let repo = DieselUserRepository::new(pool);

        let user_role = repo
            .find_role_by_name("USER")
            .expect("query failed")
            .expect("USER role should be seeded");
        assert_eq!(user_role.name, "USER");

        let admin_role = repo
            .find_role_by_name("ADMIN")
            .expect("query failed")
            .expect("ADMIN role should be seeded");
        assert_eq!(admin_role.name, "ADMIN");

        assert!(repo
            .find_role_by_name("SUPERVISOR")
            .expect("query failed")
            .is_none());
    }

    #[tokio::test]
    async fn create_and_find_by_email_roundtrip() {
        let (_container, pool) = setup_db().await;
        let repo = DieselUserRepository::new(pool);

        let role = repo
            .find_role_by_name("USER")
            .expect("query failed")
            .expect("seeded role");
        let id = repo
            .create("a@x.com", "$2b$04$hash", role.id)
            .expect("create failed");

        let user = repo
            .find_by_email("a@x.com")
            .expect("find failed")
            .expect("user should exist");
        assert_eq!(user.id, id);
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.password_hash, "$2b$04$hash");
        assert_eq!(user.role, "USER");

        assert!(repo.email_exists("a@x.com").expect("exists failed"));
        assert!(!repo.email_exists("b@x.com").expect("exists failed"));
    }

    #[tokio::test]
    async fn duplicate_email_insert_is_a_conflict() {
        let (_container, pool) = setup_db().await;
        let repo = DieselUserRepository::new(pool);

        let role = repo
            .find_role_by_name("USER")
            .expect("query failed")
            .expect("seeded role");
        repo.create("a@x.com", "h1", role.id).expect("create failed");

        let err = repo.create("a@x.com", "h2", role.id).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }
}
