use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::ProfileRepository;
use crate::domain::profile::{ProfileRecord, ProfileUpdate};
use crate::schema::profiles;

use super::models::{NewProfileRow, ProfileRow};

#[derive(Clone)]
pub struct DieselProfileRepository {
    pool: DbPool,
}

impl DieselProfileRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_record(row: ProfileRow) -> ProfileRecord {
    ProfileRecord {
        id: row.id,
        user_id: row.user_id,
        full_name: row.full_name,
        phone: row.phone,
        address: row.address,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

impl ProfileRepository for DieselProfileRepository {
    fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<ProfileRecord>, DomainError> {
        let mut conn = self.pool.get()?;
        let row = profiles::table
            .filter(profiles::user_id.eq(user_id))
            .select(ProfileRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(to_record))
    }

    fn create_empty(&self, user_id: Uuid) -> Result<ProfileRecord, DomainError> {
        let mut conn = self.pool.get()?;
        let row = diesel::insert_into(profiles::table)
            .values(&NewProfileRow {
                id: Uuid::new_v4(),
                user_id,
            })
            .returning(ProfileRow::as_returning())
            .get_result(&mut conn)?;
        Ok(to_record(row))
    }

    fn update_contact(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<Option<ProfileRecord>, DomainError> {
        let mut conn = self.pool.get()?;
        let row = diesel::update(profiles::table.filter(profiles::user_id.eq(user_id)))
            .set((
                profiles::full_name.eq(update.full_name.as_str()),
                profiles::phone.eq(update.phone.as_str()),
                profiles::address.eq(update.address.as_str()),
                profiles::updated_at.eq(Utc::now()),
            ))
            .returning(ProfileRow::as_returning())
            .get_result(&mut conn)
            .optional()?;
        Ok(row.map(to_record))
    }
}
