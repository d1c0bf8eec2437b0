//! MySQL implementation of the ContactRepository trait.
//!
//! Every statement filters on both `id` and `user_id`.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use contacts_core::domain::entities::contact::{Contact, ContactDraft};
use contacts_core::errors::DomainError;
use contacts_core::repositories::ContactRepository;

use super::column;
use crate::InfrastructureError;

/// MySQL implementation of ContactRepository
pub struct MySqlContactRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlContactRepository {
    /// Create a new MySQL contact repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_contact(row: &sqlx::mysql::MySqlRow) -> Result<Contact, DomainError> {
        Ok(Contact {
            id: column(row, "id")?,
            name: column(row, "name")?,
            email: column(row, "email")?,
            phone: column(row, "phone")?,
            user_id: column(row, "user_id")?,
        })
    }
}

#[async_trait]
impl ContactRepository for MySqlContactRepository {
    async fn create(&self, owner_id: u64, draft: ContactDraft) -> Result<Contact, DomainError> {
        let query = r#"
            INSERT INTO contacts (name, email, phone, user_id)
            VALUES (?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&draft.name)
            .bind(&draft.email)
            .bind(&draft.phone)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(Contact::from_draft(result.last_insert_id(), owner_id, draft))
    }

    async fn find_owned(&self, id: u64, owner_id: u64) -> Result<Option<Contact>, DomainError> {
        let query = r#"
            SELECT id, name, email, phone, user_id
            FROM contacts
            WHERE id = ? AND user_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_contact(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_owned(
        &self,
        owner_id: u64,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Contact>, DomainError> {
        let query = r#"
            SELECT id, name, email, phone, user_id
            FROM contacts
            WHERE user_id = ?
            ORDER BY id
            LIMIT ? OFFSET ?
        "#;

        let rows = sqlx::query(query)
            .bind(owner_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        rows.iter().map(Self::row_to_contact).collect()
    }

    async fn count_owned(&self, owner_id: u64) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM contacts WHERE user_id = ?")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        let total: i64 = row.try_get("total").map_err(|e| DomainError::Internal {
            message: format!("Failed to get total: {}", e),
        })?;

        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn update_owned(
        &self,
        id: u64,
        owner_id: u64,
        draft: &ContactDraft,
    ) -> Result<Option<Contact>, DomainError> {
        let query = r#"
            UPDATE contacts
            SET name = ?, email = ?, phone = ?
            WHERE id = ? AND user_id = ?
        "#;

        sqlx::query(query)
            .bind(&draft.name)
            .bind(&draft.email)
            .bind(&draft.phone)
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        // MySQL reports unchanged rows as unaffected, so read the row back
        self.find_owned(id, owner_id).await
    }

    async fn delete_owned(&self, id: u64, owner_id: u64) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(result.rows_affected())
    }
}
