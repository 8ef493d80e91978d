//! PostgreSQL Store
//!
//! `sqlx` implementation of the store traits. Queries are checked at runtime so
//! the crate builds without a live database.

use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{AttachmentStore, CustomerStore, StoreResult, UserStore};
use crate::models::{
    Attachment, Customer, CustomerFields, NewAttachment, NewUserAccount, UserAccountRecord,
};

const USER_COLUMNS: &str =
    "id, first_name, last_name, email, password_encoded, contact_id, created_at, updated_at";

const CUSTOMER_COLUMNS: &str =
    "id, first_name, last_name, email, phone, address, created_at, updated_at";

/// Store backed by a PostgreSQL connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, user: NewUserAccount) -> StoreResult<UserAccountRecord> {
        let record = sqlx::query_as::<_, UserAccountRecord>(&format!(
            r#"
            INSERT INTO user_register (first_name, last_name, email, password_encoded, contact_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.first_name)
        .bind(user.last_name)
        .bind(user.email)
        .bind(user.password_encoded)
        .bind(user.contact_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_user_by_id(&self, id: i64) -> StoreResult<Option<UserAccountRecord>> {
        let record = sqlx::query_as::<_, UserAccountRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM user_register WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserAccountRecord>> {
        let record = sqlx::query_as::<_, UserAccountRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM user_register WHERE email = $1 ORDER BY id ASC LIMIT 1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl AttachmentStore for PgStore {
    async fn insert_attachment(&self, attachment: NewAttachment) -> StoreResult<Attachment> {
        let stored = sqlx::query_as::<_, Attachment>(
            r#"
            INSERT INTO files (file_name, file_type, data)
            VALUES ($1, $2, $3)
            RETURNING id, file_name, file_type, data, created_at, updated_at
            "#,
        )
        .bind(attachment.file_name)
        .bind(attachment.file_type)
        .bind(attachment.data)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }
}

#[async_trait]
impl CustomerStore for PgStore {
    async fn insert_customer(&self, fields: CustomerFields) -> StoreResult<Customer> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            r#"
            INSERT INTO customer (first_name, last_name, email, phone, address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(fields.first_name)
        .bind(fields.last_name)
        .bind(fields.email)
        .bind(fields.phone)
        .bind(fields.address)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn update_customer(
        &self,
        id: i64,
        fields: CustomerFields,
    ) -> StoreResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            r#"
            UPDATE customer
            SET first_name = $2, last_name = $3, email = $4, phone = $5, address = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(fields.first_name)
        .bind(fields.last_name)
        .bind(fields.email)
        .bind(fields.phone)
        .bind(fields.address)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn find_customer_by_id(&self, id: i64) -> StoreResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customer WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn list_customers(&self) -> StoreResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customer ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    async fn delete_customer(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM customer WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
