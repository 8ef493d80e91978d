//! In-Memory Store
//!
//! Process-local tables for development without PostgreSQL and for tests.
//! Ids are assigned sequentially per table starting at 1, mirroring `BIGSERIAL`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::store::{AttachmentStore, CustomerStore, StoreResult, UserStore};
use crate::models::{
    Attachment, Customer, CustomerFields, NewAttachment, NewUserAccount, UserAccountRecord,
};

#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, UserAccountRecord>,
    attachments: BTreeMap<i64, Attachment>,
    customers: BTreeMap<i64, Customer>,
    next_user_id: i64,
    next_attachment_id: i64,
    next_customer_id: i64,
}

fn next_id(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

/// Store keeping every table in memory behind a single lock
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored user accounts
    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    /// Number of stored attachments
    pub async fn attachment_count(&self) -> usize {
        self.tables.read().await.attachments.len()
    }

    pub async fn find_attachment_by_id(&self, id: i64) -> Option<Attachment> {
        self.tables.read().await.attachments.get(&id).cloned()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, user: NewUserAccount) -> StoreResult<UserAccountRecord> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let record = UserAccountRecord {
            id: next_id(&mut tables.next_user_id),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            password_encoded: user.password_encoded,
            contact_id: user.contact_id,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_user_by_id(&self, id: i64) -> StoreResult<Option<UserAccountRecord>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserAccountRecord>> {
        // BTreeMap iterates in id order, so the first hit is the oldest account
        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[async_trait]
impl AttachmentStore for MemoryStore {
    async fn insert_attachment(&self, attachment: NewAttachment) -> StoreResult<Attachment> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let stored = Attachment {
            id: next_id(&mut tables.next_attachment_id),
            file_name: attachment.file_name,
            file_type: attachment.file_type,
            data: attachment.data,
            created_at: now,
            updated_at: now,
        };
        tables.attachments.insert(stored.id, stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn insert_customer(&self, fields: CustomerFields) -> StoreResult<Customer> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let customer = Customer {
            id: next_id(&mut tables.next_customer_id),
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            phone: fields.phone,
            address: fields.address,
            created_at: now,
            updated_at: now,
        };
        tables.customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn update_customer(
        &self,
        id: i64,
        fields: CustomerFields,
    ) -> StoreResult<Option<Customer>> {
        let mut tables = self.tables.write().await;
        let Some(customer) = tables.customers.get_mut(&id) else {
            return Ok(None);
        };

        customer.first_name = fields.first_name;
        customer.last_name = fields.last_name;
        customer.email = fields.email;
        customer.phone = fields.phone;
        customer.address = fields.address;
        customer.updated_at = Utc::now();

        Ok(Some(customer.clone()))
    }

    async fn find_customer_by_id(&self, id: i64) -> StoreResult<Option<Customer>> {
        Ok(self.tables.read().await.customers.get(&id).cloned())
    }

    async fn list_customers(&self) -> StoreResult<Vec<Customer>> {
        Ok(self.tables.read().await.customers.values().cloned().collect())
    }

    async fn delete_customer(&self, id: i64) -> StoreResult<bool> {
        Ok(self.tables.write().await.customers.remove(&id).is_some())
    }
}
