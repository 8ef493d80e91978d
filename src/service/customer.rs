//! Customer Service
//!
//! Create, read, update and delete operations for customer records.

use std::sync::Arc;
use validator::Validate;

use crate::database::CustomerStore;
use crate::models::{Customer, CustomerRequest};
use crate::utils::{
    error::{AppError, AppResult},
    validation::format_validation_errors,
};

/// Result of a create-or-update call
#[derive(Debug, Clone)]
pub struct SavedCustomer {
    pub customer: Customer,

    /// True when a new row was inserted, false when an existing one was updated
    pub created: bool,
}

#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    /// Inserts when the request has no id, otherwise updates the existing customer
    pub async fn save_customer(&self, request: CustomerRequest) -> AppResult<SavedCustomer> {
        request
            .validate()
            .map_err(|e| AppError::Validation(format_validation_errors(&e)))?;

        let (id, fields) = request.into_parts();
        match id {
            None => {
                let customer = self.store.insert_customer(fields).await?;
                log::info!("Created customer {}", customer.id);
                Ok(SavedCustomer {
                    customer,
                    created: true,
                })
            }
            Some(id) => {
                let customer = self
                    .store
                    .update_customer(id, fields)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))?;
                log::info!("Updated customer {}", customer.id);
                Ok(SavedCustomer {
                    customer,
                    created: false,
                })
            }
        }
    }

    pub async fn get_customer(&self, id: i64) -> AppResult<Customer> {
        self.store
            .find_customer_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", id)))
    }

    pub async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        Ok(self.store.list_customers().await?)
    }

    /// Deleting an unknown id is not an error
    pub async fn delete_customer(&self, id: i64) -> AppResult<()> {
        if self.store.delete_customer(id).await? {
            log::info!("Deleted customer {}", id);
        } else {
            log::debug!("Delete requested for unknown customer {}", id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::store::MockCustomerStore;
    use crate::database::{MemoryStore, StoreError};

    fn service() -> CustomerService {
        CustomerService::new(Arc::new(MemoryStore::new()))
    }

    fn request(first_name: &str) -> CustomerRequest {
        CustomerRequest {
            first_name: Some(first_name.to_string()),
            email: Some(format!("{}@example.com", first_name.to_lowercase())),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_save_without_id_creates() {
        let service = service();
        let saved = service.save_customer(request("Jane")).await.unwrap();

        assert!(saved.created);
        assert_eq!(saved.customer.id, 1);
        assert_eq!(saved.customer.email.as_deref(), Some("jane@example.com"));
    }

    #[tokio::test]
    async fn test_save_with_existing_id_updates() {
        let service = service();
        let created = service.save_customer(request("Jane")).await.unwrap();

        let update = CustomerRequest {
            id: Some(created.customer.id),
            ..request("Janet")
        };
        let saved = service.save_customer(update).await.unwrap();

        assert!(!saved.created);
        assert_eq!(saved.customer.id, created.customer.id);
        assert_eq!(saved.customer.first_name.as_deref(), Some("Janet"));

        let fetched = service.get_customer(created.customer.id).await.unwrap();
        assert_eq!(fetched.first_name.as_deref(), Some("Janet"));
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_is_not_found() {
        let service = service();
        let update = CustomerRequest {
            id: Some(77),
            ..request("Ghost")
        };

        let result = service.save_customer(update).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(service.list_customers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_email() {
        let service = service();
        let bad = CustomerRequest {
            email: Some("not-an-email".into()),
            ..Default::default()
        };

        let result = service.save_customer(bad).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_list_delete() {
        let service = service();
        let jane = service.save_customer(request("Jane")).await.unwrap().customer;
        let john = service.save_customer(request("John")).await.unwrap().customer;

        let all = service.list_customers().await.unwrap();
        assert_eq!(
            all.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![jane.id, john.id]
        );

        service.delete_customer(jane.id).await.unwrap();
        assert!(matches!(
            service.get_customer(jane.id).await,
            Err(AppError::NotFound(_))
        ));

        // Second delete is a no-op
        assert!(service.delete_customer(jane.id).await.is_ok());
        assert_eq!(service.list_customers().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut store = MockCustomerStore::new();
        store
            .expect_list_customers()
            .returning(|| Err(StoreError::Unavailable("down".into())));

        let service = CustomerService::new(Arc::new(store));
        let result = service.list_customers().await;
        assert!(matches!(result, Err(AppError::Store(_))));
    }
}
