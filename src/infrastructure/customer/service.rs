//! Customer service - business rules over the customer repository

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::customer::{
    Customer, CustomerDetails, CustomerId, CustomerRepository, validate_customer,
};
use crate::domain::user::UserId;
use crate::domain::{DataResult, DomainError, OpResult, rules};

/// Failure message when the user already owns a customer account
pub const MSG_ACCOUNT_ALREADY_EXISTS: &str = "Zaten bir müşteri hesabınız bulunmaktadır.";
/// Failure message when deleting a customer that does not exist
pub const MSG_USER_NOT_FOUND: &str = "Kullanıcı bulunamadı.";
/// Failure message when the store holds no customers at all
pub const MSG_NO_REGISTERED_CUSTOMERS: &str = "Kayıtlı müşteri bulunmamaktadır.";
/// Failure message when a fetch finds no customer for the given parameter
pub const MSG_CUSTOMER_NOT_FOUND_FOR_PARAMETER: &str =
    "Verilen parametrede bir müşteri bulunamadı.";
/// Generic failure message when an update produced no record
pub const MSG_GENERIC_ERROR: &str = "Bir hata oluştu.";

/// Failure message for an existence probe that found no value
fn msg_no_value_found(id: impl std::fmt::Display) -> String {
    format!("Verilen parametrede {id} değer bulunamadı!")
}

/// Customer manager
///
/// Every operation reports business outcomes through [`OpResult`] /
/// [`DataResult`]; an `Err` escaping these methods is an infrastructure
/// fault and is deliberately left for the caller to handle.
#[derive(Debug)]
pub struct CustomerService<R: CustomerRepository> {
    repository: Arc<R>,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Create a new customer service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a new customer account
    ///
    /// Validates the entity, enforces one customer per user account, then
    /// persists. The uniqueness check and the insert are two separate
    /// calls; concurrent adds for the same user can race through the gap.
    pub async fn add(&self, customer: Customer) -> Result<DataResult<Customer>, DomainError> {
        info!(customer_id = %customer.id(), user_id = %customer.user_id(), "Adding customer");

        if let Err(e) = validate_customer(&customer) {
            debug!(error = %e, "Customer validation rejected the entity");
            return Ok(DataResult::failure(e.to_string()));
        }

        if self.repository.exists_by_user_id(customer.user_id()).await? {
            return Ok(DataResult::failure(MSG_ACCOUNT_ALREADY_EXISTS));
        }

        let added = self.repository.add(customer).await?;
        Ok(DataResult::success(added))
    }

    /// Permanently delete a customer
    ///
    /// No soft-delete and no cascade; owned addresses are left to the
    /// persistence layer's own referential rules.
    pub async fn hard_delete(&self, customer: &Customer) -> Result<OpResult, DomainError> {
        info!(customer_id = %customer.id(), "Hard-deleting customer");

        if !self.repository.exists(customer.id()).await? {
            return Ok(OpResult::failure(MSG_USER_NOT_FOUND));
        }

        self.repository.delete(customer.id()).await?;
        Ok(OpResult::success())
    }

    /// Retrieve every registered customer
    ///
    /// An empty store is reported as a failure, not an empty success;
    /// callers tell "no data" from a real fault because faults arrive as
    /// `Err`, never as a failed result.
    pub async fn get_all(&self) -> Result<DataResult<Vec<Customer>>, DomainError> {
        let list = self.repository.get_all().await?;

        if list.is_empty() {
            return Ok(DataResult::failure(MSG_NO_REGISTERED_CUSTOMERS));
        }

        Ok(DataResult::success(list))
    }

    /// Fetch a customer by ID together with its addresses
    pub async fn get_by_id_with_addresses(
        &self,
        customer_id: CustomerId,
    ) -> Result<DataResult<CustomerDetails>, DomainError> {
        let checks = [self.check_customer_exist_by_id(&customer_id).await?];
        if let Some(failed) = rules::run(checks) {
            return Ok(DataResult::failure(failed.message().unwrap_or_default()));
        }

        let Some(details) = self.repository.get_with_addresses(&customer_id).await? else {
            // The existence rule just passed, so this branch is only
            // reachable when the record vanished in between.
            warn!(customer_id = %customer_id, "Customer disappeared between rule check and fetch");
            return Ok(DataResult::failure(MSG_CUSTOMER_NOT_FOUND_FOR_PARAMETER));
        };

        Ok(DataResult::success(details))
    }

    /// Update a customer
    pub async fn update(&self, customer: Customer) -> Result<DataResult<Customer>, DomainError> {
        info!(customer_id = %customer.id(), "Updating customer");

        let Some(updated) = self.repository.update(customer).await? else {
            return Ok(DataResult::failure(MSG_GENERIC_ERROR));
        };

        Ok(DataResult::success(updated))
    }

    /// Fetch a customer by user ID together with its user and addresses
    ///
    /// Unlike the by-id lookup there is no post-fetch check: once the
    /// existence rule passes, whatever the fetch returned is wrapped in a
    /// success result, payload or not.
    pub async fn get_by_user_id_with_addresses_and_user(
        &self,
        user_id: UserId,
    ) -> Result<DataResult<CustomerDetails>, DomainError> {
        let checks = [self.check_customer_exist_by_user_id(&user_id).await?];
        if let Some(failed) = rules::run(checks) {
            return Ok(DataResult::failure(failed.message().unwrap_or_default()));
        }

        let details = self
            .repository
            .get_by_user_id_with_addresses_and_user(&user_id)
            .await?;
        Ok(DataResult::success_opt(details))
    }

    async fn check_customer_exist_by_id(
        &self,
        customer_id: &CustomerId,
    ) -> Result<OpResult, DomainError> {
        if !self.repository.exists(customer_id).await? {
            return Ok(OpResult::failure(msg_no_value_found(customer_id)));
        }

        Ok(OpResult::success())
    }

    async fn check_customer_exist_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<OpResult, DomainError> {
        if !self.repository.exists_by_user_id(user_id).await? {
            return Ok(OpResult::failure(msg_no_value_found(user_id)));
        }

        Ok(OpResult::success())
    }
}
