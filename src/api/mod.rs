pub mod client;
pub mod error;
pub mod models;

use error::ApiError;
use models::{Contact, ContactDraft};

/// Remote operations the controller depends on. Implemented by
/// [`client::ApiClient`] and by in-memory fakes in tests.
#[allow(async_fn_in_trait)]
pub trait ContactsApi {
    async fn list_contacts(&self) -> Result<Vec<Contact>, ApiError>;
    async fn get_contact(&self, id: i64) -> Result<Contact, ApiError>;
    async fn create_contact(&self, draft: ContactDraft) -> Result<(), ApiError>;
    async fn update_contact(&self, id: i64, draft: ContactDraft) -> Result<(), ApiError>;
    async fn delete_contact(&self, id: i64) -> Result<(), ApiError>;
}
