use contacts_core::domain::entities::contact::{Contact, ContactDraft};
use contacts_core::services::ContactPage;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of create and update requests; absent fields are empty strings
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub phone: String,
}

impl From<ContactRequest> for ContactDraft {
    fn from(request: ContactRequest) -> Self {
        ContactDraft::new(request.name, request.email, request.phone)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user_id: u64,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            user_id: contact.user_id,
        }
    }
}

/// Raw pagination query; values are parsed leniently
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListContactsQuery {
    pub page: Option<String>,
    #[serde(alias = "pageSize")]
    pub page_size: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactListResponse {
    pub contacts: Vec<ContactResponse>,
    pub total: u64,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

impl From<ContactPage> for ContactListResponse {
    fn from(page: ContactPage) -> Self {
        let pagination = page.pagination;
        Self {
            contacts: page.items.into_iter().map(ContactResponse::from).collect(),
            total: page.total,
            page: pagination.page,
            page_size: pagination.page_size,
        }
    }
}
