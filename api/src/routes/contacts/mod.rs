//! Contact endpoints, all behind `JwtAuth` and scoped to the caller

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use create::create_contact;
pub use delete::delete_contact;
pub use get::get_contact;
pub use list::list_contacts;
pub use update::update_contact;
