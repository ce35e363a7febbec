//! Session domain: the authenticated identity and its collaborator seams.

pub mod auth_channel;
pub mod credential_store;
pub mod model;

pub use auth_channel::AuthChannel;
pub use credential_store::CredentialStore;
pub use model::{AuthGrant, AuthToken, Credentials, Role, Session, StoredCredential, UserProfile};
