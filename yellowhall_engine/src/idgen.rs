//! ** idgen module **
//! Namespace and helper for generating stable v5 uuids for items loaded from world data.
use uuid::Uuid;

pub const NAMESPACE_ITEM: Uuid = uuid::uuid!("47d2aad8-22cc-4dd4-bf9f-b9eddc4fe2cf");

/// Generate a v5 UUID for a given token id from the world data file.
pub fn uuid_from_token(namespace: &Uuid, token: &str) -> Uuid {
    Uuid::new_v5(namespace, token.as_bytes())
}
