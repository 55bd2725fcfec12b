//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    /// Cart snapshots (keyed by user_id)
    pub const CARTS: &str = "carts";
    pub const CHAT_HISTORY: &str = "chat_history";
}
