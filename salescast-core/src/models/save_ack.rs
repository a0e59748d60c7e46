use serde::{Deserialize, Serialize};

/// Acknowledgement returned by the archive after a successful save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveAck {
    /// Server-assigned record id, when the store reports one.
    #[serde(default)]
    pub id: Option<u64>,
    /// Free-form confirmation message.
    #[serde(default)]
    pub message: Option<String>,
}
