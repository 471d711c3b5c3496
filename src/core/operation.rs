//! Unified Operation Model
//!
//! Every product route becomes one of these before entering the pipeline.

use axum::body::Bytes;

use crate::rest_api::ListQuery;

/// All product operations route through this enum
#[derive(Debug, Clone)]
pub enum Operation {
    /// Filtered, paginated listing
    List(ListQuery),

    /// Single record by identifier
    Get { id: String },

    /// Counts per category
    Stats,

    /// New record from a raw JSON body
    Create { body: Bytes },

    /// Overwrite a record from a raw JSON body
    Replace { id: String, body: Bytes },

    /// Remove a record
    Delete { id: String },
}

impl Operation {
    /// Get operation name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::Get { .. } => "get",
            Self::Stats => "stats",
            Self::Create { .. } => "create",
            Self::Replace { .. } => "replace",
            Self::Delete { .. } => "delete",
        }
    }

    /// Raw body of operations that carry a product
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            Self::Create { body } | Self::Replace { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether this operation changes the store
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::Create { .. } | Self::Replace { .. } | Self::Delete { .. }
        )
    }
}
