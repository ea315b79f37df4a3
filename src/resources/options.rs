/// Options for fetching a resource collection.
#[derive(Debug, Clone, Copy)]
pub struct GetOptions {
    /// Also populate the nested order/file detail. More expensive.
    pub append_files: bool,
    /// Block (by polling) until the portal has finished background
    /// processing. `false` returns the immediate snapshot.
    pub wait_for_completion: bool,
}

impl Default for GetOptions {
    fn default() -> Self {
        Self {
            append_files: false,
            wait_for_completion: true,
        }
    }
}

impl GetOptions {
    /// The immediate, no-waiting snapshot.
    pub fn snapshot() -> Self {
        Self {
            append_files: false,
            wait_for_completion: false,
        }
    }
}

/// Options for reconciling a resource collection.
#[derive(Debug, Clone, Copy)]
pub struct SetOptions {
    /// Block (by polling) until the portal has finished background
    /// processing of the submitted changes.
    pub wait_for_completion: bool,
    /// Perform an additional synchronous refresh after submission and return
    /// the refreshed collection instead of the submission responses.
    pub auto_get: bool,
}

impl Default for SetOptions {
    fn default() -> Self {
        Self {
            wait_for_completion: true,
            auto_get: false,
        }
    }
}
