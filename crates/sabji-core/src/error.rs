//! # Error Types
//!
//! Domain-specific error types for sabji-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sabji-core errors (this file)                                         │
//! │  ├── CoreError        - Catalog and list rule violations               │
//! │  └── ValidationError  - Input rejected at the boundary                 │
//! │                                                                         │
//! │  sabji-store errors (separate crate)                                   │
//! │  └── StoreError       - List storage failures                          │
//! │                                                                         │
//! │  App errors                                                            │
//! │  └── ApiError         - What the UI / CLI sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine and numeral translator never return errors: a bad observation
//! gives an empty table and an out-of-range amount gives digits. Everything
//! here is raised by the validation boundary or by list operations.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No catalog entry has this id.
    #[error("Catalog item not found: {0}")]
    ItemNotFound(String),

    /// Two catalog entries share an id.
    #[error("Duplicate catalog id: {0}")]
    DuplicateCatalogId(String),

    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error("Item {item_id} not found in list {list_id}")]
    ListItemNotFound { list_id: String, item_id: String },

    /// The list has been moved to history.
    ///
    /// ## User Workflow
    /// ```text
    /// History tab ──► open old list ──► tap "price"
    ///      │
    ///      ▼
    /// ListArchived("…")  → UI offers "Restore list"
    /// ```
    #[error("List {0} is in history and cannot be edited")]
    ListArchived(String),

    /// Creating a list with nothing selected.
    #[error("Select at least one item to create a list")]
    EmptySelection,

    #[error("List cannot have more than {max} items")]
    ListTooLarge { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before anything reaches the engine or the list store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// NaN or infinity.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Unit or mode does not suit the item's category (strict dairy rule).
    #[error("{message}")]
    CategoryMismatch { message: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
