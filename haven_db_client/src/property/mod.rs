//! Property persistence: the composite create plus reads, updates and
//! deletes over the listing and its 1:1 dependents.

mod create;
mod delete;
mod get;
mod update;

pub use create::create;
pub use delete::delete;
pub use get::{get, get_basic, list, list_by_owner};
pub use update::{mark_paid, update};

/// Unique constraint on the synthesized reference code. A violation here is
/// retryable with a freshly generated code.
pub const REFERENCE_CONSTRAINT: &str = "properties_reference_key";

/// Unique constraint on (title, owner, type). A violation here means the
/// owner already listed this property.
pub const DUPLICATE_LISTING_CONSTRAINT: &str = "properties_title_owner_type_key";

pub(crate) const COLUMNS: &str = "property_id, title, description, status, property_type, room, \
     price, area, amenities, is_available, images, reference, is_paid, user_id, \
     created_at, updated_at";
