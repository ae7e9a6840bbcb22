//! Tour persistence. Booking is a composite write: the tour and its payment
//! row commit together or not at all.

mod book;
mod delete;
mod get;
mod update;

pub use book::book;
pub use delete::delete;
pub use get::{get, get_basic, list, list_by_user};
pub use update::{set_accepted, update};

pub(crate) const COLUMNS: &str = "tour_id, name, email, phone, date, time, charges, is_accepted, \
     user_id, property_id, created_at, updated_at";
