pub mod extract;

pub use extract::{AdminUser, AuthUser};
