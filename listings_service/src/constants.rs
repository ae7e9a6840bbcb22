use rust_decimal::Decimal;

/// Flat booking fee charged when a tour is booked; the payment row carries
/// the same amount.
pub const TOUR_BOOKING_FEE: Decimal = Decimal::from_parts(1000, 0, 0, false, 2);

/// Digits in the random part of a listing reference code.
pub const REFERENCE_DIGITS: u32 = 6;

/// How many times property creation retries a colliding reference before
/// giving up with a conflict.
pub const MAX_REFERENCE_ATTEMPTS: u32 = 3;

/// A listing needs a gallery, not a single shot.
pub const MIN_PROPERTY_IMAGES: usize = 2;

/// Per-request wall-clock budget before the request is aborted.
pub const REQUEST_TIMEOUT_SECS: u64 = 18;

/// CDN folders per image kind.
pub const PROPERTY_IMAGES_FOLDER: &str = "properties";
pub const USER_IMAGES_FOLDER: &str = "users";
pub const ADMIN_IMAGES_FOLDER: &str = "admins";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_fee_is_ten() {
        assert_eq!(TOUR_BOOKING_FEE.to_string(), "10.00");
    }
}
