//! Common

use num_traits::Num;

/// Use 32-bit precision for floating point numbers.
pub type Float = f32;

/// Default signed integer to 32-bit.
pub type Int = i32;

/// Clamps a value x to lie between low and high.
///
/// * `x`    - The number to clamp.
/// * `low`  - Lower limit.
/// * `high` - Upper limit.
#[inline(always)]
pub fn clamp<T>(x: T, low: T, high: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if x < low {
        low
    } else if x > high {
        high
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limits() {
        assert_eq!(clamp(-1.0, 0.0, 255.0), 0.0);
        assert_eq!(clamp(300.0, 0.0, 255.0), 255.0);
        assert_eq!(clamp(127.5, 0.0, 255.0), 127.5);
        assert_eq!(clamp(5, 0, 10), 5);
    }
}
