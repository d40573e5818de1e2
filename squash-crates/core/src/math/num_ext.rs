//! Rounded integer division, which views need when mapping bounds back onto their base variable.

pub(crate) trait NumExt {
    /// Division rounding towards positive infinity.
    fn div_ceil(self, other: Self) -> Self;

    /// Division rounding towards negative infinity.
    ///
    /// Note this is different from the `/` operator, which truncates towards zero.
    fn div_floor(self, other: Self) -> Self;
}

macro_rules! impl_num_ext {
    ($($ty:ty),+) => {
        $(
            impl NumExt for $ty {
                fn div_ceil(self, other: Self) -> Self {
                    let quotient = self / other;
                    let remainder = self % other;
                    if (remainder > 0 && other > 0) || (remainder < 0 && other < 0) {
                        quotient + 1
                    } else {
                        quotient
                    }
                }

                fn div_floor(self, other: Self) -> Self {
                    let quotient = self / other;
                    let remainder = self % other;
                    if (remainder > 0 && other < 0) || (remainder < 0 && other > 0) {
                        quotient - 1
                    } else {
                        quotient
                    }
                }
            }
        )+
    };
}

impl_num_ext!(i32, i64);

#[cfg(test)]
mod tests {
    use super::NumExt;

    #[test]
    fn rounding_follows_the_sign_of_the_quotient() {
        assert_eq!(3, NumExt::div_ceil(7_i32, 3));
        assert_eq!(2, NumExt::div_floor(7_i32, 3));
        assert_eq!(-2, NumExt::div_ceil(-7_i32, 3));
        assert_eq!(-3, NumExt::div_floor(-7_i32, 3));
        assert_eq!(-2, NumExt::div_ceil(7_i64, -3));
        assert_eq!(-3, NumExt::div_floor(7_i64, -3));
    }

    #[test]
    fn exact_division_is_not_rounded() {
        assert_eq!(-4, NumExt::div_floor(8_i64, -2));
        assert_eq!(-4, NumExt::div_ceil(8_i64, -2));
    }
}
