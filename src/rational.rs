//! Exact rational arithmetic over arbitrary-precision integers.
//!
//! Every derived quantity in this crate (areas, intersection points,
//! half-plane tests) is computed with [`Rational`] values, so chained set
//! operations never accumulate rounding error. A zero denominator encodes
//! the infinities and NaN: `1/0` is +inf, `-1/0` is -inf, `0/0` is NaN.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::ExactError;

/// An exact fraction of two arbitrary-precision integers.
///
/// Invariant: the fraction is always reduced to lowest terms with the sign
/// carried on the numerator, except when the denominator is zero. A zero
/// denominator encodes +inf (numerator 1), -inf (numerator -1), or NaN
/// (numerator 0); those numerators are normalized to unit magnitude.
///
/// Equality is structural, so NaN equals NaN; ordering is partial and
/// refuses to compare NaN (see [`Rational::try_cmp`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rational {
    num: BigInt,
    den: BigInt,
}

impl Rational {
    /// Creates a rational from a numerator/denominator pair, reducing it.
    pub fn new(numerator: i64, denominator: i64) -> Self {
        let mut r = Rational {
            num: BigInt::from(numerator),
            den: BigInt::from(denominator),
        };
        r.reduce();
        r
    }

    /// Creates the NaN rational, 0/0.
    pub fn nan() -> Self {
        Rational {
            num: BigInt::zero(),
            den: BigInt::zero(),
        }
    }

    /// Creates a rational from already-big parts, reducing it.
    pub fn from_parts(numerator: BigInt, denominator: BigInt) -> Self {
        let mut r = Rational {
            num: numerator,
            den: denominator,
        };
        r.reduce();
        r
    }

    /// Reduces to lowest terms, normalizing the zero-denominator encodings.
    fn reduce(&mut self) {
        if self.num.is_zero() || self.den.is_zero() {
            if !self.den.is_zero() {
                // A finite zero is always 0/1.
                self.den.set_one();
            } else {
                match self.num.sign() {
                    Sign::Minus => self.num = -BigInt::one(),
                    Sign::Plus => self.num = BigInt::one(),
                    Sign::NoSign => {}
                }
            }
            return;
        }
        if self.den.is_negative() {
            self.num = -&self.num;
            self.den = -&self.den;
        }
        if !self.den.is_one() {
            let g = self.num.gcd(&self.den);
            if !g.is_one() {
                self.num /= &g;
                self.den /= &g;
            }
        }
    }

    /// Sets this value in place, reusing the existing allocation.
    pub fn set_to(&mut self, other: &Rational) {
        self.num.clone_from(&other.num);
        self.den.clone_from(&other.den);
    }

    /// Sets this value to an integer in place.
    pub fn set_int(&mut self, value: i64) {
        self.num = BigInt::from(value);
        self.den = BigInt::one();
    }

    /// Sets this value to a fraction in place, reducing it.
    pub fn set_frac(&mut self, numerator: i64, denominator: i64) {
        self.num = BigInt::from(numerator);
        self.den = BigInt::from(denominator);
        self.reduce();
    }

    /// True iff the value is exactly zero (and not NaN).
    pub fn is_zero(&self) -> bool {
        self.num.is_zero() && !self.den.is_zero()
    }

    /// True iff the numerator is negative (so -inf counts as negative).
    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    /// True iff the numerator is positive (so +inf counts as positive).
    pub fn is_positive(&self) -> bool {
        self.num.is_positive()
    }

    /// True iff this is the 0/0 encoding.
    pub fn is_nan(&self) -> bool {
        self.num.is_zero() && self.den.is_zero()
    }

    /// True iff the denominator is zero but the numerator is not.
    pub fn is_infinite(&self) -> bool {
        self.den.is_zero() && !self.num.is_zero()
    }

    /// Compares two rationals, failing on any comparison against 0/0.
    ///
    /// Infinities compare by numerator sign: -inf is less than every finite
    /// value and +inf greater, and the two infinities order as -inf < +inf.
    pub fn try_cmp(&self, other: &Rational) -> Result<Ordering, ExactError> {
        if self.is_nan() || other.is_nan() {
            return Err(ExactError::IndeterminateComparison);
        }
        if self.den.is_zero() && other.den.is_zero() {
            return Ok(self.num.cmp(&other.num));
        }
        if other.den.is_zero() {
            return Ok(if other.num.is_positive() {
                Ordering::Less
            } else {
                Ordering::Greater
            });
        }
        if self.den.is_zero() {
            return Ok(if self.num.is_negative() {
                Ordering::Less
            } else {
                Ordering::Greater
            });
        }
        if self.den == other.den {
            return Ok(self.num.cmp(&other.num));
        }
        // Denominators are positive after reduction, so cross-multiplying
        // preserves the ordering.
        Ok((&self.num * &other.den).cmp(&(&other.num * &self.den)))
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Rational {
        Rational {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    /// Returns the reciprocal, keeping the sign on the numerator.
    ///
    /// The reciprocal of zero is +inf; the reciprocal of NaN is NaN.
    pub fn recip(&self) -> Rational {
        let mut r = Rational {
            num: self.den.clone(),
            den: self.num.clone(),
        };
        if r.den.is_negative() {
            r.num = -r.num;
            r.den = -r.den;
        }
        r.reduce();
        r
    }

    /// Returns the square of this value.
    pub fn square(&self) -> Rational {
        Rational::from_parts(&self.num * &self.num, &self.den * &self.den)
    }

    /// Returns the largest integer not greater than this value.
    pub fn floor(&self) -> BigInt {
        self.num.div_floor(&self.den)
    }

    /// Returns the smallest integer not less than this value.
    pub fn ceil(&self) -> BigInt {
        self.num.div_ceil(&self.den)
    }

    /// Converts to `f64`.
    ///
    /// Splits into integer quotient plus a scaled remainder so that values
    /// whose numerator or denominator exceed 64-bit range still convert with
    /// full double precision, instead of dividing two rounded doubles.
    pub fn to_f64(&self) -> f64 {
        if self.den.is_zero() {
            return match self.num.sign() {
                Sign::Plus => f64::INFINITY,
                Sign::Minus => f64::NEG_INFINITY,
                Sign::NoSign => f64::NAN,
            };
        }
        // 2^53 is the last power of two below which every integer is exact.
        let scale: i64 = 1 << 53;
        let (quot, rem) = self.num.div_rem(&self.den);
        let frac = (rem * BigInt::from(scale)) / &self.den;
        quot.to_f64().unwrap_or(f64::NAN) + frac.to_f64().unwrap_or(f64::NAN) / scale as f64
    }

    /// Converts to the floor integer if it fits in an `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        if self.den.is_zero() {
            return None;
        }
        self.floor().to_i64()
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational {
            num: BigInt::from(value),
            den: BigInt::one(),
        }
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Rational {
            num: value,
            den: BigInt::one(),
        }
    }
}

impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        self.den.is_one() && self.num == BigInt::from(*other)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, other: &Rational) -> Rational {
        Rational::from_parts(
            &self.num * &other.den + &other.num * &self.den,
            &self.den * &other.den,
        )
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, other: &Rational) -> Rational {
        Rational::from_parts(
            &self.num * &other.den - &other.num * &self.den,
            &self.den * &other.den,
        )
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, other: &Rational) -> Rational {
        Rational::from_parts(&self.num * &other.num, &self.den * &other.den)
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, other: &Rational) -> Rational {
        Rational::from_parts(&self.num * &other.den, &self.den * &other.num)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, other: Rational) -> Rational {
        &self + &other
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, other: Rational) -> Rational {
        &self - &other
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, other: Rational) -> Rational {
        &self * &other
    }
}

impl Div for Rational {
    type Output = Rational;

    fn div(self, other: Rational) -> Rational {
        &self / &other
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        -&self
    }
}

impl fmt::Display for Rational {
    /// Renders as a bare integer, `(n / d)`, or `+inf`/`-inf`/`NaN`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            write!(f, "{}", self.num)
        } else if self.den.is_zero() {
            match self.num.sign() {
                Sign::Minus => write!(f, "-inf"),
                Sign::NoSign => write!(f, "NaN"),
                Sign::Plus => write!(f, "+inf"),
            }
        } else {
            write!(f, "({} / {})", self.num, self.den)
        }
    }
}

impl FromStr for Rational {
    type Err = ExactError;

    /// Parses an integer, a `n/d` fraction, or a decimal like `1.25`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let bad = || ExactError::Parse {
            text: s.to_string(),
        };
        if let Some((whole, frac)) = text.split_once('.') {
            let denom = BigInt::from(10u8).pow(frac.len() as u32);
            let frac_num: BigInt = frac.parse().map_err(|_| bad())?;
            if frac_num.is_negative() {
                return Err(bad());
            }
            let whole_num: BigInt = if whole.is_empty() {
                BigInt::zero()
            } else {
                whole.parse().map_err(|_| bad())?
            };
            let signed_frac = if whole.starts_with('-') {
                -frac_num
            } else {
                frac_num
            };
            return Ok(Rational::from_parts(whole_num * &denom + signed_frac, denom));
        }
        if let Some((n, d)) = text.split_once('/') {
            let num: BigInt = n.trim().parse().map_err(|_| bad())?;
            let den: BigInt = d.trim().parse().map_err(|_| bad())?;
            return Ok(Rational::from_parts(num, den));
        }
        let num: BigInt = text.parse().map_err(|_| bad())?;
        Ok(Rational::from(num))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reduction() {
        assert_eq!(Rational::new(2, 4), Rational::new(1, 2));
        assert_eq!(Rational::new(-2, -4), Rational::new(1, 2));
        assert_eq!(Rational::new(2, -4), Rational::new(-1, 2));
        assert_eq!(Rational::new(0, 17), Rational::from(0));
    }

    #[test]
    fn test_equals_int() {
        assert_eq!(Rational::from(0), 0);
        assert_eq!(Rational::from(1), 1);
        assert_eq!(Rational::new(-7, 7), -1);
        assert_ne!(Rational::new(1, 2), 0);
        assert_ne!(Rational::new(3, 2), 1);
    }

    #[test]
    fn test_inequality() {
        let zero = Rational::from(0);
        let one = Rational::from(1);
        let three_halves = Rational::new(3, 2);
        assert!(zero < one);
        assert!(!(zero > zero.clone()));
        assert!(one < three_halves);
        assert!(three_halves < Rational::from(2));
        assert!(Rational::new(-3, 2) < Rational::new(-1, 2));
    }

    #[test]
    fn test_infinities() {
        let pos_inf = Rational::new(5, 0);
        let neg_inf = Rational::new(-5, 0);
        assert!(pos_inf.is_infinite() && pos_inf.is_positive());
        assert!(neg_inf.is_infinite() && neg_inf.is_negative());
        assert!(neg_inf < pos_inf);
        assert!(Rational::from(1_000_000) < pos_inf);
        assert!(neg_inf < Rational::from(-1_000_000));
        // The encodings normalize to unit numerators.
        assert_eq!(pos_inf, Rational::new(1, 0));
    }

    #[test]
    fn test_nan_comparison_fails() {
        let nan = Rational::nan();
        let one = Rational::from(1);
        assert_eq!(
            nan.try_cmp(&one),
            Err(ExactError::IndeterminateComparison)
        );
        assert_eq!(
            one.try_cmp(&nan),
            Err(ExactError::IndeterminateComparison)
        );
        assert!(nan.partial_cmp(&one).is_none());
        assert!(nan.is_nan());
        // Structural equality still holds for two NaNs.
        assert_eq!(nan, Rational::nan());
    }

    #[test]
    fn test_arithmetic() {
        let half = Rational::new(1, 2);
        let third = Rational::new(1, 3);
        assert_eq!(&half + &third, Rational::new(5, 6));
        assert_eq!(&half - &third, Rational::new(1, 6));
        assert_eq!(&half * &third, Rational::new(1, 6));
        assert_eq!(&half / &third, Rational::new(3, 2));
        assert_eq!(-&half, Rational::new(-1, 2));
        assert_eq!(half.square(), Rational::new(1, 4));
    }

    #[test]
    fn test_aliasing_safe_inplace() {
        let mut a = Rational::new(3, 4);
        let b = Rational::new(3, 4);
        a.set_to(&(&b + &b));
        assert_eq!(a, Rational::new(3, 2));
        a.set_frac(9, 12);
        assert_eq!(a, b);
    }

    #[test]
    fn test_division_by_zero_propagates_encoding() {
        let one = Rational::from(1);
        let zero = Rational::from(0);
        assert_eq!(&one / &zero, Rational::new(1, 0));
        assert_eq!(&-&one / &zero, Rational::new(-1, 0));
        assert!((&zero / &zero).is_nan());
        assert!((&Rational::new(1, 0) * &zero).is_nan());
    }

    #[test]
    fn test_reciprocal() {
        assert_eq!(Rational::new(2, 3).recip(), Rational::new(3, 2));
        assert_eq!(Rational::new(-2, 3).recip(), Rational::new(-3, 2));
        assert_eq!(Rational::from(0).recip(), Rational::new(1, 0));
        assert!(Rational::nan().recip().is_nan());
    }

    #[test]
    fn test_overflow_past_64_bits() {
        // (2^40)^2 does not fit in 64 bits.
        let big = Rational::from(1i64 << 40);
        let sq = big.square();
        assert_eq!(sq, &big * &big);
        assert_relative_eq!(sq.to_f64(), 2f64.powi(80), epsilon = 1.0);
    }

    #[test]
    fn test_to_f64_accuracy() {
        assert_relative_eq!(Rational::new(1, 3).to_f64(), 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(Rational::new(-7, 2).to_f64(), -3.5, epsilon = 1e-12);
        assert!(Rational::new(1, 0).to_f64().is_infinite());
        assert!(Rational::nan().to_f64().is_nan());
    }

    #[test]
    fn test_floor_ceil() {
        assert_eq!(Rational::new(7, 2).floor(), BigInt::from(3));
        assert_eq!(Rational::new(7, 2).ceil(), BigInt::from(4));
        assert_eq!(Rational::new(-7, 2).floor(), BigInt::from(-4));
        assert_eq!(Rational::new(-7, 2).ceil(), BigInt::from(-3));
        assert_eq!(Rational::from(5).floor(), BigInt::from(5));
        assert_eq!(Rational::from(5).ceil(), BigInt::from(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rational::from(5).to_string(), "5");
        assert_eq!(Rational::new(1, 2).to_string(), "(1 / 2)");
        assert_eq!(Rational::new(1, 0).to_string(), "+inf");
        assert_eq!(Rational::new(-1, 0).to_string(), "-inf");
        assert_eq!(Rational::nan().to_string(), "NaN");
    }

    #[test]
    fn test_parse() {
        assert_eq!("5".parse::<Rational>().unwrap(), Rational::from(5));
        assert_eq!("-12".parse::<Rational>().unwrap(), Rational::from(-12));
        assert_eq!("3/4".parse::<Rational>().unwrap(), Rational::new(3, 4));
        assert_eq!("1.25".parse::<Rational>().unwrap(), Rational::new(5, 4));
        assert_eq!("-0.5".parse::<Rational>().unwrap(), Rational::new(-1, 2));
        assert!("one".parse::<Rational>().is_err());
        assert!("1.2.3".parse::<Rational>().is_err());
    }
}
