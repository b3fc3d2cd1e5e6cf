//! Generators for the per-width scalar decode families.
//!
//! Every integer width gets the same four operations (plain, `_min`,
//! `_max`, `_range`); only the target type and its precondition asserts
//! differ. The macros below stamp them out so each rule lives in exactly
//! one place.

/// Unsigned decode family: plain + bounded variants.
///
/// Arguments: target type, then the four method names.
macro_rules! decode_uint_ops {
    ($ty:ty, $decode:ident, $min:ident, $max:ident, $range:ident) => {
        #[doc = concat!(
            "Decodes any integer wire form whose value fits a `",
            stringify!($ty),
            "`."
        )]
        pub fn $decode(&mut self) -> crate::types::Result<$ty> {
            match self.read_raw_int()? {
                RawInt::Unsigned(v) => <$ty>::try_from(v)
                    .map_err(|_| self.latch(crate::types::Error::TypeMismatch)),
                RawInt::Negative(_) => {
                    Err(self.latch(crate::types::Error::TypeMismatch))
                }
            }
        }

        #[doc = concat!(
            "Like [`Self::",
            stringify!($decode),
            "`], but values below `low` are out of range."
        )]
        pub fn $min(&mut self, low: $ty) -> crate::types::Result<$ty> {
            debug_assert!(low > 0);
            debug_assert!(low < <$ty>::MAX);

            let value = self.$decode()?;
            if value < low {
                return Err(self.latch(crate::types::Error::OutOfRange));
            }
            Ok(value)
        }

        #[doc = concat!(
            "Like [`Self::",
            stringify!($decode),
            "`], but values above `high` are out of range."
        )]
        pub fn $max(&mut self, high: $ty) -> crate::types::Result<$ty> {
            debug_assert!(high > 0);
            debug_assert!(high < <$ty>::MAX);

            let value = self.$decode()?;
            if value > high {
                return Err(self.latch(crate::types::Error::OutOfRange));
            }
            Ok(value)
        }

        #[doc = concat!(
            "Like [`Self::",
            stringify!($decode),
            "`], but values outside `low..=high` are out of range."
        )]
        pub fn $range(&mut self, low: $ty, high: $ty) -> crate::types::Result<$ty> {
            debug_assert!(low > 0);
            debug_assert!(high < <$ty>::MAX);
            debug_assert!(low < high);

            let value = self.$decode()?;
            if value < low || value > high {
                return Err(self.latch(crate::types::Error::OutOfRange));
            }
            Ok(value)
        }
    };
}

/// Signed decode family: plain + bounded variants.
macro_rules! decode_int_ops {
    ($ty:ty, $decode:ident, $min:ident, $max:ident, $range:ident) => {
        #[doc = concat!(
            "Decodes any integer wire form whose value fits an `",
            stringify!($ty),
            "`."
        )]
        pub fn $decode(&mut self) -> crate::types::Result<$ty> {
            let raw = self.read_raw_int()?;
            let fitted = match raw {
                RawInt::Unsigned(v) => <$ty>::try_from(v).ok(),
                RawInt::Negative(v) => <$ty>::try_from(v).ok(),
            };
            match fitted {
                Some(value) => Ok(value),
                None => Err(self.latch(crate::types::Error::TypeMismatch)),
            }
        }

        #[doc = concat!(
            "Like [`Self::",
            stringify!($decode),
            "`], but values below `low` are out of range."
        )]
        pub fn $min(&mut self, low: $ty) -> crate::types::Result<$ty> {
            debug_assert!(low > <$ty>::MIN);
            debug_assert!(low < <$ty>::MAX);

            let value = self.$decode()?;
            if value < low {
                return Err(self.latch(crate::types::Error::OutOfRange));
            }
            Ok(value)
        }

        #[doc = concat!(
            "Like [`Self::",
            stringify!($decode),
            "`], but values above `high` are out of range."
        )]
        pub fn $max(&mut self, high: $ty) -> crate::types::Result<$ty> {
            debug_assert!(high > <$ty>::MIN);
            debug_assert!(high < <$ty>::MAX);

            let value = self.$decode()?;
            if value > high {
                return Err(self.latch(crate::types::Error::OutOfRange));
            }
            Ok(value)
        }

        #[doc = concat!(
            "Like [`Self::",
            stringify!($decode),
            "`], but values outside `low..=high` are out of range."
        )]
        pub fn $range(&mut self, low: $ty, high: $ty) -> crate::types::Result<$ty> {
            debug_assert!(low > <$ty>::MIN);
            debug_assert!(high < <$ty>::MAX);
            debug_assert!(low < high);

            let value = self.$decode()?;
            if value < low || value > high {
                return Err(self.latch(crate::types::Error::OutOfRange));
            }
            Ok(value)
        }
    };
}

/// Bounded variants for a float type whose plain decode already exists.
///
/// Bounds must be finite; the range form additionally requires `low < high`.
#[cfg(any(feature = "float32", feature = "float64"))]
macro_rules! decode_float_ops {
    ($ty:ty, $decode:ident, $min:ident, $max:ident, $range:ident) => {
        #[doc = concat!(
            "Like [`Self::",
            stringify!($decode),
            "`], but values below `low` are out of range."
        )]
        pub fn $min(&mut self, low: $ty) -> crate::types::Result<$ty> {
            debug_assert!(low.is_finite());

            let value = self.$decode()?;
            if value < low {
                return Err(self.latch(crate::types::Error::OutOfRange));
            }
            Ok(value)
        }

        #[doc = concat!(
            "Like [`Self::",
            stringify!($decode),
            "`], but values above `high` are out of range."
        )]
        pub fn $max(&mut self, high: $ty) -> crate::types::Result<$ty> {
            debug_assert!(high.is_finite());

            let value = self.$decode()?;
            if value > high {
                return Err(self.latch(crate::types::Error::OutOfRange));
            }
            Ok(value)
        }

        #[doc = concat!(
            "Like [`Self::",
            stringify!($decode),
            "`], but values outside `low..=high` are out of range."
        )]
        pub fn $range(&mut self, low: $ty, high: $ty) -> crate::types::Result<$ty> {
            debug_assert!(low.is_finite());
            debug_assert!(high.is_finite());
            debug_assert!(low < high);

            let value = self.$decode()?;
            if value < low || value > high {
                return Err(self.latch(crate::types::Error::OutOfRange));
            }
            Ok(value)
        }
    };
}

#[cfg(any(feature = "float32", feature = "float64"))]
pub(crate) use decode_float_ops;
pub(crate) use decode_int_ops;
pub(crate) use decode_uint_ops;
