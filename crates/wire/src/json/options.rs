//! JSON encoder options

/// What to do with NaN and infinite numbers, which JSON cannot express
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonFinite {
    /// Fail with `Error::UnsupportedValue`
    #[default]
    Reject,
    /// Emit `null` in place of the number
    Null,
}

/// JSON encoder options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonOptions {
    /// Handling of non-finite floats
    pub non_finite: NonFinite,
}

impl JsonOptions {
    /// Strict options - reject anything JSON cannot represent
    pub fn strict() -> Self {
        JsonOptions {
            non_finite: NonFinite::Reject,
        }
    }

    /// Lenient options - degrade unrepresentable numbers to `null`
    pub fn lenient() -> Self {
        JsonOptions {
            non_finite: NonFinite::Null,
        }
    }
}
