//! Output configuration for rendering sizes.

/// Divisor family used when scaling a byte count to a larger unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeBase {
    /// Powers of 1024
    #[default]
    Binary,

    /// Powers of 1000
    Decimal,
}

/// Configuration for how a measured size is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Scale the size to a larger unit with one fractional digit
    pub humanize: bool,

    /// Scaling base used when `humanize` is set
    pub base: SizeBase,
}

impl OutputOptions {
    /// Options that render with the binary base.
    #[must_use]
    pub const fn new(humanize: bool) -> Self {
        Self {
            humanize,
            base: SizeBase::Binary,
        }
    }

    /// Replace the scaling base.
    #[must_use]
    pub const fn with_base(mut self, base: SizeBase) -> Self {
        self.base = base;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_raw_binary() {
        let opts = OutputOptions::default();

        assert!(!opts.humanize);
        assert_eq!(opts.base, SizeBase::Binary);
    }

    #[test]
    fn test_with_base() {
        let opts = OutputOptions::new(true).with_base(SizeBase::Decimal);

        assert!(opts.humanize);
        assert_eq!(opts.base, SizeBase::Decimal);
    }
}
