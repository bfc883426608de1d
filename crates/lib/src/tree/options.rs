//! Configuration for the tree encoder and decoder.

use crate::codable::UserInfo;

/// How non-finite floats (NaN, positive and negative infinity) are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NonFiniteFloatStrategy {
    /// Encoding a non-finite float fails with `InvalidValue`, and decoding
    /// never produces one.
    #[default]
    Reject,
    /// Non-finite floats are stored as the given marker strings.
    AsText {
        positive_infinity: String,
        negative_infinity: String,
        nan: String,
    },
}

impl NonFiniteFloatStrategy {
    /// The conventional markers `"Infinity"`, `"-Infinity"` and `"NaN"`.
    pub fn conventional_text() -> Self {
        NonFiniteFloatStrategy::AsText {
            positive_infinity: "Infinity".to_string(),
            negative_infinity: "-Infinity".to_string(),
            nan: "NaN".to_string(),
        }
    }

    /// The marker for a non-finite `value`, or `None` when rejecting.
    pub(crate) fn marker_for(&self, value: f64) -> Option<&str> {
        match self {
            NonFiniteFloatStrategy::Reject => None,
            NonFiniteFloatStrategy::AsText {
                positive_infinity,
                negative_infinity,
                nan,
            } => Some(if value.is_nan() {
                nan
            } else if value.is_sign_positive() {
                positive_infinity
            } else {
                negative_infinity
            }),
        }
    }

    /// The float a stored marker stands for, if `text` is one.
    pub(crate) fn float_for(&self, text: &str) -> Option<f64> {
        match self {
            NonFiniteFloatStrategy::Reject => None,
            NonFiniteFloatStrategy::AsText {
                positive_infinity,
                negative_infinity,
                nan,
            } => {
                if text == positive_infinity {
                    Some(f64::INFINITY)
                } else if text == negative_infinity {
                    Some(f64::NEG_INFINITY)
                } else if text == nan {
                    Some(f64::NAN)
                } else {
                    None
                }
            }
        }
    }
}

/// Options for [`TreeEncoder`](super::TreeEncoder).
///
/// ```
/// # use carton::tree::{NonFiniteFloatStrategy, TreeEncoderOptions};
/// let options = TreeEncoderOptions::default()
///     .with_non_finite_floats(NonFiniteFloatStrategy::conventional_text());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeEncoderOptions {
    pub non_finite_floats: NonFiniteFloatStrategy,
    pub user_info: UserInfo,
}

impl TreeEncoderOptions {
    pub fn with_non_finite_floats(mut self, strategy: NonFiniteFloatStrategy) -> Self {
        self.non_finite_floats = strategy;
        self
    }

    pub fn with_user_info(mut self, user_info: UserInfo) -> Self {
        self.user_info = user_info;
        self
    }
}

/// Options for [`TreeDecoder`](super::TreeDecoder).
#[derive(Debug, Clone, Default)]
pub struct TreeDecoderOptions {
    pub non_finite_floats: NonFiniteFloatStrategy,
    pub user_info: UserInfo,
}

impl TreeDecoderOptions {
    pub fn with_non_finite_floats(mut self, strategy: NonFiniteFloatStrategy) -> Self {
        self.non_finite_floats = strategy;
        self
    }

    pub fn with_user_info(mut self, user_info: UserInfo) -> Self {
        self.user_info = user_info;
        self
    }
}
