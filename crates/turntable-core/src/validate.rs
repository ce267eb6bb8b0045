//! Photo-set validation policy.
//!
//! A submission needs between [`MIN_FILES`] and [`MAX_FILES`] images,
//! all JPEG or PNG. The same policy gates the submit button in the
//! browser and is re-checked by the backend on job creation.

use std::fmt;

use crate::types::ContentType;

/// Fewest images a submission may contain.
pub const MIN_FILES: usize = 3;

/// Most images a submission may contain.
pub const MAX_FILES: usize = 6;

/// Why a photo set cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Fewer than [`MIN_FILES`] images; `missing` more are needed.
    TooFew {
        /// How many more images are required.
        missing: usize,
    },
    /// More than [`MAX_FILES`] images; `excess` must be removed.
    TooMany {
        /// How many images must be removed.
        excess: usize,
    },
    /// At least one image is neither JPEG nor PNG.
    UnsupportedType,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFew { missing } => {
                write!(f, "Add at least {MIN_FILES} images ({missing} more).")
            }
            Self::TooMany { excess } => {
                write!(f, "Use at most {MAX_FILES} images. Remove {excess}.")
            }
            Self::UnsupportedType => f.write_str("Only JPG and PNG are allowed."),
        }
    }
}

/// Outcome of checking a photo set against the submission policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// The set may be submitted.
    Valid,
    /// The set may not be submitted.
    Invalid(ValidationIssue),
}

impl Validation {
    /// Returns `true` if the set may be submitted.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The blocking issue, if any.
    #[must_use]
    pub const fn issue(self) -> Option<ValidationIssue> {
        match self {
            Self::Valid => None,
            Self::Invalid(issue) => Some(issue),
        }
    }

    /// Human-readable reason the set is invalid.
    #[must_use]
    pub fn message(self) -> Option<String> {
        self.issue().map(|issue| issue.to_string())
    }
}

/// Check a photo set, given the content type of each image in order.
///
/// Count is checked before content types, so an empty set reports
/// [`ValidationIssue::TooFew`] rather than nothing.
#[must_use]
pub fn validate<'a>(content_types: impl IntoIterator<Item = &'a str>) -> Validation {
    let mut count = 0;
    let mut all_supported = true;
    for mime in content_types {
        count += 1;
        all_supported &= ContentType::from_mime(mime).is_some();
    }

    if count < MIN_FILES {
        return Validation::Invalid(ValidationIssue::TooFew {
            missing: MIN_FILES - count,
        });
    }
    if count > MAX_FILES {
        return Validation::Invalid(ValidationIssue::TooMany {
            excess: count - MAX_FILES,
        });
    }
    if !all_supported {
        return Validation::Invalid(ValidationIssue::UnsupportedType);
    }
    Validation::Valid
}
