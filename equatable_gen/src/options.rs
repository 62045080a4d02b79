//! Emit options and their layered loading.
//!
//! Options are gathered with `figment`, lowest precedence first: built-in
//! defaults, `EQUATABLE_*` environment variables, then caller overrides
//! (typically parsed command-line flags). The defaults reproduce the
//! canonical template byte for byte.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::EmitError;

/// Prefix for environment variables read by [`EmitOptions::load`].
pub const ENV_PREFIX: &str = "EQUATABLE_";

/// Default number of spaces per indentation level.
pub const DEFAULT_INDENT_WIDTH: u8 = 4;

/// Widest indentation level accepted by [`EmitOptions::load_with`].
pub const MAX_INDENT_WIDTH: u8 = 16;

/// Swift access modifier placed on the generated `==` function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// `public static func ==`.
    #[default]
    Public,
    /// `internal static func ==`.
    Internal,
    /// `fileprivate static func ==`.
    Fileprivate,
    /// `static func ==`, leaving the access level implicit.
    Implicit,
}

impl AccessLevel {
    /// Keyword to prefix the function signature with, if any.
    #[must_use]
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Public => Some("public"),
            Self::Internal => Some("internal"),
            Self::Fileprivate => Some("fileprivate"),
            Self::Implicit => None,
        }
    }
}

/// Rendering options for generated conformances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    /// Spaces per indentation level.
    pub indent_width: u8,
    /// Access modifier of the generated `==` function.
    pub access: AccessLevel,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            access: AccessLevel::Public,
        }
    }
}

/// Caller-supplied overrides merged over defaults and environment.
///
/// Unset fields are skipped during serialization so they never mask a lower
/// layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmitOverrides {
    /// Overrides [`EmitOptions::indent_width`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_width: Option<u8>,
    /// Overrides [`EmitOptions::access`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<AccessLevel>,
}

impl EmitOptions {
    /// The indentation unit: `indent_width` spaces.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        " ".repeat(usize::from(self.indent_width))
    }

    /// Loads options from defaults and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::Config`] if an environment value cannot be
    /// parsed.
    pub fn load() -> Result<Self, EmitError> {
        Self::load_with(&EmitOverrides::default())
    }

    /// Loads options from defaults and the environment, then merges
    /// `overrides` over the top.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::Config`] if any layer holds an unparsable value,
    /// or [`EmitError::IndentTooWide`] if the merged width exceeds
    /// [`MAX_INDENT_WIDTH`].
    pub fn load_with(overrides: &EmitOverrides) -> Result<Self, EmitError> {
        let options: Self = Self::figment()
            .merge(Serialized::defaults(overrides))
            .extract()
            .map_err(Box::new)?;
        options.validate()?;
        tracing::debug!(?options, "loaded emit options");
        Ok(options)
    }

    /// Checks the options against the accepted ranges.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::IndentTooWide`] if `indent_width` exceeds
    /// [`MAX_INDENT_WIDTH`].
    pub const fn validate(&self) -> Result<(), EmitError> {
        if self.indent_width > MAX_INDENT_WIDTH {
            return Err(EmitError::IndentTooWide {
                width: self.indent_width,
                max: MAX_INDENT_WIDTH,
            });
        }
        Ok(())
    }

    /// Defaults layered under `EQUATABLE_*` environment variables.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use rstest::rstest;

    #[rstest]
    #[case::public(AccessLevel::Public, Some("public"))]
    #[case::internal(AccessLevel::Internal, Some("internal"))]
    #[case::fileprivate(AccessLevel::Fileprivate, Some("fileprivate"))]
    #[case::implicit(AccessLevel::Implicit, None)]
    fn access_keywords(#[case] level: AccessLevel, #[case] expected: Option<&str>) {
        assert_eq!(level.keyword(), expected);
    }

    #[rstest]
    fn defaults_apply_without_environment() {
        Jail::expect_with(|_| {
            let options = EmitOptions::load().map_err(|err| err.to_string())?;
            assert_eq!(options, EmitOptions::default());
            assert_eq!(options.indent_unit(), "    ");
            Ok(())
        });
    }

    #[rstest]
    fn environment_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("EQUATABLE_INDENT_WIDTH", "2");
            jail.set_env("EQUATABLE_ACCESS", "internal");
            let options = EmitOptions::load().map_err(|err| err.to_string())?;
            assert_eq!(options.indent_width, 2);
            assert_eq!(options.access, AccessLevel::Internal);
            Ok(())
        });
    }

    #[rstest]
    fn overrides_take_precedence_over_environment() {
        Jail::expect_with(|jail| {
            jail.set_env("EQUATABLE_INDENT_WIDTH", "2");
            jail.set_env("EQUATABLE_ACCESS", "internal");
            let overrides = EmitOverrides {
                indent_width: Some(3),
                access: None,
            };
            let options = EmitOptions::load_with(&overrides).map_err(|err| err.to_string())?;
            assert_eq!(options.indent_width, 3);
            assert_eq!(options.access, AccessLevel::Internal);
            Ok(())
        });
    }

    #[rstest]
    #[case::at_cap(MAX_INDENT_WIDTH, true)]
    #[case::above_cap(MAX_INDENT_WIDTH + 1, false)]
    #[case::widest(u8::MAX, false)]
    fn indent_width_is_capped(#[case] width: u8, #[case] accepted: bool) {
        let overrides = EmitOverrides {
            indent_width: Some(width),
            access: None,
        };
        Jail::expect_with(|_| {
            match EmitOptions::load_with(&overrides) {
                Ok(options) => {
                    assert!(accepted, "width {width} should be rejected");
                    assert_eq!(options.indent_unit().len(), usize::from(width));
                }
                Err(err) => {
                    assert!(!accepted, "width {width} should be accepted: {err}");
                    assert!(matches!(
                        err,
                        EmitError::IndentTooWide { width: w, max: MAX_INDENT_WIDTH } if w == width
                    ));
                }
            }
            Ok(())
        });
    }

    #[rstest]
    #[case::too_wide("17")]
    #[case::out_of_range("1000000000000")]
    #[case::negative("-1")]
    fn oversized_environment_width_is_rejected(#[case] value: &str) {
        Jail::expect_with(|jail| {
            jail.set_env("EQUATABLE_INDENT_WIDTH", value);
            assert!(EmitOptions::load().is_err());
            Ok(())
        });
    }

    #[rstest]
    fn invalid_environment_value_is_a_config_error() {
        Jail::expect_with(|jail| {
            jail.set_env("EQUATABLE_ACCESS", "protected");
            let result = EmitOptions::load();
            assert!(matches!(result, Err(EmitError::Config(_))));
            Ok(())
        });
    }
}
