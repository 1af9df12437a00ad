use crate::error::PropertyError;
use std::fmt;
use std::str::FromStr;

/// Highest perturbative order of the ADC family that is known.
pub const MAX_ADC_LEVEL: u8 = 3;

/// Identifier of an ADC variant, e.g. ADC(2), ADC(2)-x or CVS-ADC(3).
/// A method is constructed once from its label and passed around in this form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdcMethod {
    level: u8,
    extended: bool,
    core_valence_separated: bool,
}

impl AdcMethod {
    pub fn new(
        level: u8,
        extended: bool,
        core_valence_separated: bool,
    ) -> Result<Self, PropertyError> {
        let method = Self {
            level,
            extended,
            core_valence_separated,
        };
        // ADC(2)-x is the only extended variant.
        if level > MAX_ADC_LEVEL || (extended && level != 2) {
            return Err(PropertyError::UnknownMethod(method.name()));
        }
        Ok(method)
    }

    /// Perturbative order of the method.
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_extended(&self) -> bool {
        self.extended
    }

    pub fn is_core_valence_separated(&self) -> bool {
        self.core_valence_separated
    }

    /// The method without any core-valence separation.
    pub fn base_method(&self) -> Self {
        Self {
            core_valence_separated: false,
            ..*self
        }
    }

    /// The same kind of method at a different perturbative order.
    pub fn at_level(&self, level: u8) -> Result<Self, PropertyError> {
        Self::new(level, false, self.core_valence_separated)
    }

    /// The method that is used to compute properties for this method. It only differs
    /// from the method itself for ADC(2)-x, where properties are taken at the ADC(2) level.
    pub fn property_method(&self) -> Self {
        if self.extended {
            Self {
                extended: false,
                ..*self
            }
        } else {
            *self
        }
    }

    /// Canonical label of the method, e.g. "cvs-adc2x".
    pub fn name(&self) -> String {
        let prefix: &str = if self.core_valence_separated { "cvs-" } else { "" };
        let suffix: &str = if self.extended { "x" } else { "" };
        format!("{}adc{}{}", prefix, self.level, suffix)
    }
}

impl FromStr for AdcMethod {
    type Err = PropertyError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let unknown = || PropertyError::UnknownMethod(label.to_owned());
        let normalized: String = label.trim().to_lowercase();

        let mut parts: Vec<&str> = normalized.split('-').collect();
        let base: &str = parts.pop().ok_or_else(unknown)?;
        let core_valence_separated: bool = match parts.as_slice() {
            [] => false,
            ["cvs"] => true,
            _ => return Err(unknown()),
        };

        let order: &str = base.strip_prefix("adc").ok_or_else(unknown)?;
        let (digits, extended): (&str, bool) = match order.strip_suffix('x') {
            Some(digits) => (digits, true),
            None => (order, false),
        };
        if digits.len() != 1 {
            return Err(unknown());
        }
        let level: u8 = digits.parse().map_err(|_| unknown())?;
        Self::new(level, extended, core_valence_separated).map_err(|_| unknown())
    }
}

impl fmt::Display for AdcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_labels() {
        let adc2: AdcMethod = "adc2".parse().unwrap();
        assert_eq!(adc2.level(), 2);
        assert!(!adc2.is_extended());
        assert!(!adc2.is_core_valence_separated());

        let adc2x: AdcMethod = "ADC2X".parse().unwrap();
        assert!(adc2x.is_extended());
        assert_eq!(adc2x.name(), "adc2x");

        let cvs: AdcMethod = "cvs-adc3".parse().unwrap();
        assert!(cvs.is_core_valence_separated());
        assert_eq!(cvs.level(), 3);
        assert_eq!(cvs.to_string(), "cvs-adc3");
        assert_eq!(cvs.base_method().name(), "adc3");
    }

    #[test]
    fn reject_unknown_labels() {
        for label in ["", "adc", "adc4", "adc3x", "mp2", "foo-adc2", "adc12", "cvs-cvs-adc2"] {
            assert_eq!(
                label.parse::<AdcMethod>(),
                Err(PropertyError::UnknownMethod(label.to_owned())),
                "label: {}",
                label
            );
        }
    }

    #[test]
    fn property_method_of_extended_adc2() {
        let adc2x: AdcMethod = "cvs-adc2x".parse().unwrap();
        assert_eq!(adc2x.property_method().name(), "cvs-adc2");
        let adc3: AdcMethod = "adc3".parse().unwrap();
        assert_eq!(adc3.property_method(), adc3);
    }

    #[test]
    fn change_level() {
        let adc3: AdcMethod = "cvs-adc3".parse().unwrap();
        assert_eq!(adc3.at_level(1).unwrap().name(), "cvs-adc1");
        assert!(adc3.at_level(4).is_err());
    }
}
