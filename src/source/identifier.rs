// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use std::fmt::{Display, Formatter};

/**
A validated shading-language identifier.

Identifiers start with an ASCII letter or underscore, continue with ASCII letters, digits or
underscores, and may not use the reserved `gl_` prefix.  Names derived from a valid identifier by
adding an alphabetic prefix and a numeric suffix are valid as well, so derivation is infallible.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum IdentifierError {
    #[error("Identifier is empty")]
    Empty,
    #[error("Identifier {0:?} must start with a letter or underscore")]
    LeadingCharacter(String),
    #[error("Identifier {name:?} contains {character:?}")]
    Character { name: String, character: char },
    #[error("Identifier {0:?} uses the reserved gl_ prefix")]
    Reserved(String),
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Result<Self, IdentifierError> {
        let name = name.into();
        let mut chars = name.chars();
        match chars.next() {
            None => return Err(IdentifierError::Empty),
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            Some(_) => return Err(IdentifierError::LeadingCharacter(name)),
        }
        if let Some(character) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(IdentifierError::Character { name, character });
        }
        if name.starts_with("gl_") {
            return Err(IdentifierError::Reserved(name));
        }
        Ok(Identifier(name))
    }

    /// `<prefix><self><index>`, e.g. `aLabel0` from `Label`.
    ///
    /// # Panics
    ///
    /// Panics if `prefix` is empty or not alphabetic.
    pub fn derive(&self, prefix: &str, index: usize) -> Identifier {
        assert!(
            !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_alphabetic()),
            "Invalid identifier prefix {prefix:?}"
        );
        Identifier(format!("{prefix}{}{index}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn accepts_plain_names() {
        assert_eq!(Identifier::new("Label").unwrap().as_str(), "Label");
        assert!(Identifier::new("_x9").is_ok());
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn rejects_bad_names() {
        assert_eq!(Identifier::new(""), Err(IdentifierError::Empty));
        assert_eq!(
            Identifier::new("9lives"),
            Err(IdentifierError::LeadingCharacter("9lives".to_string()))
        );
        assert_eq!(
            Identifier::new("a b"),
            Err(IdentifierError::Character {
                name: "a b".to_string(),
                character: ' '
            })
        );
        assert_eq!(
            Identifier::new("x;y"),
            Err(IdentifierError::Character {
                name: "x;y".to_string(),
                character: ';'
            })
        );
        assert_eq!(
            Identifier::new("gl_Position"),
            Err(IdentifierError::Reserved("gl_Position".to_string()))
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn derived_names() {
        let base = Identifier::new("Label").unwrap();
        assert_eq!(base.derive("a", 0).as_str(), "aLabel0");
        assert_eq!(base.derive("get", 12).as_str(), "getLabel12");
        //derived names still validate
        assert!(Identifier::new(base.derive("get", 3).as_str()).is_ok());
    }
}
