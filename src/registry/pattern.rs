//! Parsing of generic type names and the patterns printers register under.

use std::{error::Error, fmt};

/// A parsed `Base<element, count>` type name as reported by the host
/// debugger, e.g. `Vec<float, 3>` or `Color<unsigned int, 4>`.
///
/// Parsing yields the element spelling and the length, the two typed facts
/// printers and raw views need, without any runtime reflection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeName {
    base: String,
    element: String,
    count: usize,
}

impl TypeName {
    pub fn parse(input: &str) -> Result<Self, TypeNameError> {
        let trimmed = input.trim();
        let open = trimmed
            .find('<')
            .ok_or(TypeNameError::MissingTemplateArgs)?;
        let base = trimmed[..open].trim();
        if base.is_empty() {
            return Err(TypeNameError::EmptyBase);
        }
        let rest = &trimmed[open + 1..];
        let inner = rest
            .strip_suffix('>')
            .ok_or(TypeNameError::UnterminatedTemplateArgs)?;
        // the count is the last comma-separated argument, so a nested
        // template in the element position still splits correctly
        let comma = inner.rfind(',').ok_or(TypeNameError::MissingCount)?;
        let element = inner[..comma].trim();
        if element.is_empty() {
            return Err(TypeNameError::EmptyElement);
        }
        let count_text = inner[comma + 1..].trim();
        let count = count_text
            .parse::<usize>()
            .map_err(|_| TypeNameError::InvalidCount(count_text.to_string()))?;
        Ok(Self {
            base: base.to_string(),
            element: element.to_string(),
            count,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Spelling of the element template argument.
    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}, {}>", self.base, self.element, self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNameError {
    MissingTemplateArgs,
    UnterminatedTemplateArgs,
    EmptyBase,
    EmptyElement,
    MissingCount,
    InvalidCount(String),
}

impl fmt::Display for TypeNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNameError::MissingTemplateArgs => {
                write!(f, "type name carries no template argument list")
            }
            TypeNameError::UnterminatedTemplateArgs => {
                write!(f, "template argument list is not closed with '>'")
            }
            TypeNameError::EmptyBase => write!(f, "type name has an empty base"),
            TypeNameError::EmptyElement => write!(f, "element template argument is empty"),
            TypeNameError::MissingCount => write!(f, "type name carries no length argument"),
            TypeNameError::InvalidCount(token) => {
                write!(f, "length argument '{token}' is not an unsigned integer")
            }
        }
    }
}

impl Error for TypeNameError {}

/// Matcher a printer registers under: a template base name. A pattern
/// claims every instantiation of that template, whatever its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeNamePattern {
    base: String,
}

impl TypeNamePattern {
    pub fn template_base<S: Into<String>>(base: S) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn matches(&self, name: &TypeName) -> bool {
        name.base() == self.base
    }
}

#[cfg(test)]
mod tests {
    //! The parser is the introspection seam; exercise its edges.
    use super::*;

    #[test]
    fn parses_the_stock_shapes() {
        let name = TypeName::parse("Vec<float, 3>").expect("parse");
        assert_eq!(name.base(), "Vec");
        assert_eq!(name.element(), "float");
        assert_eq!(name.count(), 3);

        let name = TypeName::parse("Color<unsigned int, 4>").expect("parse");
        assert_eq!(name.base(), "Color");
        assert_eq!(name.element(), "unsigned int");
        assert_eq!(name.count(), 4);
    }

    #[test]
    fn parses_nested_template_elements() {
        // the count is split off at the last comma
        let name = TypeName::parse("Vec<std::array<int, 2>, 3>").expect("parse");
        assert_eq!(name.element(), "std::array<int, 2>");
        assert_eq!(name.count(), 3);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let name = TypeName::parse("  Vec< double , 6 > ").expect("parse");
        assert_eq!(name.element(), "double");
        assert_eq!(name.count(), 6);
    }

    #[test]
    fn rejects_malformed_names() {
        assert_eq!(
            TypeName::parse("Vec").unwrap_err(),
            TypeNameError::MissingTemplateArgs
        );
        assert_eq!(
            TypeName::parse("Vec<float, 3").unwrap_err(),
            TypeNameError::UnterminatedTemplateArgs
        );
        assert_eq!(
            TypeName::parse("<float, 3>").unwrap_err(),
            TypeNameError::EmptyBase
        );
        assert_eq!(
            TypeName::parse("Vec<float>").unwrap_err(),
            TypeNameError::MissingCount
        );
        assert_eq!(
            TypeName::parse("Vec<float, N>").unwrap_err(),
            TypeNameError::InvalidCount("N".to_string())
        );
    }

    #[test]
    fn pattern_matches_on_base_name_only() {
        let pattern = TypeNamePattern::template_base("Vec");
        let vec3f = TypeName::parse("Vec<float, 3>").expect("parse");
        let color = TypeName::parse("Color<float, 3>").expect("parse");
        assert!(pattern.matches(&vec3f));
        assert!(
            !pattern.matches(&color),
            "a Vec pattern must not claim Color values"
        );
    }

    #[test]
    fn display_round_trips_the_canonical_spelling() {
        let name = TypeName::parse("Vec<float, 3>").expect("parse");
        assert_eq!(name.to_string(), "Vec<float, 3>");
    }
}
