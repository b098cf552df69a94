use strum::{EnumIter, EnumString};

/// Canonical name of a primitive value's type, as printed on the
/// `Variable is of type:` line.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, EnumIter, EnumString, strum::Display)]
pub enum TypeName {
    #[strum(serialize = "string")]
    String,
    #[strum(serialize = "bool")]
    Bool,
    #[strum(serialize = "uint8")]
    Uint8,
    #[strum(serialize = "float64")]
    Float64,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::TypeName;

    #[test]
    fn names_parse_back() {
        for name in TypeName::iter() {
            assert_eq!(TypeName::from_str(&name.to_string()), Ok(name));
        }
    }

    #[test]
    fn rust_spellings_are_not_names() {
        assert!(TypeName::from_str("u8").is_err());
        assert!(TypeName::from_str("f64").is_err());
    }
}
