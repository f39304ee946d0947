//! Enum members produced by the enumerators

use enumgen_db::Value;

use crate::error::{CodegenError, Result};

/// One (name, value) pair of a generated enum.
///
/// The name is written verbatim; no identifier sanitization happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub name: String,
    pub value: Value,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Number `names` 1..N in the order given
pub fn numbered_members<I>(names: I) -> Vec<EnumMember>
where
    I: IntoIterator<Item = String>,
{
    names
        .into_iter()
        .zip(1..)
        .map(|(name, position): (String, i32)| EnumMember::new(name, position))
        .collect()
}

/// Pair each name with the value at the same position
pub fn paired_members(names: Vec<String>, values: Vec<Value>) -> Result<Vec<EnumMember>> {
    if names.len() != values.len() {
        return Err(CodegenError::ColumnLengthMismatch {
            names: names.len(),
            values: values.len(),
        });
    }

    Ok(names
        .into_iter()
        .zip(values)
        .map(|(name, value)| EnumMember { name, value })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_members_start_at_one() {
        let members = numbered_members(vec!["Sword".into(), "Shield".into(), "Potion".into()]);
        assert_eq!(
            members,
            vec![
                EnumMember::new("Sword", 1),
                EnumMember::new("Shield", 2),
                EnumMember::new("Potion", 3),
            ]
        );
    }

    #[test]
    fn test_paired_members() {
        let members = paired_members(
            vec!["Strength".into(), "Agility".into()],
            vec![Value::Short(10), Value::Short(20)],
        )
        .unwrap();
        assert_eq!(members[1], EnumMember::new("Agility", Value::Short(20)));
    }

    #[test]
    fn test_paired_members_length_mismatch() {
        let err = paired_members(vec!["A".into()], vec![]).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::ColumnLengthMismatch { names: 1, values: 0 }
        ));
    }
}
