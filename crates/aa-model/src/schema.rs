//! Schemas: ordered collections of column specifications plus
//! schema-level policy.
//!
//! Schemas are immutable once constructed. The feature layer for each
//! dataset family is built once at startup by extending the episode
//! schema with derived-column specifications; nothing mutates a schema
//! after `new`/`extend` returns.

use crate::column::{ColumnMatcher, ColumnSpec};
use crate::error::SchemaError;

#[derive(Debug, Clone)]
pub struct Schema {
    name: String,
    specs: Vec<ColumnSpec>,
    strict: bool,
}

impl Schema {
    /// Build a schema, enforcing the at-most-one-unique-column
    /// invariant at construction time.
    pub fn new(name: &str, specs: Vec<ColumnSpec>) -> Result<Self, SchemaError> {
        check_unique_columns(name, &specs)?;
        Ok(Self {
            name: name.to_string(),
            specs,
            strict: false,
        })
    }

    /// Strict schemas reject datasets containing any column outside
    /// the specification's closure.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Derive a new schema by appending further specifications.
    ///
    /// A fixed-name spec whose name equals an existing fixed-name spec
    /// replaces it; this is how a feature schema tightens an episode
    /// bound (e.g. age [0,130] to the adult cohort's [18,130]).
    /// The receiver is unchanged.
    pub fn extend(&self, name: &str, extra: Vec<ColumnSpec>) -> Result<Self, SchemaError> {
        let mut specs = self.specs.clone();
        for spec in extra {
            let replaced = match &spec.matcher {
                ColumnMatcher::Name(new_name) => specs.iter_mut().find(|existing| {
                    matches!(&existing.matcher, ColumnMatcher::Name(n) if n == new_name)
                }),
                ColumnMatcher::Pattern { .. } => None,
            };
            match replaced {
                Some(slot) => *slot = spec,
                None => specs.push(spec),
            }
        }
        check_unique_columns(name, &specs)?;
        Ok(Self {
            name: name.to_string(),
            specs,
            strict: self.strict,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specs(&self) -> &[ColumnSpec] {
        &self.specs
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// The at-most-one column spec flagged unique, if any.
    pub fn unique_spec(&self) -> Option<&ColumnSpec> {
        self.specs.iter().find(|spec| spec.unique)
    }
}

fn check_unique_columns(name: &str, specs: &[ColumnSpec]) -> Result<(), SchemaError> {
    let mut first: Option<&str> = None;
    for spec in specs {
        if !spec.unique {
            continue;
        }
        match first {
            None => first = Some(spec.matcher.label()),
            Some(existing) => {
                return Err(SchemaError::MultipleUniqueColumns {
                    schema: name.to_string(),
                    first: existing.to_string(),
                    second: spec.matcher.label().to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{SemanticType, Value};

    #[test]
    fn two_unique_columns_rejected() {
        let specs = vec![
            ColumnSpec::new("visit_id", SemanticType::Int64).unique(),
            ColumnSpec::new("patient_id", SemanticType::Int64).unique(),
        ];
        let err = Schema::new("episode", specs).unwrap_err();
        assert!(matches!(err, SchemaError::MultipleUniqueColumns { .. }));
    }

    #[test]
    fn extend_replaces_same_named_spec() {
        let base = Schema::new(
            "episode",
            vec![
                ColumnSpec::new("admiage", SemanticType::Float64)
                    .range(Value::Int(0), Value::Int(130))
                    .unwrap(),
            ],
        )
        .unwrap()
        .strict();

        let features = base
            .extend(
                "features",
                vec![
                    ColumnSpec::new("admiage", SemanticType::Float64)
                        .range(Value::Int(18), Value::Int(130))
                        .unwrap(),
                    ColumnSpec::new("gender_cat", SemanticType::Str),
                ],
            )
            .unwrap();

        // Base schema untouched, derived schema replaces + appends.
        assert_eq!(base.specs().len(), 1);
        assert_eq!(features.specs().len(), 2);
        assert!(features.is_strict());
        assert_eq!(features.name(), "features");
    }
}
