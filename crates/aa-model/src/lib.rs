pub mod column;
pub mod constraint;
pub mod error;
pub mod schema;
pub mod value;
pub mod violation;

pub use column::{ColumnMatcher, ColumnSpec};
pub use constraint::{Constraint, ConstraintKind};
pub use error::{Result, SchemaError};
pub use schema::Schema;
pub use value::{CoercionPolicy, SemanticType, Value, format_numeric};
pub use violation::{RowDiagnostics, Violation};
