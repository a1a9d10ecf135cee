pub mod builder;
pub mod describe;
pub mod field;
pub mod presets;
pub mod validate;

pub use builder::ExpressionParts;
pub use describe::describe;
pub use field::{check_field, classify, FieldError, FieldKind, FieldSpec, FIELD_SPECS};
pub use presets::{Preset, PRESETS};
pub use validate::{validate, Validation};
