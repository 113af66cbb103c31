pub mod card;
pub mod columns;
pub mod convert;
pub mod domain;
pub mod error;
pub mod extract;
pub mod row;
pub mod types;

pub use card::{build_contact, Card, Property, PropertyValue};
pub use convert::{ConvertOptions, Converter, RunDiagnostics};
pub use domain::*;
pub use error::CoreError;
pub use row::{GroupProbe, GroupSlot, GroupSlots, Row, RowDecoder, UnhandledColumns};
pub use types::{AttributeClass, EntryType, TypeMapper, TypeMappers};
