pub mod address;
pub mod multi_entry;
pub mod name;

pub use address::extract_addresses;
pub use multi_entry::{extract_multi_entry, split_multi_value, strip_star};
pub use name::{resolve_name, ResolvedName};
