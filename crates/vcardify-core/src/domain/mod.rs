pub mod address;
pub mod contact;
pub mod entry;

pub use address::Address;
pub use contact::{Contact, StructuredName};
pub use entry::{Entry, MultiEntry};
