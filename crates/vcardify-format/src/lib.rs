pub mod decode;
pub mod error;
pub mod report;
pub mod rows;
pub mod vcf;

pub use error::{FormatError, Result};
