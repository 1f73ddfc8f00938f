//! ADIF (Amateur Data Interchange Format) records and parser
//! Reference: https://adif.org/

pub mod parser;
pub mod record;

pub use parser::{parse_adif, AdifFile};
pub use record::Record;
