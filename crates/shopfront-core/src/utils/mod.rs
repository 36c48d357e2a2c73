//! Utility types and functions for shopfront.
//!
//! - [`MultiValueDict`]: a dictionary holding several values per key, used
//!   for submitted form fields and uploaded files.

mod multi_value_dict;

pub use multi_value_dict::MultiValueDict;
