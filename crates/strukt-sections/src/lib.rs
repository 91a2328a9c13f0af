//! Section-list search.
//!
//! A section list is an ascending sequence of boundary points in which every
//! element opens a section that the next element closes. `[5, 8, 30, 31]`
//! describes three sections: `[5, 8)`, `[8, 30)` and the final section
//! `[30, 31]`, which is closed on both ends so the last boundary still
//! belongs to it.
//!
//! All functions are pure lookups over caller-supplied slices. Sortedness is
//! a precondition, not something that is checked.
//!
//! # Example
//!
//! ```
//! use strukt_sections::{find_point_in_section, find_range_in_sections};
//!
//! let sections = [5, 8, 30, 31];
//! assert_eq!(find_point_in_section(27, &sections), Some(8));
//! assert_eq!(find_range_in_sections(6, 9, &sections), &[5, 8][..]);
//! ```

pub mod search;
pub use search::{
    find_point_in_section, find_range_in_sections, find_range_index_in_points,
    find_range_index_in_sections,
};
