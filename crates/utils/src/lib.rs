// ABOUTME: Stateless text utilities for markup, durations, sizes, titles, and class listings.
// ABOUTME: Re-exports the public functions of each module at the crate root.

//! Small, independent string transforms:
//!
//! - [`html`]: HTML encoding and `<a>` construction.
//! - [`markup`]: best-effort closing of tags left open in cut markup.
//! - [`truncate`]: length limiting with an ellipsis.
//! - [`datetime`]: second counts to and from clock-style strings.
//! - [`strings`]: title sort keys and human-readable byte sizes.
//! - [`pattern`]: regex validation.
//! - [`classes`]: tag/class descriptor counts.
//!
//! # Example
//!
//! ```
//! use thesolver_utils::{duration_human, title_sort_key, truncate};
//!
//! assert_eq!(duration_human(3725), "1:02:05");
//! assert_eq!(title_sort_key("The Hobbit"), "Hobbit, The");
//! assert_eq!(truncate("The quick brown fox", 12), "The quick...");
//! ```

pub mod classes;
pub mod datetime;
pub mod error;
pub mod html;
pub mod markup;
pub mod pattern;
pub mod strings;
pub mod truncate;

pub use classes::{collect_elements, enumerate_class_descriptors, ClassOptions, ElementClasses};
pub use datetime::{duration_hhmmss, duration_human, parse_duration_seconds};
pub use error::SolverError;
pub use html::{encode, hyperlink, Hyperlink, LinkTitle};
pub use markup::{close_markup, close_markup_with, CloseOptions};
pub use pattern::valid;
pub use strings::{byte_size_human, title_sort_key, title_sort_key_with, DEFAULT_PRECISION};
pub use truncate::{truncate, truncate_with, TruncateOptions};
