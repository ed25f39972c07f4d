//! In-place patching of line-oriented config files.
//!
//! Each patcher operates on a [`ConfigDocument`]: an ordered sequence of raw
//! text lines loaded from disk, mutated at exactly one point, and written
//! back wholesale. Three dialects are supported:
//!
//! - `directive` - single-line verb/value directives (bspwmrc)
//! - `binding` - two-line trigger+action records (sxhkdrc)
//! - `keyvalue` / `modules` - `key = value` assignments (polybar)
//!
//! Unrelated lines are never reordered or rewritten, and no state is
//! retained between calls.

pub mod binding;
pub mod directive;
pub mod document;
pub mod keyvalue;
pub mod modules;

pub use directive::Placement;
pub use document::ConfigDocument;
pub use keyvalue::{FieldResult, KeyValueField, split_assignment};
