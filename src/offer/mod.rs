//! Offer letter helpers: letter numbering and Rupiah amounts.
//!
//! These feed template placeholders of the rendered price offer. The
//! rendering itself lives outside this crate.

mod format;
mod numbering;

pub use format::format_rupiah;
pub use numbering::*;
