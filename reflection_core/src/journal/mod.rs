//! Journal module - persisted reflections and story progress.
//!
//! The journal consists of:
//! - **Entries**: immutable, denormalized records of a finished story
//! - **Progress**: the set of completed story titles
//! - **Storage**: the keyed-blob seam both collections persist through

mod entry;
mod manager;
mod storage;

pub use entry::*;
pub use manager::*;
pub use storage::*;
