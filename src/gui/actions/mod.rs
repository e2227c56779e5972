// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.

mod copy;    // src/gui/actions/copy.rs
mod search;  // src/gui/actions/search.rs

pub use copy::copy;
pub use search::search;
