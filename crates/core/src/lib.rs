//! # Wikidart Core
//!
//! Bounded, deduplicated search over a link graph that is discovered while
//! it is being searched.
//!
//! - [`SearchTree`] owns every discovered page and guarantees that no page
//!   appears twice.
//! - [`Explorer`] runs the staged, depth-bounded search and returns the
//!   first node matching the target.
//! - [`NeighborSource`] is the seam to whatever produces a page's links.
//!
//! ```ignore
//! let mut tree = SearchTree::new("Rust_(programming_language)");
//! let mut explorer = Explorer::new(&mut tree, &source, "Ferris");
//! if let Some(found) = explorer.run(DEFAULT_MAX_DEPTH).await? {
//!     for step in tree.path_steps(found)? {
//!         println!("{}\t{}", step.depth, step.value);
//!     }
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod explorer;
pub mod node;
pub mod observer;
pub mod result;
pub mod source;
pub mod tree;

pub use error::Error;
pub use explorer::{DEFAULT_MAX_DEPTH, Explorer};
pub use node::{Node, NodeId, PathStep};
pub use observer::{NoopObserver, Observer};
pub use result::Result;
pub use source::{MemorySource, NeighborSource};
pub use tree::SearchTree;
