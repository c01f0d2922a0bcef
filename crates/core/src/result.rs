//! Result type definition for search operations.

use crate::error::Error;

/// The standard Result type for Wikidart operations.
///
/// Every fallible operation in the core returns this type. Errors raised by a
/// [`NeighborSource`](crate::NeighborSource) travel through it unmodified.
///
/// # Examples
///
/// ```ignore
/// fn first_link(source_links: Vec<String>) -> Result<String> {
///     source_links
///         .into_iter()
///         .next()
///         .ok_or_else(|| Error::parse("Main_Page", "page has no links"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;
