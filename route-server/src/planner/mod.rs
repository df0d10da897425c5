//! Route search over the network index.
//!
//! The search minimizes the number of distinct trains boarded, not distance
//! or travel time. It is a pure query over the immutable [`NetworkIndex`]:
//! each call owns its own frontier and visited sets, so concurrent searches
//! over a shared index need no coordination.
//!
//! [`NetworkIndex`]: crate::network::NetworkIndex

mod search;

pub use search::find_route;
