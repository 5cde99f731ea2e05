//! Range Query Tree - an array-backed segment tree.
//!
//! Point updates and arbitrary-range aggregate queries in O(log n) over any
//! associative operation with an identity element.
//!
//! # Quick Start
//!
//! ```
//! use range_query_tree::RangeQueryTree;
//!
//! let mut tree: RangeQueryTree<i64> = RangeQueryTree::build(vec![1, 3, 5, 7, 9, 11]).unwrap();
//! assert_eq!(tree.query(1, 4), Ok(24));
//!
//! tree.update(2, 100).unwrap();
//! assert_eq!(tree.query(1, 4), Ok(119));
//! assert_eq!(tree.query(0, 5), Ok(131));
//! ```
//!
//! Other operations are chosen with the second type parameter:
//!
//! ```
//! use range_query_tree::RangeQueryTree;
//! use range_query_tree::op::Min;
//!
//! let tree: RangeQueryTree<i32, Min<i32>> = RangeQueryTree::build(vec![4, -1, 8]).unwrap();
//! assert_eq!(tree.range(1..), Ok(-1));
//! ```

mod logging;

pub mod error;
pub mod op;
pub mod tree;

pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;
pub use op::Combine;
pub use tree::RangeQueryTree;
