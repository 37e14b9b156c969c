//! Index structures built during aggregation.

pub mod weight_table;

pub use weight_table::WordWeightTable;
