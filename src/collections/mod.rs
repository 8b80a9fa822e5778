//! Collection Types.

pub mod shared_list;
