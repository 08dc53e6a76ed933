extern crate alloc;

mod abilities;
mod common;
mod items;
mod mons;

#[cfg(test)]
pub mod test_util;

pub use abilities::*;
pub use common::*;
pub use items::*;
pub use mons::*;
