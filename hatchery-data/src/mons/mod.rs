mod nature;
mod stat;

pub use nature::Nature;
pub use stat::{
    IvSpread,
    Stat,
};
