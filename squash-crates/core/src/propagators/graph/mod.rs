mod one_neighbour;
mod path_no_cycle;

pub(crate) use one_neighbour::*;
pub(crate) use path_no_cycle::*;
