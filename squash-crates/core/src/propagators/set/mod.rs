mod disjoint;
mod member;
mod subset_eq;

pub(crate) use disjoint::*;
pub(crate) use member::*;
pub(crate) use subset_eq::*;
