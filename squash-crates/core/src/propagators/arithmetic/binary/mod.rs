mod binary_less_or_equal;
mod binary_not_equals;

pub(crate) use binary_less_or_equal::*;
pub(crate) use binary_not_equals::*;
