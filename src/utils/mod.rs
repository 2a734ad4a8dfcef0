//! Various unsorted geometrical and logical operators.

pub(crate) use self::consts::*;

mod consts;
