use crate::math::Real;

pub(crate) const PI: Real = 3.14159265358979323846264338327950288;
pub(crate) const TWO_PI: Real = 6.28318530717958647692528676655900577;
pub(crate) const FRAC_PI_2: Real = 1.57079632679489661923132169163975144;
