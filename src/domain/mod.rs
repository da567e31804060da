// Domain layer: match records and the clock seam. No logic beyond derived values.

pub mod model;
pub mod ports;
