// Domain layer: result model, tolerance constants and the solver port.

pub mod model;
pub mod ports;
