// Domain layer: grid and verdict models plus the configuration port.

pub mod model;
pub mod ports;
