// Domain layer: scoring models and the ports the shell is configured through.

pub mod model;
pub mod ports;
