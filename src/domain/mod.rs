// Domain layer: value ranges, field kinds and the resolver port. No I/O here.

pub mod model;
pub mod ports;
