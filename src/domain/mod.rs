// Domain layer: catalog records and the read port the renderer depends on.

pub mod model;
pub mod ports;
