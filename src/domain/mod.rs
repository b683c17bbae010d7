// Domain layer: demo data model and the transport port. No I/O here.

pub mod model;
pub mod ports;
