// Domain layer: records, print configuration, batch payloads and the ports
// (storage, configuration, pipeline) the conversion driver depends on.

pub mod model;
pub mod ports;
