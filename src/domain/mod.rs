// Domain layer: game model and the ports to speech and display providers.

pub mod model;
pub mod ports;
