// Domain layer: corpus models, ports, and the text-analysis services.
// Services are plain functions and types with no IO.

pub mod model;
pub mod ports;

pub mod services;
