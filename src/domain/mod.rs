// Domain layer: number model and ports (interfaces) toward the outside world.

pub mod model;
pub mod ports;
