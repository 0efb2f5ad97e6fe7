// Domain layer: Planka wire models and the ports the board service talks through.

pub mod model;
pub mod ports;
