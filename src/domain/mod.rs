// Domain layer: resource models and the repository ports the services
// depend on. No transport dependencies here.

pub mod model;
pub mod ports;
