mod ray;
mod ray_scatter;
mod shadow_casting;

pub use ray::{Ray, RayInformation};
pub use ray_scatter::RayScatter;
pub use shadow_casting::{RayAngleInformation, ShadowCasting};
