pub mod camera;
pub mod carousel;
pub mod constants;
pub mod math;
pub mod particles;
pub mod projection;
pub mod scene;
pub mod tween;

pub use camera::*;
pub use carousel::*;
pub use constants::*;
pub use math::*;
pub use particles::*;
pub use projection::*;
pub use scene::*;
pub use tween::*;
