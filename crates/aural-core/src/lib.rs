pub mod builder;
pub mod camera;
pub mod constants;
pub mod controls;
pub mod error;
pub mod lazy;
pub mod mesh;
pub mod picking;
pub mod room;
pub mod scene;
pub mod session;
pub mod tone;
pub mod wave;

pub use builder::*;
pub use camera::*;
pub use controls::*;
pub use error::*;
pub use lazy::*;
pub use picking::*;
pub use room::*;
pub use scene::*;
pub use session::*;
pub use tone::*;
pub use wave::*;
