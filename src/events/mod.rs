pub mod keyboard;
pub mod pointer;
pub mod window;

pub use keyboard::wire_camera_keys;
pub use pointer::wire_pointer_move;
pub use window::wire_resize;
