mod color;
mod device;
mod element;
mod options;
mod state;
mod widget;

pub use device::{DeviceProfile, EventNames, PointerKind};
pub use options::{ColorOptions, EdgeStyle, ElementId, ItemOptions};
pub use widget::{Draggable, DraggableError};
