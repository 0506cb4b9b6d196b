pub mod column;
pub mod config;
pub mod error;
pub mod frame;
pub mod resize;
pub mod size;
pub mod slots;
pub mod window;

pub use column::{effective_container_width, resolve_widths, PLACEHOLDER_WIDTH};
pub use config::WindowConfig;
pub use error::{ConfigError, ParseSizeError};
pub use frame::FrameScheduler;
pub use resize::{BoxSize, NodeId, ResizeBridge, ResizeChange};
pub use size::{resolve_row_height, SizePreset, DEFAULT_ROW_HEIGHT};
pub use slots::{render_slots, slots, Positioned, Slot, SlotKey};
pub use window::{
    compute_window, total_height, WindowCalculator, WindowInput, WindowState, WindowUpdate,
    DEFAULT_OVERHANG,
};
