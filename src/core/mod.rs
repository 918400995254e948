pub mod axis;
pub mod date;
pub mod month_grid;
pub mod range;
pub mod types;

pub use axis::{AxisTransform, Orientation, position_within_segment, segment_index};
pub use date::CalendarDate;
pub use month_grid::MonthGrid;
pub use range::DateRange;
pub use types::{Point, Rect, Viewport};
