mod error;
pub mod menu;

pub use error::*;
pub use menu::{Course, CourseCounts, CourseFilter, MenuItem, Price, PriceError};
