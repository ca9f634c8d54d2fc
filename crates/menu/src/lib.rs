pub mod aggregation;
pub mod store;

pub use aggregation::{CourseSection, MenuAggregator, MenuOverview, MenuQuery};
pub use store::{AddItemInput, ItemStore};
