mod price;

pub use price::*;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

use crate::Error;

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
#[serde(try_from = "String")]
pub enum Course {
    Starter,
    Main,
    Dessert,
}

impl Course {
    /// Heading used by the menu views, e.g. "Starters".
    pub fn plural(&self) -> &'static str {
        match self {
            Course::Starter => "Starters",
            Course::Main => "Mains",
            Course::Dessert => "Desserts",
        }
    }
}

/// Course selector of the filter view. `All` lets every course through.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
#[serde(try_from = "String")]
pub enum CourseFilter {
    #[default]
    All,
    Starter,
    Main,
    Dessert,
}

impl TryFrom<String> for Course {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse().map_err(|_| Error::InvalidCourse(value))
    }
}

impl TryFrom<String> for CourseFilter {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse().map_err(|_| Error::InvalidCourse(value))
    }
}

impl CourseFilter {
    pub fn matches(&self, course: Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Starter => course == Course::Starter,
            CourseFilter::Main => course == Course::Main,
            CourseFilter::Dessert => course == Course::Dessert,
        }
    }
}

impl From<Course> for CourseFilter {
    fn from(value: Course) -> Self {
        match value {
            Course::Starter => CourseFilter::Starter,
            Course::Main => CourseFilter::Main,
            Course::Dessert => CourseFilter::Dessert,
        }
    }
}

#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u64,
    #[validate(
        length(min = 1, max = 80),
        custom(function = "validate_name_not_blank")
    )]
    pub name: String,
    pub price: Price,
    pub course: Course,
}

fn validate_name_not_blank(name: &str) -> Result<(), validator::ValidationError> {
    if name.trim().is_empty() {
        let mut error = validator::ValidationError::new("blank_name");
        error.message = Some(std::borrow::Cow::from("Name must not be blank"));
        return Err(error);
    }

    Ok(())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CourseCounts {
    pub starter: usize,
    pub main: usize,
    pub dessert: usize,
}

impl CourseCounts {
    pub fn get(&self, course: Course) -> usize {
        match course {
            Course::Starter => self.starter,
            Course::Main => self.main,
            Course::Dessert => self.dessert,
        }
    }

    pub fn increment(&mut self, course: Course) {
        match course {
            Course::Starter => self.starter += 1,
            Course::Main => self.main += 1,
            Course::Dessert => self.dessert += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.starter + self.main + self.dessert
    }

    /// Counts in the fixed course order.
    pub fn iter(&self) -> impl Iterator<Item = (Course, usize)> + '_ {
        Course::VARIANTS
            .iter()
            .map(|course| (*course, self.get(*course)))
    }
}

impl FromIterator<Course> for CourseCounts {
    fn from_iter<T: IntoIterator<Item = Course>>(iter: T) -> Self {
        let mut counts = CourseCounts::default();

        for course in iter {
            counts.increment(course);
        }

        counts
    }
}
