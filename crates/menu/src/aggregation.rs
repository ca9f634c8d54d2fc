use chefmenu_shared::{Course, CourseCounts, CourseFilter, MenuItem, Price};
use serde::Serialize;
use strum::VariantArray;

/// Menu Aggregator
///
/// Stateless domain service computing the derived values every menu view
/// shows: filtered lists, per-course counts and average prices.
///
/// Filtering borrows from the snapshot it is given; only the view models
/// (`MenuOverview`, `MenuQuery`) own copies of the items.
pub struct MenuAggregator;

/// One course block of the home overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSection {
    pub course: Course,
    pub count: usize,
    pub average_price: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuOverview {
    pub sections: Vec<CourseSection>,
    pub total: usize,
}

/// Result of a filter query: the shown items, totals per course over the
/// whole menu, and the average price of what is shown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuQuery {
    pub filtered_items: Vec<MenuItem>,
    pub counts: CourseCounts,
    pub average_price: String,
}

impl MenuAggregator {
    /// Items whose course passes `filter` and whose name contains `search`,
    /// ignoring case. Relative order of `items` is kept; an empty `search`
    /// matches every name.
    pub fn filter<'a>(
        items: &'a [MenuItem],
        filter: CourseFilter,
        search: &str,
    ) -> Vec<&'a MenuItem> {
        let needle = search.to_lowercase();

        items
            .iter()
            .filter(|item| filter.matches(item.course))
            .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn count_by_course<'a>(items: impl IntoIterator<Item = &'a MenuItem>) -> CourseCounts {
        items.into_iter().map(|item| item.course).collect()
    }

    /// Mean price rounded half-up to a whole cent. Empty input averages to
    /// `0.00`.
    ///
    /// The mean is computed on integer cents, so `[0.01, 0.02]` gives `0.02`
    /// and `[0.01, 0.01, 0.02]` gives `0.01` with no float drift.
    pub fn average_price<'a>(items: impl IntoIterator<Item = &'a MenuItem>) -> Price {
        let (total, count) = items
            .into_iter()
            .fold((0u128, 0u128), |(total, count), item| {
                (total + u128::from(item.price.cents()), count + 1)
            });

        if count == 0 {
            return Price::ZERO;
        }

        // floor(total / count + 1/2)
        let cents = (2 * total + count) / (2 * count);

        Price::from_cents(cents as u64)
    }

    pub fn average_price_by_course(items: &[MenuItem], course: Course) -> Price {
        Self::average_price(Self::filter(items, course.into(), ""))
    }

    pub fn overview(items: &[MenuItem]) -> MenuOverview {
        let sections = Course::VARIANTS
            .iter()
            .map(|course| {
                let in_course = Self::filter(items, (*course).into(), "");

                CourseSection {
                    course: *course,
                    count: in_course.len(),
                    average_price: Self::average_price(in_course.iter().copied()).to_string(),
                    items: in_course.into_iter().cloned().collect(),
                }
            })
            .collect();

        MenuOverview {
            sections,
            total: items.len(),
        }
    }

    pub fn query(items: &[MenuItem], filter: CourseFilter, search: &str) -> MenuQuery {
        let filtered = Self::filter(items, filter, search);

        MenuQuery {
            counts: Self::count_by_course(items),
            average_price: Self::average_price(filtered.iter().copied()).to_string(),
            filtered_items: filtered.into_iter().cloned().collect(),
        }
    }
}
