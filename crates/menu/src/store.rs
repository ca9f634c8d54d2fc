use std::collections::HashSet;
use std::str::FromStr;

use chefmenu_shared::{Course, Error, MenuItem, Price};
use validator::Validate;

/// Raw values of the add form, before any parsing.
#[derive(Validate, Clone, Debug, Default)]
pub struct AddItemInput {
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    #[validate(length(min = 1))]
    pub price: String,
    pub course: String,
}

impl AddItemInput {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            course: course.into(),
        }
    }

    fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            price: self.price.trim().to_owned(),
            course: self.course.trim().to_owned(),
        }
    }
}

/// Owner of the menu collection.
///
/// Ids come from a counter that only moves forward, so an id is never handed
/// out twice even after its item has been removed.
#[derive(Debug)]
pub struct ItemStore {
    items: Vec<MenuItem>,
    next_id: u64,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Builds a store around existing items. Fails on duplicate ids and on
    /// items whose name would not pass the add form.
    pub fn seeded(items: Vec<MenuItem>) -> chefmenu_shared::Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());

        for item in items.iter() {
            if !seen.insert(item.id) {
                return Err(Error::DuplicateId(item.id));
            }

            item.validate()?;
        }

        let next_id = items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(1, |id| id.saturating_add(1));

        Ok(Self { items, next_id })
    }

    pub fn add(&mut self, input: AddItemInput) -> chefmenu_shared::Result<MenuItem> {
        let input = input.trimmed();
        input.validate()?;

        let price = Price::from_str(&input.price)?;
        let course =
            Course::from_str(&input.course).map_err(|_| Error::InvalidCourse(input.course))?;

        let Some(following) = self.next_id.checked_add(1) else {
            chefmenu_shared::bail!("menu item ids exhausted");
        };

        let item = MenuItem {
            id: self.next_id,
            name: input.name,
            price,
            course,
        };

        self.next_id = following;
        self.items.push(item.clone());

        tracing::debug!(
            id = item.id,
            name = %item.name,
            course = %item.course,
            price = %item.price,
            "menu item added"
        );

        Ok(item)
    }

    pub fn remove(&mut self, id: u64) -> chefmenu_shared::Result<MenuItem> {
        let Some(position) = self.items.iter().position(|item| item.id == id) else {
            chefmenu_shared::not_found!("menu item {id}");
        };

        let item = self.items.remove(position);

        tracing::debug!(id, name = %item.name, "menu item removed");

        Ok(item)
    }

    pub fn get(&self, id: u64) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Read-only snapshot, in insertion order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_is_trimmed_before_validation() {
        let mut store = ItemStore::new();

        let item = store
            .add(AddItemInput::new("  Soup of the day ", " 35.5 ", " starter "))
            .unwrap();

        assert_eq!(item.name, "Soup of the day");
        assert_eq!(item.price, Price::from_cents(3550));
        assert_eq!(item.course, Course::Starter);
    }

    #[test]
    fn test_seeded_continues_after_largest_id() {
        let mut store = ItemStore::seeded(vec![MenuItem {
            id: 41,
            name: "Cake".to_owned(),
            price: Price::from_cents(6000),
            course: Course::Dessert,
        }])
        .unwrap();

        let item = store.add(AddItemInput::new("Tart", "55", "Dessert")).unwrap();

        assert_eq!(item.id, 42);
    }
}
