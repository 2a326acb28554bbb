use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MenuEntry<'a> {
    name: Cow<'a, str>,
    sides: Cow<'a, str>,
    price: Cow<'a, str>, // kept as written, ex. "$8.00"
}

impl<'a> MenuEntry<'a> {
    pub fn new(
        name: impl Into<Cow<'a, str>>,
        sides: impl Into<Cow<'a, str>>,
        price: impl Into<Cow<'a, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            sides: sides.into(),
            price: price.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sides(&self) -> &str {
        &self.sides
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    /// Case-insensitive substring search against the sides, or against the name
    /// when there are no sides. The name is never consulted while sides are
    /// present, so "chicken" does not match "Grilled Chicken" served with rice.
    pub fn matches(&self, term: &str) -> bool {
        let searched = if self.sides.is_empty() {
            &self.name
        } else {
            &self.sides
        };
        searched.to_lowercase().contains(&term.to_lowercase())
    }
}
