use crate::modules::inventory::core::item::Item;

pub struct ItemBuilder {
    inner: Item,
}

impl Default for ItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ItemBuilder {
    pub fn new() -> Self {
        Self {
            inner: Item {
                name: "Apple".to_string(),
                price: 1.5,
                description: None,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn price(mut self, v: f64) -> Self {
        self.inner.price = v;
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn build(self) -> Item {
        self.inner
    }
}
