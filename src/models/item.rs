/// A catalog item with a value and a cost.
///
/// The name is the unique identifier and the canonical sort key;
/// equality and hashing go through it.
#[derive(Debug, Clone)]
pub struct Item {
    pub name: String,
    pub value: u64,
    pub cost: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, value: u64, cost: u64) -> Self {
        Self {
            name: name.into(),
            value,
            cost,
        }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Item {}

impl std::hash::Hash for Item {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
