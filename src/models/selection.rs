use crate::models::Item;

/// A candidate subset of catalog items plus derived totals.
///
/// Items are kept sorted by name so two selections over the same
/// subset always compare and print identically. Totals are computed
/// once at construction; error is a pure function of the totals and
/// is never stored, so it cannot go stale.
///
/// Every constructor returns an independent snapshot; deriving a
/// neighbor or child never touches the parent.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    items: Vec<&'a Item>,
    total_value: u64,
    total_cost: u64,
}

impl<'a> Selection<'a> {
    /// The empty selection (tree-search root).
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_value: 0,
            total_cost: 0,
        }
    }

    /// Build a selection from item references, sorting canonically
    /// and summing totals.
    pub fn new(mut items: Vec<&'a Item>) -> Self {
        items.sort_by(|a, b| a.name.cmp(&b.name));
        let total_value = items.iter().map(|i| i.value).sum();
        let total_cost = items.iter().map(|i| i.cost).sum();
        Self {
            items,
            total_value,
            total_cost,
        }
    }

    /// A new selection with `item` added (add-move / tree child).
    pub fn with_item(&self, item: &'a Item) -> Self {
        let mut items = self.items.clone();
        items.push(item);
        Self::new(items)
    }

    /// A new selection with the named item removed (remove-move).
    pub fn without_item(&self, name: &str) -> Self {
        let items = self
            .items
            .iter()
            .copied()
            .filter(|i| i.name != name)
            .collect();
        Self::new(items)
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.iter().any(|i| i.name == item.name)
    }

    pub fn items(&self) -> &[&'a Item] {
        &self.items
    }

    pub fn total_value(&self) -> u64 {
        self.total_value
    }

    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Budget overage plus value shortfall. Zero means the selection
    /// fits the budget and meets the target.
    pub fn error(&self, target: u64, budget: u64) -> u64 {
        self.total_cost.saturating_sub(budget) + target.saturating_sub(self.total_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Item> {
        vec![
            Item::new("Chair", 4, 3),
            Item::new("Apple", 3, 2),
            Item::new("Bread", 5, 4),
        ]
    }

    #[test]
    fn test_totals_match_item_sums() {
        let items = catalog();
        let sel = Selection::new(items.iter().collect());
        assert_eq!(sel.total_value(), 12);
        assert_eq!(sel.total_cost(), 9);
    }

    #[test]
    fn test_canonical_order_regardless_of_insertion() {
        let items = catalog();
        let sel = Selection::new(items.iter().collect());
        let names: Vec<&str> = sel.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Bread", "Chair"]);
    }

    #[test]
    fn test_with_item_leaves_parent_untouched() {
        let items = catalog();
        let parent = Selection::new(vec![&items[1]]);
        let child = parent.with_item(&items[2]);

        assert_eq!(parent.len(), 1);
        assert_eq!(child.len(), 2);
        assert_eq!(child.total_value(), 8);
        assert_eq!(child.total_cost(), 6);
    }

    #[test]
    fn test_without_item() {
        let items = catalog();
        let sel = Selection::new(items.iter().collect());
        let smaller = sel.without_item("Bread");

        assert_eq!(smaller.len(), 2);
        assert!(!smaller.contains(&items[2]));
        assert_eq!(smaller.total_value(), 7);
        assert_eq!(sel.len(), 3);
    }

    #[test]
    fn test_error_zero_iff_feasible_and_sufficient() {
        let items = catalog();
        let sel = Selection::new(vec![&items[2]]); // Bread: v5 c4

        assert_eq!(sel.error(5, 4), 0);
        // Value shortfall only
        assert_eq!(sel.error(8, 4), 3);
        // Budget overage only
        assert_eq!(sel.error(5, 1), 3);
        // Both at once
        assert_eq!(sel.error(8, 1), 6);
    }

    #[test]
    fn test_empty_selection_error() {
        let sel = Selection::empty();
        assert_eq!(sel.error(10, 5), 10);
        assert_eq!(sel.error(0, 5), 0);
    }
}
