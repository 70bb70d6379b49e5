mod item;
mod selection;

pub use item::Item;
pub use selection::Selection;
