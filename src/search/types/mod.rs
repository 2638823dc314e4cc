mod item;
mod page;

pub use item::SearchItem;
pub use page::SearchResponsePage;
