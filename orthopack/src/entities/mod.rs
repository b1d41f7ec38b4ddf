mod container;
mod instance;
mod item;
mod layout;
mod placed_item;

#[doc(inline)]
pub use container::Container;
#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use layout::Layout;
#[doc(inline)]
pub use placed_item::PlacedItem;
