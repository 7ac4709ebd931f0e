//! Entity models and request payloads

pub mod dining_table;
pub mod restaurant;

pub use dining_table::{
    DiningTable, DiningTableCreate, DiningTableUpdate, TableStatus, TableStatusUpdate,
};
pub use restaurant::{Restaurant, RestaurantCreate, RestaurantUpdate};
