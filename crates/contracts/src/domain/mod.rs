pub mod a001_dining_table;
pub mod a002_product;
pub mod a003_user;
