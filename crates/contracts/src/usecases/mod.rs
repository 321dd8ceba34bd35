pub mod u501_create_order;
