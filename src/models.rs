pub mod account;
pub mod amenity;
pub mod booking;
pub mod category;
pub mod facility;
pub mod house_rule;
pub mod review;
pub mod room;
pub mod types;
pub mod wishlist;
