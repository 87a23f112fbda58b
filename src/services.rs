pub mod amenity;
pub mod auth;
pub mod booking;
pub mod facility;
pub mod house_rule;
pub mod review;
pub mod room;
pub mod wishlist;
