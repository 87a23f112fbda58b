mod account;
mod account_db;
mod amenity;
mod amenity_db;
mod booking;
mod booking_db;
mod category;
mod category_db;
mod facility;
mod facility_db;
mod house_rule;
mod house_rule_db;
mod review;
mod review_db;
mod room;
mod room_db;
mod wishlist;
mod wishlist_db;

pub use account_db::AccountRepository;
pub use amenity_db::AmenityRepository;
pub use booking_db::BookingRepository;
pub use category_db::CategoryRepository;
pub use facility_db::FacilityRepository;
pub use house_rule_db::HouseRuleRepository;
pub use review_db::ReviewRepository;
pub use room_db::RoomRepository;
pub use wishlist_db::WishlistRepository;

pub use account::AccountRepo;
pub use amenity::AmenityRepo;
pub use booking::BookingRepo;
pub use category::CategoryRepo;
pub use facility::FacilityRepo;
pub use house_rule::HouseRuleRepo;
pub use review::ReviewRepo;
pub use room::RoomRepo;
pub use wishlist::WishlistRepo;
