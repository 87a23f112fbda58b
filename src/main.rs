use hearth::config::Config;
use hearth::db::Db;
use hearth::db::repo::{
    AccountRepository, AmenityRepository, BookingRepository, CategoryRepository, FacilityRepository,
    HouseRuleRepository, ReviewRepository, RoomRepository, WishlistRepository,
};
use hearth::http::{self, AppState};
use hearth::services::amenity::AmenityService;
use hearth::services::auth::AuthService;
use hearth::services::booking::BookingService;
use hearth::services::facility::FacilityService;
use hearth::services::house_rule::HouseRuleService;
use hearth::services::review::ReviewService;
use hearth::services::room::RoomService;
use hearth::services::wishlist::WishlistService;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cfg = Config::from_env()?;

    // Setup database and run migrations if needed
    let db = Arc::new(Db::new(&cfg.database_url, cfg.db_pool_size)?);
    db.init().await?;

    let room_repo = Arc::new(RoomRepository::new(db.clone()));
    let category_repo = Arc::new(CategoryRepository::new(db.clone()));

    let state = AppState {
        auth: Arc::new(AuthService::new(Arc::new(AccountRepository::new(db.clone())))),
        rooms: Arc::new(RoomService::new(room_repo.clone(), category_repo.clone())),
        amenities: Arc::new(AmenityService::new(Arc::new(AmenityRepository::new(db.clone())))),
        facilities: Arc::new(FacilityService::new(Arc::new(FacilityRepository::new(db.clone())))),
        house_rules: Arc::new(HouseRuleService::new(Arc::new(HouseRuleRepository::new(db.clone())))),
        bookings: Arc::new(BookingService::new(
            Arc::new(BookingRepository::new(db.clone())),
            room_repo.clone(),
        )),
        reviews: Arc::new(ReviewService::new(
            Arc::new(ReviewRepository::new(db.clone())),
            room_repo.clone(),
        )),
        wishlists: Arc::new(WishlistService::new(
            Arc::new(WishlistRepository::new(db.clone())),
            room_repo,
        )),
        categories: category_repo,
        page_size: cfg.page_size,
    };

    let http_addr: SocketAddr = cfg.http_addr.parse()?;
    tracing::info!(%http_addr, "hearth server listening");

    http::serve(http_addr, state).await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,hearth=debug"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
