//! Seed the database with a small demo data set.

use rust_decimal::Decimal;
use tracing::info;

use shopkeep_api::db::{self, ProductRepository, StoreRepository, UserRepository};
use shopkeep_core::Price;

use super::{CommandError, database_url};

/// Demo catalogue: product name and price in cents.
const DEMO_PRODUCTS: &[(&str, i64)] = &[
    ("Espresso beans 1kg", 2490),
    ("Ceramic mug", 1200),
    ("Pour-over kettle", 4550),
];

/// Create a demo user owning one store with a few products.
///
/// # Errors
///
/// Returns `CommandError` if `DATABASE_URL` is missing, the connection fails,
/// or an insert fails (for example when the email is already taken).
pub async fn demo(email: &str, name: &str) -> Result<(), CommandError> {
    let database_url = database_url()?;
    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let user = UserRepository::new(&pool).create(email, name).await?;
    info!(user_id = %user.id, email = %user.email, "Created user");

    let store = StoreRepository::new(&pool)
        .create(&format!("{name}'s Store"), user.id)
        .await?;
    info!(store_id = %store.id, "Created store");

    let products = ProductRepository::new(&pool);
    for (product_name, cents) in DEMO_PRODUCTS {
        let price = Price::new(Decimal::new(*cents, 2));
        let product = products.create(product_name, price, store.id).await?;
        info!(product_id = %product.id, price = %product.price, "Created product");
    }

    info!("Seeding complete");
    Ok(())
}
