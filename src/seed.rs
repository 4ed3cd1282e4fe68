use bcrypt::{DEFAULT_COST, hash};
use rust_decimal::Decimal;
use tracing::info;

use crate::{
    domain::{errors::DomainError, product::NewProduct, review::NewReview, user::NewUser},
    infrastructure::{ProductStore, ReviewStore, UserStore, memory::MemoryStore},
};

/// Populates an empty store with a small moderation-ready dataset so the
/// dashboard has something to show. Enabled with `RD_SEED_DEMO_DATA=true`.
pub async fn seed_demo_data(store: &MemoryStore) -> Result<(), DomainError> {
    let mut users = Vec::new();
    for (user_name, mail) in [
        ("ada", "ada@example.com"),
        ("grace", "grace@example.com"),
        ("linus", "linus@example.com"),
    ] {
        let password_hash = hash("demo-password", DEFAULT_COST)
            .map_err(|err| DomainError::internal(format!("failed to hash seed password: {err}")))?;
        let user = store
            .create_user(NewUser {
                user_name: user_name.to_string(),
                mail: mail.to_string(),
                password_hash,
            })
            .await?;
        users.push(user);
    }

    let mut products = Vec::new();
    for (name, image, cents) in [
        ("Mechanical Keyboard", "https://img.example.com/keyboard.png", 8999_i64),
        ("Trackball Mouse", "https://img.example.com/trackball.png", 4950),
        ("Desk Mat", "https://img.example.com/deskmat.png", 1999),
    ] {
        let product = store
            .create_product(NewProduct {
                name: name.to_string(),
                image: image.to_string(),
                price: Decimal::new(cents, 2),
            })
            .await?;
        products.push(product);
    }

    let reviews = [
        (0, 0, "Clacky in the best way.", 5),
        (1, 0, "Solid build, loud for the office.", 4),
        (2, 0, "Keycaps started fading after a month.", 2),
        (0, 1, "Took a week to get used to, now I love it.", 4),
        (2, 1, "Cursor drifts, had to return it.", 1),
        (1, 2, "Does what a desk mat does.", 3),
    ];
    for (user_idx, product_idx, content, rating) in reviews {
        store
            .create_review(NewReview {
                product_id: products[product_idx].id,
                user_id: users[user_idx].uuid,
                content: content.to_string(),
                rating,
            })
            .await?;
    }

    info!(
        users = users.len(),
        products = products.len(),
        reviews = reviews.len(),
        "seeded demo data"
    );
    Ok(())
}
