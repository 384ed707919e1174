use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tacoshack_api::{
    config::AppConfig,
    db::{create_pool, run_migrations},
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    seed_menu(&pool).await?;
    seed_deals(&pool).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_menu(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let items: Vec<(&str, &str, &str, Decimal, i32)> = vec![
        (
            "Crunchwrap Supreme",
            "Tacos",
            "Beef, nacho cheese, lettuce, tomato",
            dec!(4.99),
            530,
        ),
        (
            "Cheesy Gordita Crunch",
            "Tacos",
            "Spicy beef and melted cheese",
            dec!(3.99),
            500,
        ),
        ("Bean Burrito", "Burritos", "Bean and cheese", dec!(1.99), 350),
        (
            "Doritos Locos Tacos",
            "Tacos",
            "Taco with a Doritos shell",
            dec!(2.49),
            300,
        ),
    ];

    for (name, category, description, price, calories) in items {
        sqlx::query(
            r#"
            INSERT INTO menu_items (id, name, category, description, price, calories)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(category)
        .bind(description)
        .bind(price)
        .bind(calories)
        .execute(pool)
        .await?;
    }

    println!("Seeded menu items");
    Ok(())
}

async fn seed_deals(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let deals = vec![
        ("Taco Tuesday Special", "2 tacos for $3"),
        ("Late Night Combo", "Any burrito plus a drink discount"),
    ];

    for (title, details) in deals {
        sqlx::query(
            r#"
            INSERT INTO deals (id, title, details)
            VALUES ($1, $2, $3)
            ON CONFLICT (title) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(details)
        .execute(pool)
        .await?;
    }

    println!("Seeded deals");
    Ok(())
}
