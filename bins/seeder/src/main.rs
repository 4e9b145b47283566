//! Database seeder for ShopLedger development and testing.
//!
//! Creates one admin and one employee, records a handful of entries for the
//! current business day, and prints an access token for each user so the API
//! can be exercised with curl right away.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use shopledger_core::calendar::BusinessCalendar;
use shopledger_core::ledger::{EntryStore, EntryType, NewEntry};
use shopledger_db::entities::{sea_orm_active_enums::UserRole, users};
use shopledger_db::{EntryRepository, UserRepository};
use shopledger_shared::types::UserId;
use shopledger_shared::{AppConfig, JwtConfig, JwtService};

const ADMIN_EMAIL: &str = "owner@shopledger.dev";
const EMPLOYEE_EMAIL: &str = "cashier@shopledger.dev";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let calendar = BusinessCalendar::from_name(&config.ledger.timezone)?;

    println!("Connecting to database...");
    let db = shopledger_db::connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    println!("Seeding users...");
    let users = UserRepository::new(db.clone());
    let admin = users
        .find_or_create("Shop Owner", ADMIN_EMAIL, UserRole::Admin)
        .await?;
    let employee_exists = users.find_by_email(EMPLOYEE_EMAIL).await?.is_some();
    let employee = users
        .find_or_create("Cashier", EMPLOYEE_EMAIL, UserRole::Employee)
        .await?;

    if employee_exists {
        println!("  Demo entries already seeded, skipping...");
    } else {
        println!("Seeding entries for {}...", calendar.today());
        seed_entries(&db, &calendar, &employee).await?;
    }

    let jwt = JwtService::new(JwtConfig {
        secret: config.jwt.secret.clone(),
        #[allow(clippy::cast_possible_wrap)]
        access_token_expires_minutes: (config.jwt.access_token_expiry_secs / 60) as i64,
    });

    println!();
    for user in [&admin, &employee] {
        let token =
            jwt.generate_access_token(user.id, &user.user_name, &[user.role.claim_name()])?;
        println!("{} <{}> [{}]", user.user_name, user.email, user.role.claim_name());
        println!("  Bearer {token}");
    }

    println!("Seeding complete!");
    Ok(())
}

async fn seed_entries(
    db: &DatabaseConnection,
    calendar: &BusinessCalendar,
    employee: &users::Model,
) -> anyhow::Result<()> {
    let store = EntryRepository::new(db.clone());
    let owner = UserId::from_uuid(employee.id);
    let demo = [
        (EntryType::Purchase, "Flour and sugar", Decimal::new(8_000, 2), None),
        (EntryType::Expense, "Electricity bill", Decimal::new(2_000, 2), Some("Monthly")),
        (EntryType::Sale, "Counter sales", Decimal::new(20_000, 2), None),
    ];

    for (entry_type, title, amount, notes) in demo {
        let entry = store
            .insert(NewEntry {
                entry_type,
                title: title.to_string(),
                amount,
                notes: notes.map(str::to_string),
                created_at: calendar.now_utc(),
                created_by: owner,
            })
            .await?;
        println!("  #{} {} {}", entry.id, entry.entry_type, entry.amount);
    }

    Ok(())
}
