//! First-run seeding of sample data

use sqlx::{Pool, Sqlite};

use crate::error::AppResult;

/// Insert sample rows into any table that has no rows yet.
///
/// Each table is evaluated independently, so a partially populated database
/// only receives rows for the tables that are still empty. Calling this on
/// every startup is safe.
pub async fn seed_if_empty(pool: &Pool<Sqlite>) -> AppResult<()> {
    seed_rooms(pool).await?;
    seed_bookings(pool).await?;
    seed_users(pool).await?;
    Ok(())
}

async fn table_is_empty(pool: &Pool<Sqlite>, table: &str) -> AppResult<bool> {
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await?;
    Ok(count == 0)
}

async fn seed_rooms(pool: &Pool<Sqlite>) -> AppResult<()> {
    if !table_is_empty(pool, "rooms").await? {
        return Ok(());
    }

    tracing::info!("Seeding sample rooms");

    let sample_rooms = [
        (
            "Deluxe Suite",
            199.0_f64,
            "Suite",
            2_i64,
            "/static/images/room1.jpg",
            "available",
            "Luxurious suite with premium amenities",
        ),
        (
            "Standard Room",
            99.0,
            "Standard",
            2,
            "/static/images/room2.jpg",
            "available",
            "Comfortable standard room for your stay",
        ),
    ];

    for (title, price, room_type, capacity, image_url, status, description) in sample_rooms {
        sqlx::query(
            r#"
            INSERT INTO rooms (title, price, type, capacity, image_url, status, description)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(title)
        .bind(price)
        .bind(room_type)
        .bind(capacity)
        .bind(image_url)
        .bind(status)
        .bind(description)
        .execute(pool)
        .await?;
    }

    Ok(())
}

async fn seed_bookings(pool: &Pool<Sqlite>) -> AppResult<()> {
    if !table_is_empty(pool, "bookings").await? {
        return Ok(());
    }

    tracing::info!("Seeding sample bookings");

    let sample_bookings = [
        (
            "John Smith",
            "Deluxe Suite",
            "Dec 10, 2024",
            "Dec 15, 2024",
            "Confirmed",
            5_i64,
            995.0_f64,
        ),
        (
            "Emily Johnson",
            "Standard Room",
            "Dec 8, 2024",
            "Dec 10, 2024",
            "Pending",
            2,
            198.0,
        ),
        (
            "Michael Brown",
            "Deluxe Suite",
            "Dec 12, 2024",
            "Dec 18, 2024",
            "Confirmed",
            6,
            1194.0,
        ),
    ];

    for (guest_name, room, checkin, checkout, status, nights, total) in sample_bookings {
        sqlx::query(
            r#"
            INSERT INTO bookings (guest_name, room, checkin, checkout, status, nights, total)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(guest_name)
        .bind(room)
        .bind(checkin)
        .bind(checkout)
        .bind(status)
        .bind(nights)
        .bind(total)
        .execute(pool)
        .await?;
    }

    Ok(())
}

async fn seed_users(pool: &Pool<Sqlite>) -> AppResult<()> {
    if !table_is_empty(pool, "users").await? {
        return Ok(());
    }

    tracing::info!("Seeding sample users");

    let sample_users = [
        ("admin", "admin@staycation.com", "Administrator"),
        ("guest", "guest@staycation.com", "Guest User"),
    ];

    for (username, email, full_name) in sample_users {
        sqlx::query("INSERT INTO users (username, email, full_name) VALUES (?1, ?2, ?3)")
            .bind(username)
            .bind(email)
            .bind(full_name)
            .execute(pool)
            .await?;
    }

    Ok(())
}
