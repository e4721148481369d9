use super::Database;

use sqlx::{types::Json, Executor, Row, Transaction};

use crate::{
    entities::{Booking, Customer},
    error::{invalid_input_error, Error},
};

#[tracing::instrument(skip(tx))]
pub async fn fetch_booking_for_update(
    tx: &mut Transaction<'_, Database>,
    reference: &str,
) -> Result<Booking, Error> {
    let Json(booking): Json<Booking> = tx
        .fetch_optional(
            sqlx::query("SELECT data FROM bookings WHERE reference = $1 FOR UPDATE")
                .bind(reference),
        )
        .await?
        .ok_or_else(|| invalid_input_error())?
        .try_get("data")?;

    Ok(booking)
}

#[tracing::instrument(skip(tx))]
pub async fn update_booking(
    tx: &mut Transaction<'_, Database>,
    booking: &Booking,
) -> Result<(), Error> {
    tx.execute(
        sqlx::query("UPDATE bookings SET status = $2, data = $3 WHERE reference = $1")
            .bind(&booking.reference)
            .bind(booking.status.name())
            .bind(Json(booking)),
    )
    .await?;

    Ok(())
}

// Customers are created on first contact, so absence is not an error here.
#[tracing::instrument(skip(tx))]
pub async fn fetch_customer_for_update(
    tx: &mut Transaction<'_, Database>,
    email: &str,
) -> Result<Option<Customer>, Error> {
    let maybe_result = tx
        .fetch_optional(
            sqlx::query("SELECT data FROM customers WHERE email = $1 FOR UPDATE").bind(email),
        )
        .await?;

    match maybe_result {
        Some(result) => {
            let Json(customer): Json<Customer> = result.try_get("data")?;
            Ok(Some(customer))
        }
        None => Ok(None),
    }
}

#[tracing::instrument(skip(tx))]
pub async fn upsert_customer(
    tx: &mut Transaction<'_, Database>,
    customer: &Customer,
) -> Result<(), Error> {
    tx.execute(
        sqlx::query(
            "INSERT INTO customers (email, status, data) VALUES ($1, $2, $3)
             ON CONFLICT (email) DO UPDATE SET status = EXCLUDED.status, data = EXCLUDED.data",
        )
        .bind(&customer.email)
        .bind(customer.verification.name())
        .bind(Json(customer)),
    )
    .await?;

    Ok(())
}
