use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Booking, ContactInfo};
use crate::error::Error;
use crate::external::razorpay::PaymentOrder;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    quote_token: Uuid,
    contact: ContactInfo,
}

#[derive(Serialize, Deserialize)]
pub struct ConfirmPaymentParams {
    order_id: String,
    payment_id: String,
    signature: String,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Booking>, Error> {
    let booking = api
        .create_booking(params.quote_token, params.contact)
        .await?;

    Ok(booking.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(reference): Path<String>,
) -> Result<Json<Booking>, Error> {
    let booking = api.find_booking(reference).await?;

    Ok(booking.into())
}

pub async fn create_order(
    Extension(api): Extension<DynAPI>,
    Path(reference): Path<String>,
) -> Result<Json<PaymentOrder>, Error> {
    let order = api.create_payment_order(reference).await?;

    Ok(order.into())
}

#[axum_macros::debug_handler]
pub async fn confirm_payment(
    Extension(api): Extension<DynAPI>,
    Path(reference): Path<String>,
    Json(params): Json<ConfirmPaymentParams>,
) -> Result<Json<Booking>, Error> {
    let booking = api
        .confirm_payment(
            reference,
            params.order_id,
            params.payment_id,
            params.signature,
        )
        .await?;

    Ok(booking.into())
}

pub async fn cancel(
    Extension(api): Extension<DynAPI>,
    Path(reference): Path<String>,
) -> Result<Json<Booking>, Error> {
    let booking = api.cancel_booking(reference).await?;

    Ok(booking.into())
}
