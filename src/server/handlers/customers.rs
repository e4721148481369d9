use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::entities::Customer;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct OtpParams {
    email: String,
}

#[derive(Serialize, Deserialize)]
pub struct VerifyParams {
    email: String,
    otp: String,
    name: Option<String>,
    phone: Option<String>,
}

pub async fn send_otp(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<OtpParams>,
) -> Result<Json<()>, Error> {
    api.send_otp(params.email).await?;

    Ok(().into())
}

pub async fn verify(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<VerifyParams>,
) -> Result<Json<Customer>, Error> {
    let customer = api
        .verify_otp(params.email, params.otp, params.name, params.phone)
        .await?;

    Ok(customer.into())
}
