use super::{
    helpers::{fetch_customer_for_update, upsert_customer},
    Engine,
};

use async_trait::async_trait;
use rand::Rng;
use sqlx::Acquire;

use crate::{
    api::CustomerAPI,
    entities::Customer,
    error::{invalid_input_error, invalid_state_error, Error},
    external::mailjet,
};

#[async_trait]
impl CustomerAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn send_otp(&self, email: String) -> Result<(), Error> {
        if !email.contains('@') {
            return Err(invalid_input_error());
        }

        let code = new_code();

        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;

        let mut customer = fetch_customer_for_update(&mut tx, &email)
            .await?
            .unwrap_or_else(|| Customer::new(email.clone()));

        customer.issue_code(code.clone());
        upsert_customer(&mut tx, &customer).await?;

        tx.commit().await?;

        // the code is stored before the email goes out, so a resend always
        // invalidates the previous one
        mailjet::send_verification_email(email, &code).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self, otp))]
    async fn verify_otp(
        &self,
        email: String,
        otp: String,
        name: Option<String>,
        phone: Option<String>,
    ) -> Result<Customer, Error> {
        let mut conn = self.pool.acquire().await?;
        let mut tx = conn.begin().await?;

        let mut customer = fetch_customer_for_update(&mut tx, &email)
            .await?
            .ok_or_else(|| invalid_state_error())?;

        customer.verify_code(&otp)?;

        if let Some(name) = name {
            customer.name = Some(name);
        }

        if let Some(phone) = phone {
            customer.phone = Some(phone);
        }

        upsert_customer(&mut tx, &customer).await?;

        tx.commit().await?;

        Ok(customer)
    }
}

fn new_code() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}
