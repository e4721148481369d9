use serde::Serialize;
use std::env;

use crate::entities::Booking;
use crate::error::{invalid_input_error, upstream_error, Error};

const FROM_EMAIL: &str = "bookings@hansomcabs.com";
const FROM_NAME: &str = "Hansom Cabs";
const OPS_EMAIL: &str = "ops@hansomcabs.com";
const OPS_NAME: &str = "Hansom Operations";

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendBody {
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Message {
    from: Party,
    to: Vec<Party>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    cc: Vec<Party>,
    subject: String,
    #[serde(rename = "HTMLPart")]
    html_part: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_part: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Party {
    email: String,
    name: String,
}

#[tracing::instrument(skip(code))]
pub async fn send_verification_email(to: String, code: &str) -> Result<(), Error> {
    let name = to.split('@').next().unwrap_or("").to_string();

    let html_part = format!(
        "<h3>Hansom Cabs</h3>\
         <p>Your verification code is:</p>\
         <div style=\"font-size: 24px; font-weight: bold; letter-spacing: 4px;\">{}</div>\
         <p>The code is valid for 5 minutes.</p>\
         <p>If you didn't request it, you can ignore this email.</p>",
        code
    );

    let message = Message {
        from: Party {
            email: FROM_EMAIL.into(),
            name: FROM_NAME.into(),
        },
        to: vec![Party { email: to, name }],
        cc: vec![],
        subject: "Your Hansom verification code".into(),
        html_part,
        text_part: Some(format!(
            "Your Hansom verification code is {}. It is valid for 5 minutes.",
            code
        )),
    };

    send(message).await
}

#[tracing::instrument(skip(booking))]
pub async fn send_booking_confirmation(booking: &Booking) -> Result<(), Error> {
    let trip = &booking.trip;
    let destination = trip
        .destination
        .clone()
        .unwrap_or_else(|| "local package".into());

    let html_part = format!(
        "<h3>Booking Confirmation - Hansom Cabs</h3>\
         <p>Dear {},</p>\
         <p>Your trip is confirmed.</p>\
         <ul>\
         <li><strong>Booking ID:</strong> {}</li>\
         <li><strong>From:</strong> {}</li>\
         <li><strong>To:</strong> {}</li>\
         <li><strong>Pickup:</strong> {} at {}</li>\
         <li><strong>Vehicle:</strong> {}</li>\
         <li><strong>Total:</strong> ₹{}</li>\
         </ul>\
         <p>Thank you for travelling with Hansom. We wish you a safe journey!</p>",
        booking.contact.name,
        booking.reference,
        trip.source,
        destination,
        trip.pickup_date,
        trip.pickup_time,
        booking.vehicle_name,
        booking.fare,
    );

    let message = Message {
        from: Party {
            email: FROM_EMAIL.into(),
            name: FROM_NAME.into(),
        },
        to: vec![Party {
            email: booking.contact.email.clone(),
            name: booking.contact.name.clone(),
        }],
        cc: vec![Party {
            email: OPS_EMAIL.into(),
            name: OPS_NAME.into(),
        }],
        subject: format!("Booking Confirmation - {}", booking.reference),
        html_part,
        text_part: None,
    };

    send(message).await
}

async fn send(message: Message) -> Result<(), Error> {
    let api_base = env::var("MAILJET_API_BASE")?;
    let url = format!("https://{}/v3.1/send", api_base);
    let api_key = env::var("MAILJET_API_KEY")?;
    let secret_key = env::var("MAILJET_SECRET_KEY")?;

    let res = reqwest::Client::new()
        .post(url)
        .basic_auth(api_key, Some(secret_key))
        .json(&SendBody {
            messages: vec![message],
        })
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    Ok(())
}
