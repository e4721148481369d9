use serde::Serialize;
use std::env;

use crate::entities::Booking;
use crate::error::{invalid_input_error, upstream_error, Error};

// The WhatsApp sender registered with Infobip, and the operations number
// that gets a copy of every confirmation.
const WHATSAPP_SENDER: &str = "15550001177";
const OPS_WHATSAPP: &str = "919740004166";

// Template registered on the Infobip side; the placeholders below must stay
// in step with it.
const TEMPLATE_NAME: &str = "hansom_booking_confirmation";

#[derive(Debug, Serialize)]
struct SendBody {
    messages: Vec<TemplateMessage>,
}

#[derive(Debug, Serialize)]
struct TemplateMessage {
    from: String,
    to: String,
    content: Content,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    template_name: String,
    template_data: TemplateData,
    language: String,
}

#[derive(Debug, Serialize)]
struct TemplateData {
    body: TemplateBody,
}

#[derive(Debug, Serialize)]
struct TemplateBody {
    placeholders: Vec<String>,
}

// A booking confirmation goes to the customer and to operations. Message
// failures are logged and swallowed; WhatsApp never blocks a booking.
#[tracing::instrument(skip(booking))]
pub async fn send_booking_confirmation(booking: &Booking) {
    let recipients = [
        format!("91{}", booking.contact.phone),
        OPS_WHATSAPP.to_string(),
    ];

    for to in recipients {
        if let Err(err) = send_template(booking, to.clone()).await {
            tracing::warn!(
                "failed to send whatsapp confirmation to {}: {}",
                to,
                err.message
            );
        }
    }
}

async fn send_template(booking: &Booking, to: String) -> Result<(), Error> {
    let api_base = env::var("INFOBIP_API_BASE")?;
    let url = format!("https://{}/whatsapp/1/message/template", api_base);
    let key = env::var("INFOBIP_API_KEY")?;

    let trip = &booking.trip;
    let destination = trip
        .destination
        .clone()
        .unwrap_or_else(|| "local package".into());

    let body = SendBody {
        messages: vec![TemplateMessage {
            from: WHATSAPP_SENDER.into(),
            to,
            content: Content {
                template_name: TEMPLATE_NAME.into(),
                template_data: TemplateData {
                    body: TemplateBody {
                        placeholders: vec![
                            booking.contact.name.clone(),
                            booking.reference.clone(),
                            trip.source.clone(),
                            destination,
                            format!("{} at {}", trip.pickup_date, trip.pickup_time),
                            booking.vehicle_name.clone(),
                            format!("₹ {}", booking.fare),
                        ],
                    },
                },
                language: "en".into(),
            },
        }],
    };

    let res = reqwest::Client::new()
        .post(url)
        .header("Authorization", format!("App {}", key))
        .json(&body)
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
