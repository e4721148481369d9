mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, patch, post},
    Router,
};

use crate::api::API;
use crate::server::handlers::{bookings, customers, places, quotes, vehicles};

type DynAPI = Arc<dyn API + Send + Sync>;

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    tracing_subscriber::fmt::init();

    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/vehicles", get(vehicles::list))
        .route("/vehicles/:id", get(vehicles::find))
        .route("/fares", post(quotes::fares))
        .route("/quotes", post(quotes::create))
        .route("/quotes/:token", get(quotes::find))
        .route("/bookings", post(bookings::create))
        .route("/bookings/:reference", get(bookings::find))
        .route("/bookings/:reference/order", post(bookings::create_order))
        .route(
            "/bookings/:reference/payment",
            patch(bookings::confirm_payment),
        )
        .route("/bookings/:reference/cancel", patch(bookings::cancel))
        .route("/customers/otp", post(customers::send_otp))
        .route("/customers/verify", post(customers::verify))
        .route("/places/suggestions", get(places::suggestions))
        .route("/places/details/:id", get(places::details))
        .route("/places/distance", get(places::distance))
        .layer(Extension(api));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
