use chrono::{TimeDelta, Utc};
use instadrive_client::booking_flow::flow::{BookingForm, CarPage, FlowInterrupt, RenterDetails};
use instadrive_client::booking_flow::payment::{CardDetails, PaymentMethod};
use instadrive_client::http_handler::http_request::{
    booking_list_get::BookingListRequest, car_list_get::CarListRequest,
    request_common::NoBodyHTTPRequestType,
};
use instadrive_client::{Keychain, error, fatal, info, log, warn};
use std::env;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let base_url_var = env::var("INSTADRIVE_BASE_URL");
    let base_url = base_url_var.as_ref().map_or("http://localhost:8080/api", |v| v.as_str());
    let data_dir =
        env::var("INSTADRIVE_DATA_DIR").unwrap_or_else(|_| String::from("./.instadrive"));
    let keychain = Keychain::new(base_url, &data_dir);
    info!("InstaDrive client walkthrough against {base_url}");

    let session = keychain.session();
    let mut state = session.resolve().await;
    if let Some(user) = state.user() {
        info!("Resumed session for {} ({})", user.name(), user.email());
    }

    if !state.is_authenticated() {
        if let (Ok(email), Ok(password)) =
            (env::var("INSTADRIVE_EMAIL"), env::var("INSTADRIVE_PASSWORD"))
        {
            match session.login(&email, &password).await {
                Ok(route) => {
                    info!("Logged in, landing on {route}");
                    state = session.current().await;
                }
                Err(e) => error!("Login failed: {}", e.user_message()),
            }
        } else {
            log!("No stored session and no credentials in the environment, browsing anonymously");
        }
    }

    let client = keychain.client();
    let cars = match (CarListRequest::default()).send_request(&client).await {
        Ok(list) => list.into_cars(),
        Err(e) => {
            error!("Could not load the fleet: {}", e.user_message());
            return;
        }
    };
    info!("{} cars in the fleet", cars.len());
    for car in &cars {
        log!("#{} {} - ${}/day", car.id(), car.display_name(), car.price_per_day());
    }

    let Ok(demo_car) = env::var("INSTADRIVE_DEMO_CAR") else {
        log!("Set INSTADRIVE_DEMO_CAR to a car id to run the booking walkthrough");
        return;
    };
    let Ok(car_id) = demo_car.parse::<usize>() else {
        fatal!("INSTADRIVE_DEMO_CAR must be a numeric car id");
    };
    if !state.is_authenticated() {
        error!("The booking walkthrough needs an authenticated session");
        return;
    }
    if let Err(interrupt) = run_booking_walkthrough(&keychain, car_id).await {
        error!("Walkthrough stopped: {}", interrupt.user_message());
        if let FlowInterrupt::Redirect { target, .. } = interrupt {
            log!("Continue at {target}");
        }
    }
}

/// Drives the whole chain once: car page, availability gate, booking form,
/// card payment, and a merged booking listing at the end.
async fn run_booking_walkthrough(
    keychain: &Keychain,
    car_id: usize,
) -> Result<(), FlowInterrupt> {
    let client = keychain.client();
    let page = CarPage::load(&client, car_id).await?;
    let start_date = Utc::now() + TimeDelta::days(1);
    let end_date = start_date + TimeDelta::days(3);
    let quote = page.quote(start_date, end_date);
    info!(
        "{} for {} days: ${}",
        page.car().display_name(),
        quote.chargeable_days(),
        quote.total_price()
    );

    let Some(draft) = page.check_availability(&client, start_date, end_date).await? else {
        error!("Not available for the selected dates. Please try different dates.");
        return Ok(());
    };

    let renter_email = keychain
        .session()
        .current()
        .await
        .user()
        .map_or_else(|| String::from("customer@example.com"), |u| String::from(u.email()));
    let form = BookingForm::enter(Some(draft), car_id)?;
    let payment_page = form
        .submit(
            &client,
            RenterDetails {
                name: String::from("Walkthrough Customer"),
                email: renter_email.clone(),
                phone: String::from("5550100"),
                driver_license: String::from("D-0000000"),
                pickup_location: String::from("Main Office - 123 Rental St"),
                special_requests: None,
            },
        )
        .await?;

    let card = CardDetails::new("Walkthrough Customer", "4242 4242 4242 4242", "12/30", "123")
        .unwrap_or_else(|e| fatal!("{}", e.user_message()));
    let receipt = payment_page
        .pay(&client, &keychain.fallback(), PaymentMethod::Card(card), &renter_email)
        .await?;
    info!(
        "Payment settled: {} - continue at {}",
        receipt.transaction_id(),
        receipt.success_route()
    );

    match BookingListRequest::default().send_request(&client).await {
        Ok(list) => {
            let merged = keychain.fallback().merge_with_server(list.bookings()).await;
            let local_only = merged.iter().filter(|b| b.is_local()).count();
            info!("{} bookings on record ({local_only} local-only)", merged.len());
        }
        Err(e) => warn!("Could not list bookings: {}", e.user_message()),
    }
    Ok(())
}
