//! End-to-end demo of the marketplace core.
//!
//! Wires the in-memory adapters into every handler and walks one full
//! booking lifecycle: registration, listing, search, a long-stay booking
//! with the discount, approval, payment, completion, a review, and a
//! short booking at full price.

use std::error::Error;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use caravan_share::adapters::memory::{
    InMemoryCaravanRepository, InMemoryPaymentRepository, InMemoryReservationRepository,
    InMemoryReviewRepository, InMemoryUserRepository,
};
use caravan_share::adapters::notification::TracingNotifier;
use caravan_share::application::{
    ApproveReservationCommand, ApproveReservationHandler, CompleteReservationCommand,
    CompleteReservationHandler, CreateReservationCommand, CreateReservationHandler,
    CreateReservationOutcome, CreateReviewCommand, CreateReviewHandler, ProcessPaymentCommand,
    ProcessPaymentHandler, RegisterCaravanCommand, RegisterCaravanHandler, RegisterUserCommand,
    RegisterUserHandler, SearchCaravansCommand, SearchCaravansHandler,
};
use caravan_share::config::AppConfig;
use caravan_share::domain::foundation::BookingDate;
use caravan_share::domain::reservation::ReservationValidator;
use caravan_share::domain::user::UserRole;
use caravan_share::ports::UserRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.log_level.clone())),
        )
        .init();

    info!("starting caravan-share demo");

    // Adapters
    let users = Arc::new(InMemoryUserRepository::new());
    let caravans = Arc::new(InMemoryCaravanRepository::new());
    let reservations = Arc::new(InMemoryReservationRepository::new());
    let payments = Arc::new(InMemoryPaymentRepository::new());
    let reviews = Arc::new(InMemoryReviewRepository::new());
    let notifier = Arc::new(TracingNotifier::new());

    // Handlers
    let register_user = RegisterUserHandler::new(users.clone());
    let register_caravan = RegisterCaravanHandler::new(
        users.clone(),
        caravans.clone(),
        config.booking.default_daily_rate,
    );
    let search_caravans = SearchCaravansHandler::new(users.clone(), caravans.clone());
    let create_reservation = CreateReservationHandler::new(
        users.clone(),
        caravans.clone(),
        reservations.clone(),
        notifier.clone(),
        ReservationValidator::new(config.booking.min_reservation_days),
    );
    let approve_reservation =
        ApproveReservationHandler::new(caravans.clone(), reservations.clone(), notifier.clone());
    let complete_reservation =
        CompleteReservationHandler::new(caravans.clone(), reservations.clone(), notifier.clone());
    let process_payment =
        ProcessPaymentHandler::new(reservations.clone(), payments.clone(), notifier.clone());
    let create_review = CreateReviewHandler::new(
        users.clone(),
        caravans.clone(),
        reservations.clone(),
        reviews.clone(),
    );

    // Registration
    let host = register_user
        .handle(RegisterUserCommand {
            username: "alice_host".into(),
            role: UserRole::Host,
        })
        .await?;
    let guest = register_user
        .handle(RegisterUserCommand {
            username: "bob_guest".into(),
            role: UserRole::Guest,
        })
        .await?;
    info!(host = host.username(), guest = guest.username(), "users registered");

    // Listings
    let airstream = register_caravan
        .handle(RegisterCaravanCommand {
            host_id: *host.id(),
            name: "Luxury Airstream".into(),
            capacity: 4,
            daily_rate: Some(150_000),
            amenities: vec![
                "Wi-Fi".into(),
                "Kitchen".into(),
                "Bathroom".into(),
                "Solar Panels".into(),
            ],
        })
        .await?;
    let camper = register_caravan
        .handle(RegisterCaravanCommand {
            host_id: *host.id(),
            name: "Cozy Camper Van".into(),
            capacity: 2,
            daily_rate: Some(80_000),
            amenities: vec!["Bed".into(), "Mini Fridge".into()],
        })
        .await?;

    // Search
    let found = search_caravans
        .handle(SearchCaravansCommand {
            guest_id: *guest.id(),
            min_capacity: 2,
        })
        .await?;
    for caravan in &found {
        info!(
            name = caravan.name(),
            capacity = caravan.capacity(),
            daily_rate = caravan.daily_rate(),
            "listing available"
        );
    }

    // Long stay: 7 inclusive days, qualifies for the discount.
    let start = BookingDate::today().plus_days(7);
    let outcome = create_reservation
        .handle(CreateReservationCommand {
            guest_id: *guest.id(),
            caravan_id: *airstream.id(),
            start,
            end: start.plus_days(6),
        })
        .await?;
    let reservation = match outcome {
        CreateReservationOutcome::Created(r) => r,
        CreateReservationOutcome::Declined(reason) => return Err(reason.into()),
    };
    info!(
        reservation_id = %reservation.id(),
        total_price = reservation.total_price(),
        "long-stay booking priced"
    );

    // Host approval, payment, completion, review.
    approve_reservation
        .handle(ApproveReservationCommand {
            host_id: *host.id(),
            reservation_id: *reservation.id(),
        })
        .await?;
    let payment = process_payment
        .handle(ProcessPaymentCommand {
            reservation_id: *reservation.id(),
            amount: reservation.total_price(),
        })
        .await?;
    info!(payment_id = %payment.id(), amount = payment.amount(), "payment settled");

    complete_reservation
        .handle(CompleteReservationCommand {
            host_id: *host.id(),
            reservation_id: *reservation.id(),
        })
        .await?;
    let review = create_review
        .handle(CreateReviewCommand {
            guest_id: *guest.id(),
            reservation_id: *reservation.id(),
            rating: 5,
            comment: "Amazing experience! The Airstream was spotless and had everything \
                      we needed."
                .into(),
        })
        .await?;
    info!(rating = review.rating().value(), "review submitted");

    // Short stay: 3 days, full price.
    let start2 = BookingDate::today().plus_days(20);
    let outcome2 = create_reservation
        .handle(CreateReservationCommand {
            guest_id: *guest.id(),
            caravan_id: *camper.id(),
            start: start2,
            end: start2.plus_days(2),
        })
        .await?;
    if let Some(short) = outcome2.reservation() {
        info!(
            reservation_id = %short.id(),
            total_price = short.total_price(),
            "short booking priced at full rate"
        );
    }

    let rated_host = users
        .find_by_id(host.id())
        .await?
        .ok_or("host disappeared from the store")?;
    info!(
        users = users.len(),
        caravans = caravans.len(),
        reservations = reservations.len(),
        payments = payments.len(),
        reviews = reviews.len(),
        host_rating = rated_host.rating().average,
        "demo finished"
    );

    Ok(())
}
