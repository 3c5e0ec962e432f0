//! End-to-end booking lifecycle tests against the in-memory adapters.

use std::sync::Arc;

use caravan_share::adapters::memory::{
    InMemoryCaravanRepository, InMemoryPaymentRepository, InMemoryReservationRepository,
    InMemoryReviewRepository, InMemoryUserRepository,
};
use caravan_share::adapters::notification::RecordingNotifier;
use caravan_share::application::{
    ApproveReservationCommand, ApproveReservationHandler, CancelReservationCommand,
    CancelReservationHandler, CompleteReservationCommand, CompleteReservationHandler,
    CreateReservationCommand, CreateReservationHandler, CreateReservationOutcome,
    CreateReviewCommand, CreateReviewHandler, ProcessPaymentCommand, ProcessPaymentHandler,
    RegisterCaravanCommand, RegisterCaravanHandler, RegisterUserCommand, RegisterUserHandler,
    RejectReservationCommand, RejectReservationHandler, SearchCaravansCommand,
    SearchCaravansHandler,
};
use caravan_share::domain::caravan::CaravanStatus;
use caravan_share::domain::foundation::{BookingDate, CaravanId, ReservationId, UserId};
use caravan_share::domain::payment::PaymentStatus;
use caravan_share::domain::reservation::{ReservationError, ReservationStatus, ReservationValidator};
use caravan_share::domain::review::ReviewError;
use caravan_share::domain::user::{UserError, UserRole};
use caravan_share::ports::{CaravanRepository, ReservationRepository, UserRepository};

struct Marketplace {
    users: Arc<InMemoryUserRepository>,
    caravans: Arc<InMemoryCaravanRepository>,
    reservations: Arc<InMemoryReservationRepository>,
    notifier: Arc<RecordingNotifier>,
    register_user: RegisterUserHandler,
    register_caravan: RegisterCaravanHandler,
    search_caravans: SearchCaravansHandler,
    create_reservation: CreateReservationHandler,
    approve_reservation: ApproveReservationHandler,
    reject_reservation: RejectReservationHandler,
    complete_reservation: CompleteReservationHandler,
    cancel_reservation: CancelReservationHandler,
    process_payment: ProcessPaymentHandler,
    create_review: CreateReviewHandler,
}

impl Marketplace {
    fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let caravans = Arc::new(InMemoryCaravanRepository::new());
        let reservations = Arc::new(InMemoryReservationRepository::new());
        let payments = Arc::new(InMemoryPaymentRepository::new());
        let reviews = Arc::new(InMemoryReviewRepository::new());
        let notifier = Arc::new(RecordingNotifier::new());

        Self {
            register_user: RegisterUserHandler::new(users.clone()),
            register_caravan: RegisterCaravanHandler::new(users.clone(), caravans.clone(), 50_000),
            search_caravans: SearchCaravansHandler::new(users.clone(), caravans.clone()),
            create_reservation: CreateReservationHandler::new(
                users.clone(),
                caravans.clone(),
                reservations.clone(),
                notifier.clone(),
                ReservationValidator::new(1),
            ),
            approve_reservation: ApproveReservationHandler::new(
                caravans.clone(),
                reservations.clone(),
                notifier.clone(),
            ),
            reject_reservation: RejectReservationHandler::new(
                caravans.clone(),
                reservations.clone(),
                notifier.clone(),
            ),
            complete_reservation: CompleteReservationHandler::new(
                caravans.clone(),
                reservations.clone(),
                notifier.clone(),
            ),
            cancel_reservation: CancelReservationHandler::new(
                caravans.clone(),
                reservations.clone(),
                notifier.clone(),
            ),
            process_payment: ProcessPaymentHandler::new(
                reservations.clone(),
                payments,
                notifier.clone(),
            ),
            create_review: CreateReviewHandler::new(
                users.clone(),
                caravans.clone(),
                reservations.clone(),
                reviews,
            ),
            users,
            caravans,
            reservations,
            notifier,
        }
    }

    async fn register(&self, username: &str, role: UserRole) -> UserId {
        let user = self
            .register_user
            .handle(RegisterUserCommand {
                username: username.into(),
                role,
            })
            .await
            .unwrap();
        *user.id()
    }

    async fn list_caravan(&self, host_id: UserId, name: &str, capacity: u32, rate: i64) -> CaravanId {
        let caravan = self
            .register_caravan
            .handle(RegisterCaravanCommand {
                host_id,
                name: name.into(),
                capacity,
                daily_rate: Some(rate),
                amenities: vec![],
            })
            .await
            .unwrap();
        *caravan.id()
    }

    async fn book(
        &self,
        guest_id: UserId,
        caravan_id: CaravanId,
        start_offset: u64,
        nights: u64,
    ) -> CreateReservationOutcome {
        let start = BookingDate::today().plus_days(start_offset);
        self.create_reservation
            .handle(CreateReservationCommand {
                guest_id,
                caravan_id,
                start,
                end: start.plus_days(nights),
            })
            .await
            .unwrap()
    }

    async fn book_ok(
        &self,
        guest_id: UserId,
        caravan_id: CaravanId,
        start_offset: u64,
        nights: u64,
    ) -> ReservationId {
        match self.book(guest_id, caravan_id, start_offset, nights).await {
            CreateReservationOutcome::Created(r) => *r.id(),
            CreateReservationOutcome::Declined(reason) => panic!("declined: {reason}"),
        }
    }
}

#[tokio::test]
async fn full_lifecycle_from_listing_to_review() {
    let m = Marketplace::new();
    let host = m.register("alice_host", UserRole::Host).await;
    let guest = m.register("bob_guest", UserRole::Guest).await;

    let airstream = m.list_caravan(host, "Luxury Airstream", 4, 150_000).await;
    m.list_caravan(host, "Cozy Camper Van", 2, 80_000).await;

    let found = m
        .search_caravans
        .handle(SearchCaravansCommand {
            guest_id: guest,
            min_capacity: 2,
        })
        .await
        .unwrap();
    assert_eq!(found.len(), 2);

    // 7 inclusive days at 150,000: 1,050,000 minus the 10% long-stay cut.
    let outcome = m.book(guest, airstream, 7, 6).await;
    let reservation = match outcome {
        CreateReservationOutcome::Created(r) => r,
        CreateReservationOutcome::Declined(reason) => panic!("declined: {reason}"),
    };
    assert_eq!(reservation.total_price(), 945_000);
    assert_eq!(reservation.status(), ReservationStatus::Pending);

    m.approve_reservation
        .handle(ApproveReservationCommand {
            host_id: host,
            reservation_id: *reservation.id(),
        })
        .await
        .unwrap();
    let caravan = m.caravans.find_by_id(&airstream).await.unwrap().unwrap();
    assert_eq!(caravan.status(), CaravanStatus::Reserved);

    let payment = m
        .process_payment
        .handle(ProcessPaymentCommand {
            reservation_id: *reservation.id(),
            amount: 945_000,
        })
        .await
        .unwrap();
    assert_eq!(payment.status(), PaymentStatus::Completed);

    m.complete_reservation
        .handle(CompleteReservationCommand {
            host_id: host,
            reservation_id: *reservation.id(),
        })
        .await
        .unwrap();
    let caravan = m.caravans.find_by_id(&airstream).await.unwrap().unwrap();
    assert_eq!(caravan.status(), CaravanStatus::Available);

    let review = m
        .create_review
        .handle(CreateReviewCommand {
            guest_id: guest,
            reservation_id: *reservation.id(),
            rating: 5,
            comment: "Amazing experience!".into(),
        })
        .await
        .unwrap();
    assert_eq!(review.rating().value(), 5);

    let rated_host = m.users.find_by_id(&host).await.unwrap().unwrap();
    assert_eq!(rated_host.rating().average, 5.0);
    assert_eq!(rated_host.rating().count, 1);
}

#[tokio::test]
async fn five_day_stay_pays_full_price_and_seven_days_gets_discount() {
    let m = Marketplace::new();
    let host = m.register("alice_host", UserRole::Host).await;
    let guest = m.register("bob_guest", UserRole::Guest).await;
    let camper = m.list_caravan(host, "Cozy Camper Van", 2, 80_000).await;

    let five_days = m.book(guest, camper, 7, 4).await;
    assert_eq!(five_days.reservation().unwrap().total_price(), 400_000);

    let seven_days = m.book(guest, camper, 30, 6).await;
    assert_eq!(seven_days.reservation().unwrap().total_price(), 504_000);
}

#[tokio::test]
async fn contained_overlap_is_declined() {
    let m = Marketplace::new();
    let host = m.register("alice_host", UserRole::Host).await;
    let guest = m.register("bob_guest", UserRole::Guest).await;
    let camper = m.list_caravan(host, "Cozy Camper Van", 2, 80_000).await;

    // [day10, day16] first, then [day12, day14] fully inside it.
    m.book_ok(guest, camper, 10, 6).await;
    let outcome = m.book(guest, camper, 12, 2).await;
    assert_eq!(
        outcome,
        CreateReservationOutcome::Declined(ReservationError::DateRangeTaken(camper))
    );
}

#[tokio::test]
async fn rejection_frees_the_dates_for_another_guest() {
    let m = Marketplace::new();
    let host = m.register("alice_host", UserRole::Host).await;
    let guest = m.register("bob_guest", UserRole::Guest).await;
    let other = m.register("carol_guest", UserRole::Guest).await;
    let camper = m.list_caravan(host, "Cozy Camper Van", 2, 80_000).await;

    let reservation_id = m.book_ok(guest, camper, 10, 4).await;
    m.reject_reservation
        .handle(RejectReservationCommand {
            host_id: host,
            reservation_id,
        })
        .await
        .unwrap();

    let rebooked = m.book(other, camper, 10, 4).await;
    assert!(rebooked.reservation().is_some());
}

#[tokio::test]
async fn cancellation_frees_the_dates() {
    let m = Marketplace::new();
    let host = m.register("alice_host", UserRole::Host).await;
    let guest = m.register("bob_guest", UserRole::Guest).await;
    let camper = m.list_caravan(host, "Cozy Camper Van", 2, 80_000).await;

    let reservation_id = m.book_ok(guest, camper, 10, 4).await;
    m.approve_reservation
        .handle(ApproveReservationCommand {
            host_id: host,
            reservation_id,
        })
        .await
        .unwrap();
    m.cancel_reservation
        .handle(CancelReservationCommand {
            guest_id: guest,
            reservation_id,
        })
        .await
        .unwrap();

    let stored = m
        .reservations
        .find_by_id(&reservation_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status(), ReservationStatus::Cancelled);
    assert!(m.book(guest, camper, 10, 4).await.reservation().is_some());
}

#[tokio::test]
async fn completion_requires_confirmation_first() {
    let m = Marketplace::new();
    let host = m.register("alice_host", UserRole::Host).await;
    let guest = m.register("bob_guest", UserRole::Guest).await;
    let camper = m.list_caravan(host, "Cozy Camper Van", 2, 80_000).await;

    let reservation_id = m.book_ok(guest, camper, 10, 4).await;
    let err = m
        .complete_reservation
        .handle(CompleteReservationCommand {
            host_id: host,
            reservation_id,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ReservationError::InvalidState {
            from: ReservationStatus::Pending,
            ..
        }
    ));
}

#[tokio::test]
async fn duplicate_username_and_bad_lengths_are_rejected() {
    let m = Marketplace::new();
    m.register("alice_host", UserRole::Host).await;

    let dup = m
        .register_user
        .handle(RegisterUserCommand {
            username: "alice_host".into(),
            role: UserRole::Guest,
        })
        .await
        .unwrap_err();
    assert_eq!(dup, UserError::UsernameTaken("alice_host".into()));

    let short = m
        .register_user
        .handle(RegisterUserCommand {
            username: "ab".into(),
            role: UserRole::Guest,
        })
        .await
        .unwrap_err();
    assert!(matches!(short, UserError::InvalidUsername(_)));
}

#[tokio::test]
async fn duplicate_review_is_rejected_and_ratings_average() {
    let m = Marketplace::new();
    let host = m.register("alice_host", UserRole::Host).await;
    let guest = m.register("bob_guest", UserRole::Guest).await;
    let camper = m.list_caravan(host, "Cozy Camper Van", 2, 80_000).await;

    let mut completed = Vec::new();
    for offset in [10u64, 30] {
        let reservation_id = m.book_ok(guest, camper, offset, 4).await;
        m.approve_reservation
            .handle(ApproveReservationCommand {
                host_id: host,
                reservation_id,
            })
            .await
            .unwrap();
        m.complete_reservation
            .handle(CompleteReservationCommand {
                host_id: host,
                reservation_id,
            })
            .await
            .unwrap();
        completed.push(reservation_id);
    }

    for (reservation_id, rating) in completed.iter().zip([5i64, 4]) {
        m.create_review
            .handle(CreateReviewCommand {
                guest_id: guest,
                reservation_id: *reservation_id,
                rating,
                comment: String::new(),
            })
            .await
            .unwrap();
    }

    let err = m
        .create_review
        .handle(CreateReviewCommand {
            guest_id: guest,
            reservation_id: completed[0],
            rating: 3,
            comment: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(err, ReviewError::AlreadyReviewed(completed[0]));

    let rated_host = m.users.find_by_id(&host).await.unwrap().unwrap();
    assert_eq!(rated_host.rating().average, 4.5);
    assert_eq!(rated_host.rating().count, 2);
}

#[tokio::test]
async fn every_lifecycle_step_notifies_the_right_party() {
    let m = Marketplace::new();
    let host = m.register("alice_host", UserRole::Host).await;
    let guest = m.register("bob_guest", UserRole::Guest).await;
    let camper = m.list_caravan(host, "Cozy Camper Van", 2, 80_000).await;

    let reservation_id = m.book_ok(guest, camper, 10, 4).await;
    // Creation notifies both parties.
    assert_eq!(m.notifier.sent_to(&guest).len(), 1);
    assert_eq!(m.notifier.sent_to(&host).len(), 1);

    m.approve_reservation
        .handle(ApproveReservationCommand {
            host_id: host,
            reservation_id,
        })
        .await
        .unwrap();
    assert_eq!(m.notifier.sent_to(&guest).len(), 2);

    m.cancel_reservation
        .handle(CancelReservationCommand {
            guest_id: guest,
            reservation_id,
        })
        .await
        .unwrap();
    assert_eq!(m.notifier.sent_to(&host).len(), 2);
}
