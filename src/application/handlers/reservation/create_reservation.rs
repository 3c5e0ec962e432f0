//! CreateReservationHandler - the guest-initiated booking flow.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::{BookingDate, CaravanId, ReservationId, UserId};
use crate::domain::pricing::{DiscountPolicy, PriceCalculator};
use crate::domain::reservation::{Reservation, ReservationError, ReservationValidator};
use crate::ports::{CaravanRepository, Notifier, ReservationRepository, UserRepository};

/// Command to book a caravan for an inclusive date range.
#[derive(Debug, Clone)]
pub struct CreateReservationCommand {
    pub guest_id: UserId,
    pub caravan_id: CaravanId,
    pub start: BookingDate,
    pub end: BookingDate,
}

/// Result of the creation path.
///
/// Validation and conflict failures are expected business outcomes, not
/// errors: they come back as `Declined` with the typed reason, already
/// logged. Only infrastructure failures surface as `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateReservationOutcome {
    Created(Reservation),
    Declined(ReservationError),
}

impl CreateReservationOutcome {
    /// The reservation, when one was created.
    pub fn reservation(&self) -> Option<&Reservation> {
        match self {
            CreateReservationOutcome::Created(r) => Some(r),
            CreateReservationOutcome::Declined(_) => None,
        }
    }
}

/// Handler for reservation creation.
///
/// Orchestrates the full booking pipeline: validation, duration-based
/// discount selection, pricing, persistence (which records the
/// availability dates), and fire-and-forget notifications to guest and
/// host.
pub struct CreateReservationHandler {
    users: Arc<dyn UserRepository>,
    caravans: Arc<dyn CaravanRepository>,
    reservations: Arc<dyn ReservationRepository>,
    notifier: Arc<dyn Notifier>,
    validator: ReservationValidator,
    calculator: PriceCalculator,
}

impl CreateReservationHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        caravans: Arc<dyn CaravanRepository>,
        reservations: Arc<dyn ReservationRepository>,
        notifier: Arc<dyn Notifier>,
        validator: ReservationValidator,
    ) -> Self {
        Self {
            users,
            caravans,
            reservations,
            notifier,
            validator,
            calculator: PriceCalculator::new(),
        }
    }

    /// Attempts to create a Pending reservation.
    ///
    /// # Errors
    ///
    /// Only lookup and infrastructure failures. Validation and conflict
    /// failures are reported as [`CreateReservationOutcome::Declined`].
    pub async fn handle(
        &self,
        cmd: CreateReservationCommand,
    ) -> Result<CreateReservationOutcome, ReservationError> {
        let guest = self
            .users
            .find_by_id(&cmd.guest_id)
            .await
            .map_err(|e| ReservationError::Infrastructure(e.to_string()))?
            .ok_or(ReservationError::UserNotFound(cmd.guest_id))?;
        let caravan = self
            .caravans
            .find_by_id(&cmd.caravan_id)
            .await
            .map_err(|e| ReservationError::Infrastructure(e.to_string()))?
            .ok_or(ReservationError::CaravanNotFound(cmd.caravan_id))?;

        // Checks 1-3: role, dates, caravan status. Raw dates go in so
        // the role check fires before any date sanity check.
        let period = match self.validator.validate_request(
            &guest,
            &caravan,
            cmd.start,
            cmd.end,
            BookingDate::today(),
        ) {
            Ok(period) => period,
            Err(reason) => return Ok(self.decline(reason)),
        };

        // Check 4: no overlap with existing bookings. The repository
        // re-checks under its own exclusion scope on insert; this early
        // query keeps the fail-fast ordering (no price is computed for a
        // conflicting range).
        if !self
            .reservations
            .is_caravan_available(caravan.id(), &period)
            .await?
        {
            return Ok(self.decline(ReservationError::DateRangeTaken(*caravan.id())));
        }

        let policy = DiscountPolicy::for_duration(period.days());
        let total_price = self.calculator.total_price(caravan.daily_rate(), &period, policy);

        let reservation = Reservation::new(
            ReservationId::new(),
            *guest.id(),
            *caravan.id(),
            period,
            total_price,
        );

        match self.reservations.add(&reservation).await {
            Ok(()) => {}
            Err(err) if err.declines_creation() => return Ok(self.decline(err)),
            Err(err) => return Err(err),
        }

        info!(
            reservation_id = %reservation.id(),
            caravan_id = %caravan.id(),
            guest_id = %guest.id(),
            total_price,
            ?policy,
            "reservation created"
        );

        // Fire-and-forget: delivery failures never roll back the booking.
        self.send(
            guest.id(),
            &format!(
                "Your booking request {} has been submitted and awaits host approval.",
                reservation.id()
            ),
        )
        .await;
        self.send(
            caravan.host_id(),
            &format!(
                "New booking request for {}: approval needed.",
                caravan.name()
            ),
        )
        .await;

        Ok(CreateReservationOutcome::Created(reservation))
    }

    fn decline(&self, reason: ReservationError) -> CreateReservationOutcome {
        warn!(kind = %reason.kind(), %reason, "booking request declined");
        CreateReservationOutcome::Declined(reason)
    }

    async fn send(&self, user_id: &UserId, message: &str) {
        if let Err(err) = self.notifier.notify(user_id, message).await {
            warn!(%user_id, %err, "notification delivery failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryCaravanRepository, InMemoryReservationRepository, InMemoryUserRepository,
    };
    use crate::adapters::notification::RecordingNotifier;
    use crate::domain::caravan::Caravan;
    use crate::domain::foundation::StayPeriod;
    use crate::domain::reservation::ReservationStatus;
    use crate::domain::user::{User, UserRole};
    use async_trait::async_trait;

    struct Fixture {
        handler: CreateReservationHandler,
        notifier: Arc<RecordingNotifier>,
        guest_id: UserId,
        host_id: UserId,
        caravan_id: CaravanId,
    }

    async fn fixture_with(daily_rate: i64, notifier: Arc<RecordingNotifier>) -> Fixture {
        let users = Arc::new(InMemoryUserRepository::new());
        let caravans = Arc::new(InMemoryCaravanRepository::new());
        let reservations = Arc::new(InMemoryReservationRepository::new());

        let guest = User::new(UserId::new(), "bob_guest", UserRole::Guest).unwrap();
        let host = User::new(UserId::new(), "alice_host", UserRole::Host).unwrap();
        users.add(&guest).await.unwrap();
        users.add(&host).await.unwrap();

        let caravan = Caravan::new(
            CaravanId::new(),
            *host.id(),
            "Cozy Camper Van",
            2,
            daily_rate,
        )
        .unwrap();
        caravans.add(&caravan).await.unwrap();

        let handler = CreateReservationHandler::new(
            users,
            caravans,
            reservations,
            notifier.clone(),
            ReservationValidator::new(1),
        );

        Fixture {
            handler,
            notifier,
            guest_id: *guest.id(),
            host_id: *host.id(),
            caravan_id: *caravan.id(),
        }
    }

    async fn fixture(daily_rate: i64) -> Fixture {
        fixture_with(daily_rate, Arc::new(RecordingNotifier::new())).await
    }

    fn cmd(f: &Fixture, offset: u64, nights: u64) -> CreateReservationCommand {
        let start = BookingDate::today().plus_days(offset);
        CreateReservationCommand {
            guest_id: f.guest_id,
            caravan_id: f.caravan_id,
            start,
            end: start.plus_days(nights),
        }
    }

    #[tokio::test]
    async fn five_day_stay_pays_full_price() {
        let f = fixture(80_000).await;
        let outcome = f.handler.handle(cmd(&f, 7, 4)).await.unwrap();

        let reservation = outcome.reservation().expect("created");
        assert_eq!(reservation.total_price(), 400_000);
        assert_eq!(reservation.status(), ReservationStatus::Pending);
    }

    #[tokio::test]
    async fn seven_day_stay_gets_long_stay_discount() {
        let f = fixture(80_000).await;
        let outcome = f.handler.handle(cmd(&f, 7, 6)).await.unwrap();

        let reservation = outcome.reservation().expect("created");
        assert_eq!(reservation.total_price(), 504_000);
    }

    #[tokio::test]
    async fn notifies_guest_and_host() {
        let f = fixture(80_000).await;
        f.handler.handle(cmd(&f, 7, 4)).await.unwrap();

        assert_eq!(f.notifier.sent().len(), 2);
        assert_eq!(f.notifier.sent_to(&f.guest_id).len(), 1);
        assert_eq!(f.notifier.sent_to(&f.host_id).len(), 1);
    }

    #[tokio::test]
    async fn notification_outage_does_not_roll_back_the_booking() {
        let f = fixture_with(80_000, Arc::new(RecordingNotifier::failing())).await;
        let outcome = f.handler.handle(cmd(&f, 7, 4)).await.unwrap();
        assert!(outcome.reservation().is_some());
    }

    #[tokio::test]
    async fn overlapping_request_is_declined_as_conflict() {
        let f = fixture(80_000).await;
        f.handler.handle(cmd(&f, 10, 6)).await.unwrap();

        let outcome = f.handler.handle(cmd(&f, 12, 2)).await.unwrap();
        assert_eq!(
            outcome,
            CreateReservationOutcome::Declined(ReservationError::DateRangeTaken(f.caravan_id))
        );
        // Declined before pricing or notifications: only the first
        // booking's two messages exist.
        assert_eq!(f.notifier.sent().len(), 2);
    }

    #[tokio::test]
    async fn host_cannot_book() {
        let f = fixture(80_000).await;
        let mut command = cmd(&f, 7, 4);
        command.guest_id = f.host_id;

        let outcome = f.handler.handle(command).await.unwrap();
        assert_eq!(
            outcome,
            CreateReservationOutcome::Declined(ReservationError::GuestRoleRequired)
        );
    }

    #[tokio::test]
    async fn host_with_reversed_dates_is_declined_for_the_role_first() {
        let f = fixture(80_000).await;
        let start = BookingDate::today().plus_days(10);
        let outcome = f
            .handler
            .handle(CreateReservationCommand {
                guest_id: f.host_id,
                caravan_id: f.caravan_id,
                start,
                end: start.minus_days(3),
            })
            .await
            .unwrap();
        assert_eq!(
            outcome,
            CreateReservationOutcome::Declined(ReservationError::GuestRoleRequired)
        );
    }

    #[tokio::test]
    async fn reversed_dates_are_declined() {
        let f = fixture(80_000).await;
        let start = BookingDate::today().plus_days(10);
        let outcome = f
            .handler
            .handle(CreateReservationCommand {
                guest_id: f.guest_id,
                caravan_id: f.caravan_id,
                start,
                end: start.minus_days(2),
            })
            .await
            .unwrap();
        assert!(matches!(
            outcome,
            CreateReservationOutcome::Declined(ReservationError::EndBeforeStart { .. })
        ));
    }

    #[tokio::test]
    async fn unknown_guest_is_an_error_not_a_decline() {
        let f = fixture(80_000).await;
        let mut command = cmd(&f, 7, 4);
        command.guest_id = UserId::new();

        let err = f.handler.handle(command).await.unwrap_err();
        assert!(matches!(err, ReservationError::UserNotFound(_)));
    }

    struct FailingReservationRepository;

    #[async_trait]
    impl ReservationRepository for FailingReservationRepository {
        async fn add(&self, _reservation: &Reservation) -> Result<(), ReservationError> {
            Err(ReservationError::Infrastructure("store offline".into()))
        }

        async fn update(&self, _reservation: &Reservation) -> Result<(), ReservationError> {
            Err(ReservationError::Infrastructure("store offline".into()))
        }

        async fn find_by_id(
            &self,
            id: &crate::domain::foundation::ReservationId,
        ) -> Result<Option<Reservation>, ReservationError> {
            let _ = id;
            Ok(None)
        }

        async fn is_caravan_available(
            &self,
            _caravan_id: &CaravanId,
            _period: &StayPeriod,
        ) -> Result<bool, ReservationError> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn storage_failure_propagates_as_error() {
        let users = Arc::new(InMemoryUserRepository::new());
        let caravans = Arc::new(InMemoryCaravanRepository::new());
        let notifier = Arc::new(RecordingNotifier::new());

        let guest = User::new(UserId::new(), "bob_guest", UserRole::Guest).unwrap();
        let host = User::new(UserId::new(), "alice_host", UserRole::Host).unwrap();
        users.add(&guest).await.unwrap();
        users.add(&host).await.unwrap();
        let caravan =
            Caravan::new(CaravanId::new(), *host.id(), "Camper", 2, 80_000).unwrap();
        caravans.add(&caravan).await.unwrap();

        let handler = CreateReservationHandler::new(
            users,
            caravans,
            Arc::new(FailingReservationRepository),
            notifier.clone(),
            ReservationValidator::new(1),
        );

        let start = BookingDate::today().plus_days(7);
        let err = handler
            .handle(CreateReservationCommand {
                guest_id: *guest.id(),
                caravan_id: *caravan.id(),
                start,
                end: start.plus_days(4),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ReservationError::Infrastructure(_)));
        assert!(notifier.sent().is_empty());
    }
}
