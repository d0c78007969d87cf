//! PaymentService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use eventra_types::{
        AppError, GatewayError, NewPayment, Payment, PaymentGateway, PaymentId,
        PaymentRepository, PaymentRequest, Preference, PreferenceItem, RemoteError, RepoError,
        Reservation, ReservationClient, ReservationId, Status, StatusId, StatusRepository, Ticket,
        TicketEvent, local_datetime,
    };

    use crate::PaymentService;

    // ─────────────────────────────────────────────────────────────────────────
    // Mocks
    // ─────────────────────────────────────────────────────────────────────────

    /// Simple in-memory store for testing the service layer.
    pub struct MockRepo {
        payments: Mutex<HashMap<PaymentId, Payment>>,
        statuses: HashMap<StatusId, Status>,
        next_id: Mutex<i64>,
        writes: Mutex<usize>,
    }

    impl MockRepo {
        pub fn new() -> Self {
            let statuses = [(1, "PENDING"), (2, "COMPLETED"), (3, "CANCELLED")]
                .into_iter()
                .map(|(id, d)| (StatusId::new(id), Status::new(StatusId::new(id), d)))
                .collect();
            Self {
                payments: Mutex::new(HashMap::new()),
                statuses,
                next_id: Mutex::new(1),
                writes: Mutex::new(0),
            }
        }

        pub fn writes(&self) -> usize {
            *self.writes.lock().unwrap()
        }

        pub fn len(&self) -> usize {
            self.payments.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PaymentRepository for MockRepo {
        async fn create_payment(&self, new: NewPayment) -> Result<Payment, RepoError> {
            let mut next = self.next_id.lock().unwrap();
            let id = PaymentId::new(*next);
            *next += 1;

            let status = self
                .statuses
                .get(&new.status_id)
                .cloned()
                .unwrap_or_else(|| Status::new(new.status_id, ""));
            let payment = Payment::from_parts(
                id,
                new.reservation_id,
                new.amount,
                new.payment_method,
                status,
                new.payment_date,
            );
            self.payments.lock().unwrap().insert(id, payment.clone());
            *self.writes.lock().unwrap() += 1;
            Ok(payment)
        }

        async fn get_payment(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
            Ok(self.payments.lock().unwrap().get(&id).cloned())
        }

        async fn list_payments(&self) -> Result<Vec<Payment>, RepoError> {
            let mut payments: Vec<_> = self.payments.lock().unwrap().values().cloned().collect();
            payments.sort_by_key(|p| p.id);
            Ok(payments)
        }

        async fn update_payment(&self, payment: &Payment) -> Result<Payment, RepoError> {
            let mut payments = self.payments.lock().unwrap();
            let slot = payments.get_mut(&payment.id).ok_or(RepoError::NotFound)?;
            *slot = payment.clone();
            *self.writes.lock().unwrap() += 1;
            Ok(payment.clone())
        }

        async fn delete_payment(&self, id: PaymentId) -> Result<bool, RepoError> {
            let removed = self.payments.lock().unwrap().remove(&id).is_some();
            if removed {
                *self.writes.lock().unwrap() += 1;
            }
            Ok(removed)
        }

        async fn payment_exists(&self, id: PaymentId) -> Result<bool, RepoError> {
            Ok(self.payments.lock().unwrap().contains_key(&id))
        }
    }

    #[async_trait]
    impl StatusRepository for MockRepo {
        async fn get_status(&self, id: StatusId) -> Result<Option<Status>, RepoError> {
            Ok(self.statuses.get(&id).cloned())
        }

        async fn list_statuses(&self) -> Result<Vec<Status>, RepoError> {
            let mut statuses: Vec<_> = self.statuses.values().cloned().collect();
            statuses.sort_by_key(|s| s.id);
            Ok(statuses)
        }
    }

    /// Reservation service fake. `budget` limits how many calls succeed
    /// before the service turns unreachable; `None` means unlimited.
    #[derive(Clone)]
    pub struct MockReservations {
        known: HashMap<ReservationId, Reservation>,
        budget: Arc<Mutex<Option<usize>>>,
    }

    impl MockReservations {
        pub fn with(reservations: Vec<Reservation>) -> Self {
            Self {
                known: reservations
                    .into_iter()
                    .map(|r| (r.reservation_id, r))
                    .collect(),
                budget: Arc::new(Mutex::new(None)),
            }
        }

        pub fn set_budget(&self, calls: Option<usize>) {
            *self.budget.lock().unwrap() = calls;
        }
    }

    #[async_trait]
    impl ReservationClient for MockReservations {
        async fn get_reservation(&self, id: ReservationId) -> Result<Reservation, RemoteError> {
            {
                let mut budget = self.budget.lock().unwrap();
                if let Some(left) = budget.as_mut() {
                    if *left == 0 {
                        return Err(RemoteError::Unavailable("connection refused".into()));
                    }
                    *left -= 1;
                }
            }
            self.known
                .get(&id)
                .cloned()
                .ok_or(RemoteError::NotFound(id))
        }
    }

    #[derive(Clone, Copy)]
    pub enum GatewayMode {
        Ok,
        ApiFailure,
        ClientFailure,
    }

    /// Gateway fake that records every item list it receives.
    #[derive(Clone)]
    pub struct MockGateway {
        mode: GatewayMode,
        calls: Arc<Mutex<Vec<Vec<PreferenceItem>>>>,
    }

    impl MockGateway {
        pub fn new(mode: GatewayMode) -> Self {
            Self {
                mode,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn calls(&self) -> Vec<Vec<PreferenceItem>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PaymentGateway for MockGateway {
        async fn create_preference(
            &self,
            items: Vec<PreferenceItem>,
        ) -> Result<Preference, GatewayError> {
            self.calls.lock().unwrap().push(items.clone());
            match self.mode {
                GatewayMode::Ok => {
                    let mut extra = serde_json::Map::new();
                    extra.insert("collector_id".into(), serde_json::json!(42));
                    Ok(Preference {
                        id: "pref-123".into(),
                        init_point: Some("https://checkout.example/pref-123".into()),
                        sandbox_init_point: None,
                        items,
                        extra,
                    })
                }
                GatewayMode::ApiFailure => Err(GatewayError::Api {
                    status: 400,
                    message: "invalid unit_price".into(),
                }),
                GatewayMode::ClientFailure => {
                    Err(GatewayError::Client("connection reset".into()))
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Fixtures
    // ─────────────────────────────────────────────────────────────────────────

    fn reservation(id: i64, quantity: i32, price: f64) -> Reservation {
        Reservation {
            reservation_id: ReservationId::new(id),
            user: None,
            ticket: Ticket {
                ticket_id: Some(7),
                event: TicketEvent {
                    event_id: Some(3),
                    title: "Lima Jazz Night".to_string(),
                    description: Some("Open air".to_string()),
                },
                description: "VIP".to_string(),
                price,
            },
            quantity,
            reservation_date: None,
        }
    }

    fn request(reservation: i64, status: i64) -> PaymentRequest {
        PaymentRequest {
            reservation_id: ReservationId::new(reservation),
            amount: 24100,
            payment_method: "CARD".to_string(),
            status_id: StatusId::new(status),
            payment_date: local_datetime::parse("2024-05-01T18:30:00").unwrap(),
        }
    }

    type TestService = PaymentService<MockRepo, MockReservations, MockGateway>;

    fn service_with(gateway: GatewayMode) -> (TestService, MockReservations, MockGateway) {
        let reservations = MockReservations::with(vec![
            reservation(11, 2, 120.5),
            reservation(12, 1, 80.0),
        ]);
        let gateway = MockGateway::new(gateway);
        let service = PaymentService::new(MockRepo::new(), reservations.clone(), gateway.clone());
        (service, reservations, gateway)
    }

    fn service() -> (TestService, MockReservations) {
        let (service, reservations, _) = service_with(GatewayMode::Ok);
        (service, reservations)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Add
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_add_payment_success() {
        let (service, _) = service();

        let created = service.add_payment(request(11, 1)).await.unwrap();

        assert_eq!(created.payment_id, PaymentId::new(1));
        assert_eq!(created.amount, 24100);
        assert_eq!(created.status.status_id, StatusId::new(1));
        assert_eq!(created.status.description, "PENDING");
        assert!(created.reservation.is_none());
        assert_eq!(service.repo().len(), 1);
        assert_eq!(service.repo().writes(), 1);
    }

    #[tokio::test]
    async fn test_add_payment_unknown_reservation_fails() {
        let (service, _) = service();

        let result = service.add_payment(request(99, 1)).await;

        assert!(matches!(
            result,
            Err(AppError::ReservationNotFound { id, source: eventra_types::RemoteError::NotFound(_) })
                if id == ReservationId::new(99)
        ));
        assert_eq!(service.repo().writes(), 0);
    }

    #[tokio::test]
    async fn test_add_payment_reservation_service_down_fails() {
        let (service, reservations) = service();
        reservations.set_budget(Some(0));

        let result = service.add_payment(request(11, 1)).await;

        assert!(matches!(
            result,
            Err(AppError::ReservationNotFound {
                source: RemoteError::Unavailable(_),
                ..
            })
        ));
        assert_eq!(service.repo().writes(), 0);
    }

    #[tokio::test]
    async fn test_add_payment_unknown_status_fails() {
        let (service, _) = service();

        let result = service.add_payment(request(11, 9)).await;

        assert!(matches!(result, Err(AppError::StatusNotFound(id)) if id == StatusId::new(9)));
        assert_eq!(service.repo().writes(), 0);
    }

    #[tokio::test]
    async fn test_add_payment_negative_amount_fails() {
        let (service, _) = service();
        let mut req = request(11, 1);
        req.amount = -1;

        let result = service.add_payment(req).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(service.repo().writes(), 0);
    }

    #[tokio::test]
    async fn test_add_payment_blank_method_fails() {
        let (service, _) = service();
        let mut req = request(11, 1);
        req.payment_method = "  ".to_string();

        let result = service.add_payment(req).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Process
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_process_payment_builds_one_item() {
        let (service, _, gateway) = service_with(GatewayMode::Ok);

        let preference = service.process_payment(request(11, 1)).await.unwrap();

        assert_eq!(preference.id, "pref-123");
        assert_eq!(preference.extra["collector_id"], 42);

        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].len(), 1);
        let item = &calls[0][0];
        assert_eq!(item.id, "11");
        assert_eq!(item.title, "Lima Jazz Night");
        assert_eq!(item.description, "VIP");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit_price, 120.5);
        assert_eq!(item.currency_id, eventra_types::CHECKOUT_CURRENCY_ID);

        // Nothing is stored
        assert_eq!(service.repo().writes(), 0);
    }

    #[tokio::test]
    async fn test_process_payment_unknown_reservation_skips_gateway() {
        let (service, _, gateway) = service_with(GatewayMode::Ok);

        let result = service.process_payment(request(99, 1)).await;

        assert!(matches!(result, Err(AppError::ReservationNotFound { .. })));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_process_payment_gateway_api_failure() {
        let (service, _, _) = service_with(GatewayMode::ApiFailure);

        let result = service.process_payment(request(11, 1)).await;

        assert!(matches!(
            result,
            Err(AppError::Gateway(GatewayError::Api { status: 400, .. }))
        ));
    }

    #[tokio::test]
    async fn test_process_payment_gateway_client_failure() {
        let (service, _, _) = service_with(GatewayMode::ClientFailure);

        let result = service.process_payment(request(11, 1)).await;

        assert!(matches!(
            result,
            Err(AppError::Gateway(GatewayError::Client(_)))
        ));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_get_payment_with_reservation() {
        let (service, _) = service();
        let created = service.add_payment(request(11, 2)).await.unwrap();

        let fetched = service.get_payment(created.payment_id).await.unwrap();

        let reservation = fetched.reservation.unwrap();
        assert_eq!(reservation.reservation_id, ReservationId::new(11));
        assert_eq!(fetched.status.description, "COMPLETED");
    }

    #[tokio::test]
    async fn test_get_payment_not_found() {
        let (service, _) = service();

        let result = service.get_payment(PaymentId::new(404)).await;

        assert!(matches!(result, Err(AppError::PaymentNotFound(_))));
    }

    #[tokio::test]
    async fn test_get_payment_degrades_when_reservation_unreachable() {
        let (service, reservations) = service();
        let created = service.add_payment(request(11, 1)).await.unwrap();
        reservations.set_budget(Some(0));

        let fetched = service.get_payment(created.payment_id).await.unwrap();

        assert!(fetched.reservation.is_none());
        assert_eq!(fetched.amount, 24100);
    }

    #[tokio::test]
    async fn test_list_payments_degrades_when_reservation_unreachable() {
        let (service, reservations) = service();
        service.add_payment(request(11, 1)).await.unwrap();
        service.add_payment(request(12, 3)).await.unwrap();
        reservations.set_budget(Some(0));

        let payments = service.list_payments().await.unwrap();

        assert_eq!(payments.len(), 2);
        assert!(payments.iter().all(|p| p.reservation.is_none()));
    }

    #[tokio::test]
    async fn test_list_payments_partial_degradation() {
        let (service, reservations) = service();
        service.add_payment(request(11, 1)).await.unwrap();
        service.add_payment(request(12, 1)).await.unwrap();
        // First lookup succeeds, the second finds the service gone
        reservations.set_budget(Some(1));

        let payments = service.list_payments().await.unwrap();

        assert!(payments[0].reservation.is_some());
        assert!(payments[1].reservation.is_none());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Update
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_update_payment_success() {
        let (service, _) = service();
        let created = service.add_payment(request(11, 1)).await.unwrap();

        let mut req = request(12, 2);
        req.amount = 8000;
        req.payment_method = "YAPE".to_string();
        let updated = service
            .update_payment(created.payment_id, req)
            .await
            .unwrap();

        assert_eq!(updated.payment_id, created.payment_id);
        assert_eq!(updated.amount, 8000);
        assert_eq!(updated.payment_method, "YAPE");
        assert_eq!(updated.status.description, "COMPLETED");
        assert_eq!(
            updated.reservation.unwrap().reservation_id,
            ReservationId::new(12)
        );
        assert_eq!(service.repo().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_payment_fails() {
        let (service, _) = service();
        service.add_payment(request(11, 1)).await.unwrap();

        let result = service.update_payment(PaymentId::new(77), request(12, 2)).await;

        assert!(matches!(result, Err(AppError::PaymentNotFound(_))));
        assert_eq!(service.repo().writes(), 1);
        let untouched = service.repo().get_payment(PaymentId::new(1)).await.unwrap();
        assert_eq!(untouched.unwrap().reservation_id, ReservationId::new(11));
    }

    #[tokio::test]
    async fn test_update_unknown_reservation_fails() {
        let (service, _) = service();
        let created = service.add_payment(request(11, 1)).await.unwrap();

        let result = service.update_payment(created.payment_id, request(99, 1)).await;

        assert!(matches!(result, Err(AppError::ReservationNotFound { .. })));
        assert_eq!(service.repo().writes(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_status_fails() {
        let (service, _) = service();
        let created = service.add_payment(request(11, 1)).await.unwrap();

        let result = service.update_payment(created.payment_id, request(11, 42)).await;

        assert!(matches!(result, Err(AppError::StatusNotFound(_))));
        assert_eq!(service.repo().writes(), 1);
    }

    #[tokio::test]
    async fn test_update_response_fetch_failure_keeps_write() {
        let (service, reservations) = service();
        let created = service.add_payment(request(11, 1)).await.unwrap();
        // The precondition lookup succeeds, the response lookup does not
        reservations.set_budget(Some(1));

        let result = service.update_payment(created.payment_id, request(12, 3)).await;

        assert!(matches!(
            result,
            Err(AppError::Remote(RemoteError::Unavailable(_)))
        ));
        let stored = service
            .repo()
            .get_payment(created.payment_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.reservation_id, ReservationId::new(12));
        assert_eq!(stored.status.description, "CANCELLED");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Delete
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_delete_payment() {
        let (service, _) = service();
        let created = service.add_payment(request(11, 1)).await.unwrap();

        service.delete_payment(created.payment_id).await.unwrap();

        let result = service.get_payment(created.payment_id).await;
        assert!(matches!(result, Err(AppError::PaymentNotFound(_))));
        assert_eq!(service.repo().len(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_payment_fails() {
        let (service, _) = service();
        service.add_payment(request(11, 1)).await.unwrap();

        let result = service.delete_payment(PaymentId::new(5)).await;

        assert!(matches!(result, Err(AppError::PaymentNotFound(_))));
        assert_eq!(service.repo().len(), 1);
        assert_eq!(service.repo().writes(), 1);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Statuses
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_list_statuses() {
        let (service, _) = service();

        let statuses = service.list_statuses().await.unwrap();

        assert_eq!(statuses.len(), 3);
        assert_eq!(statuses[0].description, "PENDING");
    }
}
