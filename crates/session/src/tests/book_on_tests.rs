// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{RecordingTransport, book_on_request, booked_on_session, incident, resource};
use crate::error::SessionError;
use crate::session::CadSession;
use cad_core::CadEvent;
use cad_domain::{Callsign, ResourceStatus, SyncPayload};
use std::sync::Arc;

fn on_air_payload() -> SyncPayload {
    SyncPayload {
        incidents: vec![incident("I-100")],
        resources: vec![resource("P24", ResourceStatus::OnAir, &[], None)],
        ..SyncPayload::default()
    }
}

fn tasked_payload() -> SyncPayload {
    SyncPayload {
        incidents: vec![incident("I-100")],
        resources: vec![resource(
            "P24",
            ResourceStatus::AtIncident,
            &["I-100"],
            Some("I-100"),
        )],
        ..SyncPayload::default()
    }
}

#[tokio::test]
async fn test_book_on_records_state_and_notifies() {
    let transport: Arc<RecordingTransport> = RecordingTransport::new(on_air_payload());
    let session: CadSession = CadSession::new(transport.clone());
    session.sync_initial("840331").await.unwrap();
    session
        .set_patrol_group(Some(String::from("Collingwood")))
        .await
        .unwrap();
    let mut rx = session.events().subscribe();

    session
        .book_on(book_on_request("P24", &["840331"]))
        .await
        .unwrap();

    assert_eq!(session.booked_on_callsign(), Some(Callsign::new("P24")));
    assert_eq!(transport.book_ons().len(), 1);
    assert_eq!(session.activity_log().len(), 1);
    assert_eq!(session.activity_log().entries()[0].action.name, "BookOn");

    // BookOnChanged precedes the refresh's SyncChanged.
    assert_eq!(rx.try_recv().unwrap(), CadEvent::BookOnChanged);
    assert_eq!(rx.try_recv().unwrap(), CadEvent::SyncChanged);
}

#[tokio::test]
async fn test_book_on_validation_precedes_transport() {
    let transport: Arc<RecordingTransport> = RecordingTransport::new(on_air_payload());
    let session: CadSession = CadSession::new(transport.clone());

    let result = session.book_on(book_on_request("P24", &[])).await;

    assert!(matches!(
        result,
        Err(SessionError::DomainRuleViolation { ref rule, .. }) if rule == "book_on_officers"
    ));
    assert!(transport.book_ons().is_empty());
    assert!(session.booked_on_callsign().is_none());
    assert!(session.activity_log().is_empty());
}

#[tokio::test]
async fn test_book_on_without_self_leaves_session_booked_off() {
    let transport: Arc<RecordingTransport> = RecordingTransport::new(on_air_payload());
    let session: CadSession = CadSession::new(transport.clone());
    session.sync_initial("840331").await.unwrap();

    // Updating another crew's callsign: the logged-in officer is not in
    // the officer list.
    session
        .book_on(book_on_request("B18", &["777777"]))
        .await
        .unwrap();

    assert_eq!(transport.book_ons().len(), 1);
    assert!(session.booked_on_callsign().is_none());
}

#[tokio::test]
async fn test_terminate_succeeds_from_general_status() {
    let (session, transport) = booked_on_session(on_air_payload()).await;
    let mut rx = session.events().subscribe();

    session.terminate_shift().await.unwrap();

    assert!(session.booked_on_callsign().is_none());
    assert_eq!(transport.book_offs().len(), 1);
    assert_eq!(
        transport.book_offs()[0].callsign,
        Callsign::new("P24")
    );
    assert_eq!(rx.try_recv().unwrap(), CadEvent::BookOnChanged);

    let log = session.activity_log();
    let last = log.entries().last().unwrap();
    assert_eq!(last.action.name, "BookOff");
    assert_eq!(last.status_after.as_deref(), Some("Off Duty"));
}

#[tokio::test]
async fn test_terminate_blocked_by_incident_status() {
    let (session, transport) = booked_on_session(tasked_payload()).await;

    let result = session.terminate_shift().await;

    match result {
        Err(SessionError::DomainRuleViolation { rule, message }) => {
            assert_eq!(rule, "termination_blocked");
            assert!(message.contains("finalised"), "{message}");
        }
        other => panic!("expected termination to be blocked, got {other:?}"),
    }
    assert!(transport.book_offs().is_empty());
    // Still booked on.
    assert_eq!(session.booked_on_callsign(), Some(Callsign::new("P24")));
}

#[tokio::test]
async fn test_terminate_blocked_by_live_assignment() {
    // A general status but a current incident still set: the defensive
    // assignment check blocks termination.
    let payload: SyncPayload = SyncPayload {
        incidents: vec![incident("I-100")],
        resources: vec![resource(
            "P24",
            ResourceStatus::OnAir,
            &["I-100"],
            Some("I-100"),
        )],
        ..SyncPayload::default()
    };
    let (session, transport) = booked_on_session(payload).await;

    let result = session.terminate_shift().await;

    assert!(matches!(
        result,
        Err(SessionError::DomainRuleViolation { ref rule, .. }) if rule == "termination_blocked"
    ));
    assert!(transport.book_offs().is_empty());
}

#[tokio::test]
async fn test_terminate_requires_book_on() {
    let transport: Arc<RecordingTransport> = RecordingTransport::new(on_air_payload());
    let session: CadSession = CadSession::new(transport);

    assert_eq!(
        session.terminate_shift().await,
        Err(SessionError::NotBookedOn)
    );
}

#[tokio::test]
async fn test_transport_failure_keeps_book_on_record() {
    let (session, transport) = booked_on_session(on_air_payload()).await;
    transport.fail_submissions();

    let result = session.terminate_shift().await;

    assert!(matches!(result, Err(SessionError::Transport(_))));
    // The shift is still live locally.
    assert_eq!(session.booked_on_callsign(), Some(Callsign::new("P24")));
}

#[tokio::test]
async fn test_sync_initial_stores_officer_details() {
    let transport: Arc<RecordingTransport> = RecordingTransport::new(on_air_payload());
    let session: CadSession = CadSession::new(transport.clone());

    let officer = session.sync_initial("840331").await.unwrap();

    assert_eq!(officer.payroll_id, "840331");
    assert_eq!(
        session.officer_details().map(|o| o.payroll_id),
        Some(String::from("840331"))
    );
}
