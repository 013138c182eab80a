// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared builders and the recording transport used across session
//! tests.

use crate::session::CadSession;
use async_trait::async_trait;
use cad_domain::{
    BookOffRequest, BookOnOfficer, BookOnRequest, Callsign, Coordinate, Incident, Location,
    Officer, Resource, ResourceStatus, ResourceUnitType, SyncPayload,
};
use cad_transport::{CadTransport, StatusChangeRequest, SyncRequest, TransportError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn incident(number: &str) -> Incident {
    Incident {
        identifier: format!("id-{number}"),
        incident_number: number.to_owned(),
        secondary_code: None,
        incident_type: Some(String::from("Burglary")),
        grade: Some(cad_domain::IncidentGrade::P2),
        patrol_group: Some(String::from("Collingwood")),
        location: Some(Location::at(Coordinate::new(-37.8136, 144.9631))),
        created_at: None,
        last_updated: None,
        details: None,
        informant: None,
        persons: Vec::new(),
        vehicles: Vec::new(),
        locations: Vec::new(),
        narrative: Vec::new(),
    }
}

pub fn resource(
    callsign: &str,
    status: ResourceStatus,
    assigned: &[&str],
    current: Option<&str>,
) -> Resource {
    Resource {
        callsign: Callsign::new(callsign),
        category: None,
        assigned_incidents: assigned.iter().map(|s| (*s).to_owned()).collect(),
        current_incident: current.map(str::to_owned),
        driver: None,
        officer_ids: vec![String::from("840331")],
        equipment: Vec::new(),
        shift_start: None,
        shift_end: None,
        station: None,
        patrol_group: Some(String::from("Collingwood")),
        status,
        unit_type: ResourceUnitType::Vehicle,
        location: None,
        last_updated: None,
        activity_log: Vec::new(),
        remarks: None,
        serial: None,
    }
}

pub fn book_on_request(callsign: &str, payroll_ids: &[&str]) -> BookOnRequest {
    let shift_start = chrono::Utc::now();
    BookOnRequest {
        callsign: Callsign::new(callsign),
        shift_start,
        shift_end: shift_start + chrono::Duration::hours(8),
        officers: payroll_ids
            .iter()
            .map(|payroll_id| BookOnOfficer::new((*payroll_id).to_owned()))
            .collect(),
        equipment: Vec::new(),
        odometer: None,
        remarks: None,
    }
}

/// A transport that serves one configurable payload and records every
/// submission.
pub struct RecordingTransport {
    payload: Mutex<SyncPayload>,
    fetch_count: AtomicUsize,
    fail_submissions: AtomicBool,
    status_changes: Mutex<Vec<StatusChangeRequest>>,
    book_ons: Mutex<Vec<BookOnRequest>>,
    book_offs: Mutex<Vec<BookOffRequest>>,
}

impl RecordingTransport {
    pub fn new(payload: SyncPayload) -> Arc<Self> {
        Arc::new(Self {
            payload: Mutex::new(payload),
            fetch_count: AtomicUsize::new(0),
            fail_submissions: AtomicBool::new(false),
            status_changes: Mutex::new(Vec::new()),
            book_ons: Mutex::new(Vec::new()),
            book_offs: Mutex::new(Vec::new()),
        })
    }

    /// Replaces the payload served by subsequent fetches.
    pub fn set_payload(&self, payload: SyncPayload) {
        *self.payload.lock().unwrap() = payload;
    }

    /// Makes every subsequent submission fail with a backend error.
    pub fn fail_submissions(&self) {
        self.fail_submissions.store(true, Ordering::SeqCst);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    pub fn status_changes(&self) -> Vec<StatusChangeRequest> {
        self.status_changes.lock().unwrap().clone()
    }

    pub fn book_ons(&self) -> Vec<BookOnRequest> {
        self.book_ons.lock().unwrap().clone()
    }

    pub fn book_offs(&self) -> Vec<BookOffRequest> {
        self.book_offs.lock().unwrap().clone()
    }

    fn submission_result(&self) -> Result<(), TransportError> {
        if self.fail_submissions.load(Ordering::SeqCst) {
            Err(TransportError::Backend {
                status: 502,
                message: String::from("backend unavailable"),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CadTransport for RecordingTransport {
    async fn fetch_snapshot(&self, _request: &SyncRequest) -> Result<SyncPayload, TransportError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.payload.lock().unwrap().clone())
    }

    async fn submit_status_change(
        &self,
        request: &StatusChangeRequest,
    ) -> Result<(), TransportError> {
        self.submission_result()?;
        self.status_changes.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn book_on(&self, request: &BookOnRequest) -> Result<(), TransportError> {
        self.submission_result()?;
        self.book_ons.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn book_off(&self, request: &BookOffRequest) -> Result<(), TransportError> {
        self.submission_result()?;
        self.book_offs.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn fetch_employee_details(&self, payroll_id: &str) -> Result<Officer, TransportError> {
        Ok(Officer {
            payroll_id: payroll_id.to_owned(),
            given_name: Some(String::from("Jason")),
            surname: Some(String::from("Chieng")),
            rank: Some(String::from("Senior Constable")),
            contact_number: None,
            capabilities: Vec::new(),
            remarks: None,
        })
    }
}

/// Builds a session over a recording transport, books "P24" on for
/// officer 840331, and syncs the given payload.
pub async fn booked_on_session(payload: SyncPayload) -> (CadSession, Arc<RecordingTransport>) {
    let transport: Arc<RecordingTransport> = RecordingTransport::new(payload);
    let session: CadSession = CadSession::new(transport.clone());

    session.sync_initial("840331").await.unwrap();
    session
        .set_patrol_group(Some(String::from("Collingwood")))
        .await
        .unwrap();
    session
        .book_on(book_on_request("P24", &["840331"]))
        .await
        .unwrap();
    (session, transport)
}
