// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared builders and the scripted transport used across core tests.

use async_trait::async_trait;
use cad_domain::{
    BookOffRequest, BookOnRequest, Callsign, Coordinate, Incident, IncidentGrade, Location,
    Officer, Patrol, Resource, ResourceStatus, ResourceUnitType, SyncPayload,
};
use cad_transport::{CadTransport, StatusChangeRequest, SyncRequest, TransportError};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Builds an incident in the given patrol group.
pub fn incident(number: &str, grade: Option<IncidentGrade>, patrol_group: &str) -> Incident {
    Incident {
        identifier: format!("id-{number}"),
        incident_number: number.to_owned(),
        secondary_code: None,
        incident_type: Some(String::from("Vehicle Theft")),
        grade,
        patrol_group: Some(patrol_group.to_owned()),
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

/// Builds a resource with the given assignments.
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
        officer_ids: vec![String::from("840331"), String::from("840556")],
        equipment: Vec::new(),
        shift_start: None,
        shift_end: None,
        station: None,
        patrol_group: Some(String::from("Collingwood")),
        status,
        unit_type: ResourceUnitType::Vehicle,
        location: Some(Location::at(Coordinate::new(-37.8050, 144.9700))),
        last_updated: None,
        activity_log: Vec::new(),
        remarks: None,
        serial: None,
    }
}

/// Builds an officer with the given payroll id.
pub fn officer(payroll_id: &str) -> Officer {
    Officer {
        payroll_id: payroll_id.to_owned(),
        given_name: Some(String::from("Jason")),
        surname: Some(String::from("Chieng")),
        rank: Some(String::from("Senior Constable")),
        contact_number: None,
        capabilities: Vec::new(),
        remarks: None,
    }
}

/// Builds a patrol in the given patrol group.
pub fn patrol(identifier: &str, patrol_group: &str) -> Patrol {
    Patrol {
        identifier: identifier.to_owned(),
        patrol_type: Some(String::from("Liquor Controls")),
        subtype: None,
        patrol_group: Some(patrol_group.to_owned()),
        location: Some(Location::at(Coordinate::new(-37.8090, 144.9750))),
        details: None,
        created_at: None,
        last_updated: None,
        persons: Vec::new(),
        vehicles: Vec::new(),
        narrative: Vec::new(),
    }
}

/// Builds the default test payload: two incidents, two resources, one
/// officer pair.
pub fn payload() -> SyncPayload {
    SyncPayload {
        incidents: vec![
            incident("I-100", Some(IncidentGrade::P1), "Collingwood"),
            incident("I-200", Some(IncidentGrade::P3), "Collingwood"),
        ],
        resources: vec![
            resource(
                "P24",
                ResourceStatus::Proceeding,
                &["I-100"],
                Some("I-100"),
            ),
            resource("B18", ResourceStatus::OnAir, &[], None),
        ],
        officers: vec![officer("840331"), officer("840556")],
        patrols: vec![patrol("PT-1", "Collingwood")],
        broadcasts: Vec::new(),
    }
}

/// The default sync request used by store tests.
pub fn request() -> SyncRequest {
    SyncRequest::PatrolGroup {
        patrol_group: String::from("Collingwood"),
    }
}

/// One scripted transport response.
pub struct ScriptedResponse {
    /// How long the fetch takes.
    pub delay_ms: u64,
    /// What the fetch returns.
    pub result: Result<SyncPayload, TransportError>,
}

impl ScriptedResponse {
    pub const fn ok(payload: SyncPayload) -> Self {
        Self {
            delay_ms: 0,
            result: Ok(payload),
        }
    }

    pub const fn ok_after(delay_ms: u64, payload: SyncPayload) -> Self {
        Self {
            delay_ms,
            result: Ok(payload),
        }
    }

    pub const fn err(err: TransportError) -> Self {
        Self {
            delay_ms: 0,
            result: Err(err),
        }
    }
}

/// A transport that replays scripted responses and counts fetches.
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<ScriptedResponse>>,
    fetch_count: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<ScriptedResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            fetch_count: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CadTransport for ScriptedTransport {
    async fn fetch_snapshot(&self, _request: &SyncRequest) -> Result<SyncPayload, TransportError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        let scripted: ScriptedResponse = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ScriptedResponse::ok(SyncPayload::default()));
        if scripted.delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(scripted.delay_ms)).await;
        }
        scripted.result
    }

    async fn submit_status_change(
        &self,
        _request: &StatusChangeRequest,
    ) -> Result<(), TransportError> {
        Ok(())
    }

    async fn book_on(&self, _request: &BookOnRequest) -> Result<(), TransportError> {
        Ok(())
    }

    async fn book_off(&self, _request: &BookOffRequest) -> Result<(), TransportError> {
        Ok(())
    }

    async fn fetch_employee_details(&self, payroll_id: &str) -> Result<Officer, TransportError> {
        Ok(officer(payroll_id))
    }
}
