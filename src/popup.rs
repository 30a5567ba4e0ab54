use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use thiserror::Error;

use crate::{
    client::SolcatClient,
    errors::ApiError,
    types::{Address, AddressStatus, ReportResult},
};

pub const INVALID_ADDRESS: &str = "Invalid Solana address";
pub const CHECK_FAILED: &str = "Error checking address status";
pub const REPORT_SUCCEEDED: &str = "Address reported successfully";
pub const REPORT_FAILED: &str = "Error reporting address";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PopupPhase {
    Idle,
    Checking,
    StatusShown,
    ErrorShown,
    Reporting,
    ReportSuccess,
    ReportError,
}

/// What the popup currently displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupView {
    pub input: String,
    pub phase: PopupPhase,
    pub status_visible: bool,
    pub status_text: String,
    pub risk_text: String,
    pub risk_class: Option<String>,
    /// False when the backend sent a risk level outside low/medium/high.
    pub risk_styled: bool,
    pub report_visible: bool,
}

impl Default for PopupView {
    fn default() -> Self {
        Self {
            input: String::new(),
            phase: PopupPhase::Idle,
            status_visible: false,
            status_text: String::new(),
            risk_text: String::new(),
            risk_class: None,
            risk_styled: false,
            report_visible: false,
        }
    }
}

#[derive(Debug, Error)]
#[error("popup state lock poisoned")]
pub struct StatePoisoned;

/// Owner of the popup UI state. Every change goes through one of the
/// `begin_*`/`finish_*` transitions.
#[derive(Debug, Default)]
pub struct Popup {
    view: PopupView,
}

impl Popup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &PopupView {
        &self.view
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.view.input = input.into();
    }

    /// Validates the current input. `None` means the check must not go out,
    /// and the view already shows why.
    pub fn begin_check(&mut self) -> Option<Address> {
        match Address::parse(&self.view.input) {
            Ok(address) => {
                self.view.phase = PopupPhase::Checking;
                Some(address)
            }
            Err(e) => {
                self.show_message(&e.to_string(), PopupPhase::ErrorShown);
                None
            }
        }
    }

    pub fn finish_check(&mut self, result: Result<AddressStatus, ApiError>) {
        match result {
            Ok(status) => self.show_status(status),
            Err(e) => {
                tracing::warn!("address check failed: {}", e);
                self.show_message(CHECK_FAILED, PopupPhase::ErrorShown);
            }
        }
    }

    /// Re-validates the input on its own; nothing from the previous check is
    /// reused. Ignored while the report action is hidden.
    pub fn begin_report(&mut self) -> Option<Address> {
        if !self.view.report_visible {
            tracing::debug!("report action is hidden, ignoring");
            return None;
        }

        match Address::parse(&self.view.input) {
            Ok(address) => {
                self.view.phase = PopupPhase::Reporting;
                Some(address)
            }
            Err(e) => {
                self.show_message(&e.to_string(), PopupPhase::ErrorShown);
                None
            }
        }
    }

    pub fn finish_report(&mut self, result: Result<ReportResult, ApiError>) {
        match result {
            Ok(_) => self.show_message(REPORT_SUCCEEDED, PopupPhase::ReportSuccess),
            Err(e) => {
                tracing::warn!("address report failed: {}", e);
                self.show_message(REPORT_FAILED, PopupPhase::ReportError);
            }
        }
    }

    fn show_status(&mut self, status: AddressStatus) {
        self.view.phase = PopupPhase::StatusShown;
        self.view.status_visible = true;
        self.view.report_visible = true;
        let level = status.risk_level();
        self.view.risk_text = format!("Risk Level: {}", status.risk);
        self.view.risk_class = Some(level.class());
        self.view.risk_styled = level.is_styled();
        self.view.status_text = status.description;
    }

    fn show_message(&mut self, message: &str, phase: PopupPhase) {
        self.view.phase = phase;
        self.view.status_visible = true;
        self.view.report_visible = false;
        self.view.status_text = message.to_string();
        self.view.risk_text.clear();
        self.view.risk_class = None;
        self.view.risk_styled = false;
    }
}

pub(crate) fn lock(popup: &Mutex<Popup>) -> Result<MutexGuard<'_, Popup>, StatePoisoned> {
    popup.lock().map_err(|_| {
        tracing::error!("failed to lock popup state");
        StatePoisoned
    })
}

/// Runs the check action. The lock is released while the request is in
/// flight, so overlapping actions resolve last-writer-wins.
pub async fn check(popup: &Mutex<Popup>, client: &SolcatClient) -> Result<PopupView, StatePoisoned> {
    let address = {
        let mut popup = lock(popup)?;
        match popup.begin_check() {
            Some(address) => address,
            None => return Ok(popup.view().clone()),
        }
    };

    let result = client.check_address(&address).await;

    let mut popup = lock(popup)?;
    popup.finish_check(result);
    Ok(popup.view().clone())
}

pub async fn report(popup: &Mutex<Popup>, client: &SolcatClient) -> Result<PopupView, StatePoisoned> {
    let address = {
        let mut popup = lock(popup)?;
        match popup.begin_report() {
            Some(address) => address,
            None => return Ok(popup.view().clone()),
        }
    };

    let result = client.report_address(&address).await;

    let mut popup = lock(popup)?;
    popup.finish_report(result);
    Ok(popup.view().clone())
}
