//! Every interactive behaviour of the landing page as plain functions.
//!
//! The controller owns the transient page state. Each handler takes plain
//! data, updates that state and returns the side effects the browser layer
//! still has to carry out: scrolling, and re-delivering an event after a
//! delay. Simulated requests hold a ticket so that late or duplicate
//! completions can be told apart from the real one.

use chrono::NaiveDate;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::error::SubmitError;
use super::forms::{ContactField, ContactForm, Form, FormSubmission, ScheduleField, ScheduleForm};
use super::inflight::{InFlight, Ticket};
use super::nav::{self, ScrollSnapshot};
use super::order::OrderId;
use super::phone::format_phone;
use super::pricing::PricingView;
use super::reveal::RevealSet;
use super::services::service_option;
use super::toast::{Severity, ToastId, ToastSlot};
use super::tracking::{TrackingPanel, TrackingQuery};
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneField {
    Schedule,
    Contact,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Feed `event` back through [`UiController::dispatch`] after `delay_ms`.
    Schedule { delay_ms: u32, event: UiEvent },
    ScrollToTop,
    ScrollIntoView { target: String, block: ScrollBlock },
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    ToggleMenu,
    CloseMenu,
    Scrolled(ScrollSnapshot),
    TogglePricing,
    EditSchedule(ScheduleField, String),
    SubmitSchedule,
    ScheduleCompleted(Ticket),
    EditTracking(String),
    TrackOrder,
    TrackingCompleted(Ticket),
    EditContact(ContactField, String),
    SubmitContact,
    ContactCompleted(Ticket),
    BackToTop,
    AnchorClicked(String),
    DismissToast(ToastId),
    ExpireToast(ToastId),
    RemoveToast(ToastId),
    Revealed(String),
    PhoneInput(PhoneField, String),
    ServiceCardClicked(String),
    PlanSelected(String),
    ScrollToSchedule,
}

/// Result of [`UiController::handle`].
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub effects: Vec<Effect>,
    /// The page model differs from before the event.
    pub changed: bool,
}

/// Everything the page shows that isn't static markup.
#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    pub menu_open: bool,
    pub navbar_scrolled: bool,
    pub active_section: Option<String>,
    pub back_to_top_visible: bool,
    pub pricing_view: PricingView,
    pub today: NaiveDate,
    pub schedule: ScheduleForm,
    pub schedule_request: InFlight,
    pub tracking: TrackingPanel,
    pub tracking_request: InFlight,
    pub contact: ContactForm,
    pub contact_request: InFlight,
    pub toast: ToastSlot,
    pub revealed: RevealSet,
}

impl PageModel {
    pub fn new(today: NaiveDate) -> Self {
        PageModel {
            menu_open: false,
            navbar_scrolled: false,
            active_section: None,
            back_to_top_visible: false,
            pricing_view: PricingView::default(),
            today,
            schedule: ScheduleForm::new(today),
            schedule_request: InFlight::default(),
            tracking: TrackingPanel::default(),
            tracking_request: InFlight::default(),
            contact: ContactForm::default(),
            contact_request: InFlight::default(),
            toast: ToastSlot::default(),
            revealed: RevealSet::default(),
        }
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub struct UiController {
    model: PageModel,
    rng: StdRng,
    clock: fn() -> NaiveDate,
}

impl Default for UiController {
    fn default() -> Self {
        Self::new()
    }
}

impl UiController {
    pub fn new() -> Self {
        Self::with_parts(StdRng::from_entropy(), local_today)
    }

    pub fn with_parts(rng: StdRng, clock: fn() -> NaiveDate) -> Self {
        UiController {
            model: PageModel::new(clock()),
            rng,
            clock,
        }
    }

    pub fn model(&self) -> &PageModel {
        &self.model
    }

    /// Same as [`dispatch`](Self::dispatch), also telling whether anything
    /// visible changed so the page can skip a redraw.
    pub fn handle(&mut self, event: UiEvent) -> Outcome {
        let before = self.model.clone();
        let effects = self.dispatch(event);
        Outcome {
            changed: self.model != before,
            effects,
        }
    }

    pub fn dispatch(&mut self, event: UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::ToggleMenu => self.toggle_menu(),
            UiEvent::CloseMenu => self.close_menu(),
            UiEvent::Scrolled(snapshot) => self.on_scroll(&snapshot),
            UiEvent::TogglePricing => self.toggle_pricing(),
            UiEvent::EditSchedule(field, value) => self.edit_schedule_field(field, value),
            UiEvent::SubmitSchedule => self.submit_schedule(),
            UiEvent::ScheduleCompleted(ticket) => self.complete_schedule(ticket),
            UiEvent::EditTracking(value) => self.edit_tracking_input(value),
            UiEvent::TrackOrder => self.track_order(),
            UiEvent::TrackingCompleted(ticket) => self.complete_tracking(ticket),
            UiEvent::EditContact(field, value) => self.edit_contact_field(field, value),
            UiEvent::SubmitContact => self.submit_contact(),
            UiEvent::ContactCompleted(ticket) => self.complete_contact(ticket),
            UiEvent::BackToTop => self.back_to_top(),
            UiEvent::AnchorClicked(href) => self.anchor_click(&href),
            UiEvent::DismissToast(id) => self.dismiss_notification(id),
            UiEvent::ExpireToast(id) => self.expire_notification(id),
            UiEvent::RemoveToast(id) => self.remove_notification(id),
            UiEvent::Revealed(key) => self.reveal(&key),
            UiEvent::PhoneInput(field, raw) => self.format_phone(field, &raw),
            UiEvent::ServiceCardClicked(title) => self.select_service(&title),
            UiEvent::PlanSelected(name) => self.select_plan(&name),
            UiEvent::ScrollToSchedule => self.scroll_to_schedule(),
        }
    }

    pub fn toggle_menu(&mut self) -> Vec<Effect> {
        self.model.menu_open = !self.model.menu_open;
        Vec::new()
    }

    pub fn close_menu(&mut self) -> Vec<Effect> {
        self.model.menu_open = false;
        Vec::new()
    }

    pub fn on_scroll(&mut self, snapshot: &ScrollSnapshot) -> Vec<Effect> {
        self.model.navbar_scrolled = nav::navbar_scrolled(snapshot.offset_y);
        self.model.back_to_top_visible = nav::back_to_top_visible(snapshot.offset_y);
        // Between sections the previous highlight stays put.
        if let Some(id) = nav::active_section(snapshot.offset_y, &snapshot.sections) {
            if self.model.active_section.as_deref() != Some(id) {
                debug!("Active section: {}", id);
                self.model.active_section = Some(id.to_string());
            }
        }
        Vec::new()
    }

    pub fn toggle_pricing(&mut self) -> Vec<Effect> {
        self.model.pricing_view = self.model.pricing_view.toggled();
        debug!("Pricing view: {:?}", self.model.pricing_view);
        Vec::new()
    }

    pub fn edit_schedule_field(&mut self, field: ScheduleField, value: String) -> Vec<Effect> {
        self.model.schedule.set(field, value);
        Vec::new()
    }

    pub fn edit_contact_field(&mut self, field: ContactField, value: String) -> Vec<Effect> {
        self.model.contact.set(field, value);
        Vec::new()
    }

    pub fn edit_tracking_input(&mut self, value: String) -> Vec<Effect> {
        self.model.tracking.input = value;
        Vec::new()
    }

    pub fn submit_schedule(&mut self) -> Vec<Effect> {
        let submission = match self.model.schedule.validate() {
            Ok(submission) => submission,
            Err(err) => {
                debug!("Schedule form rejected: {:?}", err);
                return self.show_notification(err.to_string(), Severity::Error);
            }
        };
        match self.model.schedule_request.begin() {
            Ok(ticket) => {
                info!(
                    "Booking pickup: {}",
                    submission.get("service").unwrap_or_default()
                );
                log_submission("schedule", &submission);
                vec![Effect::Schedule {
                    delay_ms: config::SCHEDULE_DELAY_MS,
                    event: UiEvent::ScheduleCompleted(ticket),
                }]
            }
            Err(err) => self.reject_duplicate("Your pickup is already being booked.", err),
        }
    }

    pub fn complete_schedule(&mut self, ticket: Ticket) -> Vec<Effect> {
        if !self.model.schedule_request.finish(ticket) {
            debug!("Discarding stale booking completion {:?}", ticket);
            return Vec::new();
        }
        let order_id = OrderId::generate(&mut self.rng);
        info!("Pickup booked as {}", order_id);

        self.model.today = (self.clock)();
        self.model.schedule.reset(self.model.today);
        self.show_notification(
            format!("Pickup scheduled successfully! Your Order ID: {}", order_id),
            Severity::Success,
        )
    }

    pub fn track_order(&mut self) -> Vec<Effect> {
        let query = match TrackingQuery::parse(&self.model.tracking.input) {
            Ok(query) => query,
            Err(err) => return self.show_notification(err.to_string(), Severity::Error),
        };
        match self.model.tracking_request.begin() {
            Ok(ticket) => {
                info!("Looking up order {}", query.as_str());
                self.model.tracking.pending = Some(query);
                vec![Effect::Schedule {
                    delay_ms: config::TRACKING_DELAY_MS,
                    event: UiEvent::TrackingCompleted(ticket),
                }]
            }
            Err(err) => self.reject_duplicate("Still looking up your order.", err),
        }
    }

    pub fn complete_tracking(&mut self, ticket: Ticket) -> Vec<Effect> {
        if !self.model.tracking_request.finish(ticket) {
            debug!("Discarding stale tracking completion {:?}", ticket);
            return Vec::new();
        }
        let Some(query) = self.model.tracking.pending.take() else {
            return Vec::new();
        };
        self.model.tracking.result_header = Some(query.header());
        vec![Effect::ScrollIntoView {
            target: config::TRACK_RESULT_ID.to_string(),
            block: ScrollBlock::Center,
        }]
    }

    pub fn submit_contact(&mut self) -> Vec<Effect> {
        let submission = match self.model.contact.validate() {
            Ok(submission) => submission,
            Err(err) => {
                debug!("Contact form rejected: {:?}", err);
                return self.show_notification(err.to_string(), Severity::Error);
            }
        };
        match self.model.contact_request.begin() {
            Ok(ticket) => {
                log_submission("contact", &submission);
                vec![Effect::Schedule {
                    delay_ms: config::CONTACT_DELAY_MS,
                    event: UiEvent::ContactCompleted(ticket),
                }]
            }
            Err(err) => self.reject_duplicate("Your message is already on its way.", err),
        }
    }

    pub fn complete_contact(&mut self, ticket: Ticket) -> Vec<Effect> {
        if !self.model.contact_request.finish(ticket) {
            debug!("Discarding stale contact completion {:?}", ticket);
            return Vec::new();
        }
        info!("Contact message sent");
        self.model.contact = ContactForm::default();
        self.show_notification(
            "Message sent successfully! We'll get back to you soon.",
            Severity::Success,
        )
    }

    /// Drops every outstanding request so their completions are ignored.
    pub fn cancel_pending(&mut self) {
        let cancelled = [
            self.model.schedule_request.cancel(),
            self.model.tracking_request.cancel(),
            self.model.contact_request.cancel(),
        ];
        self.model.tracking.pending = None;
        let count = cancelled.iter().flatten().count();
        if count > 0 {
            debug!("Cancelled {} pending request(s)", count);
        }
    }

    pub fn back_to_top(&mut self) -> Vec<Effect> {
        vec![Effect::ScrollToTop]
    }

    pub fn anchor_click(&mut self, href: &str) -> Vec<Effect> {
        match nav::anchor_target(href) {
            Some(id) => vec![Effect::ScrollIntoView {
                target: id.to_string(),
                block: ScrollBlock::Start,
            }],
            None => Vec::new(),
        }
    }

    pub fn show_notification(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
    ) -> Vec<Effect> {
        let id = self.model.toast.show(message, severity);
        vec![Effect::Schedule {
            delay_ms: config::TOAST_LIFETIME_MS,
            event: UiEvent::ExpireToast(id),
        }]
    }

    /// Close button on the toast.
    pub fn dismiss_notification(&mut self, id: ToastId) -> Vec<Effect> {
        self.begin_toast_exit(id)
    }

    pub fn expire_notification(&mut self, id: ToastId) -> Vec<Effect> {
        self.begin_toast_exit(id)
    }

    pub fn remove_notification(&mut self, id: ToastId) -> Vec<Effect> {
        self.model.toast.remove(id);
        Vec::new()
    }

    pub fn reveal(&mut self, key: &str) -> Vec<Effect> {
        if self.model.revealed.reveal(key) {
            debug!("Revealed {}", key);
        }
        Vec::new()
    }

    pub fn format_phone(&mut self, field: PhoneField, raw: &str) -> Vec<Effect> {
        let formatted = format_phone(raw);
        match field {
            PhoneField::Schedule => self.model.schedule.set(ScheduleField::Phone, formatted),
            PhoneField::Contact => self.model.contact.set(ContactField::Phone, formatted),
        }
        Vec::new()
    }

    pub fn select_service(&mut self, title: &str) -> Vec<Effect> {
        match service_option(title) {
            Some(option) => self.model.schedule.set(ScheduleField::Service, option),
            None => debug!("No schedule option for service card {:?}", title),
        }
        self.scroll_to_schedule()
    }

    pub fn select_plan(&mut self, name: &str) -> Vec<Effect> {
        let mut effects = self.show_notification(
            format!("Great choice! You selected the \"{}\" plan.", name),
            Severity::Success,
        );
        effects.push(Effect::Schedule {
            delay_ms: config::PLAN_SCROLL_DELAY_MS,
            event: UiEvent::ScrollToSchedule,
        });
        effects
    }

    pub fn scroll_to_schedule(&mut self) -> Vec<Effect> {
        vec![Effect::ScrollIntoView {
            target: config::SCHEDULE_SECTION_ID.to_string(),
            block: ScrollBlock::Start,
        }]
    }

    fn begin_toast_exit(&mut self, id: ToastId) -> Vec<Effect> {
        if self.model.toast.begin_exit(id) {
            vec![Effect::Schedule {
                delay_ms: config::TOAST_EXIT_MS,
                event: UiEvent::RemoveToast(id),
            }]
        } else {
            Vec::new()
        }
    }

    fn reject_duplicate(&mut self, message: &str, err: SubmitError) -> Vec<Effect> {
        warn!("Ignoring repeated submission: {}", err);
        self.show_notification(message, Severity::Info)
    }
}

fn log_submission(form: &str, submission: &FormSubmission) {
    match serde_json::to_string(submission) {
        Ok(json) => debug!("{} submission: {}", form, json),
        Err(e) => warn!("Could not serialize {} submission: {}", form, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::nav::SectionBounds;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn controller() -> UiController {
        UiController::with_parts(StdRng::seed_from_u64(11), fixed_today)
    }

    fn fill_schedule(c: &mut UiController) {
        for (field, value) in [
            (ScheduleField::Name, "Meera"),
            (ScheduleField::Address, "4 Lake View"),
            (ScheduleField::Time, "morning"),
            (ScheduleField::Service, "dry-clean"),
        ] {
            c.dispatch(UiEvent::EditSchedule(field, value.to_string()));
        }
        c.dispatch(UiEvent::PhoneInput(PhoneField::Schedule, "9876543210".to_string()));
    }

    fn fill_contact(c: &mut UiController) {
        for (field, value) in [
            (ContactField::Name, "Kabir"),
            (ContactField::Email, "kabir@example.com"),
            (ContactField::Message, "Weekend pickups?"),
        ] {
            c.dispatch(UiEvent::EditContact(field, value.to_string()));
        }
    }

    /// Pulls out the single delayed event, checking its delay.
    fn scheduled(effects: &[Effect], expected_delay: u32) -> UiEvent {
        let events: Vec<_> = effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Schedule { delay_ms, event } if *delay_ms == expected_delay => {
                    Some(event.clone())
                }
                _ => None,
            })
            .collect();
        assert_eq!(events.len(), 1, "effects: {:?}", effects);
        events[0].clone()
    }

    fn toast_text(c: &UiController) -> Option<(String, Severity)> {
        c.model()
            .toast
            .current()
            .map(|toast| (toast.message.clone(), toast.severity))
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut c = controller();
        c.dispatch(UiEvent::ToggleMenu);
        assert!(c.model().menu_open);
        c.dispatch(UiEvent::ToggleMenu);
        assert!(!c.model().menu_open);
        c.dispatch(UiEvent::ToggleMenu);
        c.dispatch(UiEvent::CloseMenu);
        assert!(!c.model().menu_open);
        c.dispatch(UiEvent::CloseMenu);
        assert!(!c.model().menu_open);
    }

    #[test]
    fn scrolling_updates_navbar_highlight_and_back_to_top() {
        let mut c = controller();
        let sections = vec![
            SectionBounds { id: "home".into(), top: 0.0, height: 700.0 },
            SectionBounds { id: "services".into(), top: 700.0, height: 900.0 },
        ];
        c.dispatch(UiEvent::Scrolled(ScrollSnapshot { offset_y: 620.0, sections: sections.clone() }));
        assert!(c.model().navbar_scrolled);
        assert!(c.model().back_to_top_visible);
        assert_eq!(c.model().active_section.as_deref(), Some("services"));

        c.dispatch(UiEvent::Scrolled(ScrollSnapshot { offset_y: 20.0, sections: sections.clone() }));
        assert!(!c.model().navbar_scrolled);
        assert!(!c.model().back_to_top_visible);
        assert_eq!(c.model().active_section.as_deref(), Some("home"));

        // Past the last section the highlight is left alone.
        c.dispatch(UiEvent::Scrolled(ScrollSnapshot { offset_y: 5000.0, sections }));
        assert_eq!(c.model().active_section.as_deref(), Some("home"));
    }

    #[test]
    fn pricing_toggle_flips_view() {
        let mut c = controller();
        c.dispatch(UiEvent::TogglePricing);
        assert_eq!(c.model().pricing_view, PricingView::Subscription);
        c.dispatch(UiEvent::TogglePricing);
        assert_eq!(c.model().pricing_view, PricingView::Individual);
    }

    #[test]
    fn complete_schedule_reaches_success_after_one_delay() {
        let mut c = controller();
        fill_schedule(&mut c);
        assert_eq!(c.model().schedule.phone, "987 654 3210");

        let effects = c.dispatch(UiEvent::SubmitSchedule);
        assert!(c.model().schedule_request.is_pending());
        assert!(c.model().toast.current().is_none());
        let completion = scheduled(&effects, config::SCHEDULE_DELAY_MS);

        let effects = c.dispatch(completion);
        assert!(!c.model().schedule_request.is_pending());
        let (message, severity) = toast_text(&c).unwrap();
        assert_eq!(severity, Severity::Success);
        let order_id = message
            .strip_prefix("Pickup scheduled successfully! Your Order ID: ")
            .unwrap();
        assert!(order_id.starts_with("CD-") && order_id.len() == 8);
        assert_eq!(c.model().schedule, ScheduleForm::new(fixed_today()));
        scheduled(&effects, config::TOAST_LIFETIME_MS);
    }

    #[test]
    fn incomplete_schedule_errors_immediately_and_keeps_fields() {
        let mut c = controller();
        fill_schedule(&mut c);
        c.dispatch(UiEvent::EditSchedule(ScheduleField::Address, String::new()));
        let before = c.model().schedule.clone();

        let effects = c.dispatch(UiEvent::SubmitSchedule);
        assert_eq!(
            toast_text(&c),
            Some(("Please fill in all required fields.".to_string(), Severity::Error))
        );
        assert!(!c.model().schedule_request.is_pending());
        assert_eq!(c.model().schedule, before);
        assert!(effects.iter().all(|effect| !matches!(
            effect,
            Effect::Schedule { event: UiEvent::ScheduleCompleted(_), .. }
        )));
    }

    #[test]
    fn double_submission_is_rejected_while_pending() {
        let mut c = controller();
        fill_schedule(&mut c);
        let first = scheduled(&c.dispatch(UiEvent::SubmitSchedule), config::SCHEDULE_DELAY_MS);

        let effects = c.dispatch(UiEvent::SubmitSchedule);
        assert_eq!(toast_text(&c).map(|(_, s)| s), Some(Severity::Info));
        assert!(effects.iter().all(|effect| !matches!(
            effect,
            Effect::Schedule { event: UiEvent::ScheduleCompleted(_), .. }
        )));

        c.dispatch(first);
        assert_eq!(toast_text(&c).map(|(_, s)| s), Some(Severity::Success));
    }

    #[test]
    fn cancelled_completion_is_discarded() {
        let mut c = controller();
        fill_schedule(&mut c);
        let completion = scheduled(&c.dispatch(UiEvent::SubmitSchedule), config::SCHEDULE_DELAY_MS);
        let filled = c.model().schedule.clone();

        c.cancel_pending();
        assert!(c.dispatch(completion).is_empty());
        assert_eq!(c.model().schedule, filled);
        assert!(c.model().toast.current().is_none());
    }

    #[test]
    fn tracking_echoes_trimmed_uppercased_id() {
        let mut c = controller();
        c.dispatch(UiEvent::EditTracking("  ab123  ".to_string()));
        let completion = scheduled(&c.dispatch(UiEvent::TrackOrder), config::TRACKING_DELAY_MS);
        assert!(c.model().tracking_request.is_pending());
        assert!(c.model().tracking.result_header.is_none());

        // Editing during the lookup doesn't change what gets shown.
        c.dispatch(UiEvent::EditTracking("zzz".to_string()));
        let effects = c.dispatch(completion);
        assert_eq!(c.model().tracking.result_header.as_deref(), Some("Order #AB123"));
        assert!(!c.model().tracking_request.is_pending());
        assert_eq!(
            effects,
            vec![Effect::ScrollIntoView {
                target: "track-result".to_string(),
                block: ScrollBlock::Center,
            }]
        );
    }

    #[test]
    fn empty_tracking_input_shows_error() {
        let mut c = controller();
        c.dispatch(UiEvent::EditTracking("   ".to_string()));
        c.dispatch(UiEvent::TrackOrder);
        assert_eq!(
            toast_text(&c),
            Some(("Please enter an order ID.".to_string(), Severity::Error))
        );
        assert!(!c.model().tracking_request.is_pending());
        assert!(c.model().tracking.result_header.is_none());
    }

    #[test]
    fn contact_form_success_and_failure() {
        let mut c = controller();
        c.dispatch(UiEvent::EditContact(ContactField::Name, "Kabir".to_string()));
        c.dispatch(UiEvent::SubmitContact);
        assert_eq!(toast_text(&c).map(|(_, s)| s), Some(Severity::Error));
        assert_eq!(c.model().contact.name, "Kabir");

        fill_contact(&mut c);
        c.dispatch(UiEvent::PhoneInput(PhoneField::Contact, "12-34".to_string()));
        assert_eq!(c.model().contact.phone, "123 4");
        let completion = scheduled(&c.dispatch(UiEvent::SubmitContact), config::CONTACT_DELAY_MS);
        c.dispatch(completion);
        assert_eq!(
            toast_text(&c),
            Some((
                "Message sent successfully! We'll get back to you soon.".to_string(),
                Severity::Success
            ))
        );
        assert_eq!(c.model().contact, ContactForm::default());
    }

    #[test]
    fn contact_form_rejects_each_missing_required_field() {
        for &missing in ContactForm::REQUIRED {
            let mut c = controller();
            fill_contact(&mut c);
            c.dispatch(UiEvent::EditContact(missing, String::new()));
            let before = c.model().contact.clone();

            let effects = c.dispatch(UiEvent::SubmitContact);
            assert_eq!(
                toast_text(&c),
                Some(("Please fill in all required fields.".to_string(), Severity::Error)),
                "missing {:?}",
                missing
            );
            assert!(!c.model().contact_request.is_pending());
            assert_eq!(c.model().contact, before);
            assert!(effects.iter().all(|effect| !matches!(
                effect,
                Effect::Schedule { event: UiEvent::ContactCompleted(_), .. }
            )));
        }
    }

    #[test]
    fn service_card_after_a_booking_sets_the_reset_selector() {
        let mut c = controller();
        fill_schedule(&mut c);
        let completion = scheduled(&c.dispatch(UiEvent::SubmitSchedule), config::SCHEDULE_DELAY_MS);
        c.dispatch(completion);
        assert_eq!(c.model().schedule.service, "");

        let outcome = c.handle(UiEvent::ServiceCardClicked("Dry Cleaning".to_string()));
        assert!(outcome.changed);
        assert_eq!(c.model().schedule.service, "dry-clean");
    }

    #[test]
    fn handle_reports_whether_the_page_changed() {
        let mut c = controller();
        let sections = vec![SectionBounds { id: "home".into(), top: 0.0, height: 700.0 }];
        let at = |offset_y: f64| {
            UiEvent::Scrolled(ScrollSnapshot { offset_y, sections: sections.clone() })
        };

        assert!(c.handle(at(10.0)).changed);
        assert!(!c.handle(at(20.0)).changed);
        assert!(!c.handle(at(30.0)).changed);
        assert!(c.handle(at(60.0)).changed);

        let outcome = c.handle(UiEvent::BackToTop);
        assert!(!outcome.changed);
        assert_eq!(outcome.effects, vec![Effect::ScrollToTop]);

        assert!(c.handle(UiEvent::Revealed("step-1".to_string())).changed);
        assert!(!c.handle(UiEvent::Revealed("step-1".to_string())).changed);
    }

    #[test]
    fn only_one_toast_survives_rapid_requests() {
        let mut c = controller();
        let mut expiries = Vec::new();
        for i in 0..5 {
            let effects = c.show_notification(format!("toast {}", i), Severity::Info);
            expiries.push(scheduled(&effects, config::TOAST_LIFETIME_MS));
        }
        assert_eq!(toast_text(&c).unwrap().0, "toast 4");

        // Expiry timers of the replaced toasts do nothing.
        for expiry in &expiries[..4] {
            assert!(c.dispatch(expiry.clone()).is_empty());
        }
        assert!(!c.model().toast.current().unwrap().leaving);

        let removal = scheduled(&c.dispatch(expiries[4].clone()), config::TOAST_EXIT_MS);
        assert!(c.model().toast.current().unwrap().leaving);
        c.dispatch(removal);
        assert!(c.model().toast.current().is_none());
    }

    #[test]
    fn closing_a_toast_early_wins_over_its_timer() {
        let mut c = controller();
        let expiry = scheduled(
            &c.show_notification("hello", Severity::Success),
            config::TOAST_LIFETIME_MS,
        );
        let id = c.model().toast.current().unwrap().id;
        let removal = scheduled(&c.dispatch(UiEvent::DismissToast(id)), config::TOAST_EXIT_MS);
        assert!(c.dispatch(expiry).is_empty());
        c.dispatch(removal);
        assert!(c.model().toast.current().is_none());
    }

    #[test]
    fn service_cards_preselect_known_services() {
        let mut c = controller();
        let effects = c.dispatch(UiEvent::ServiceCardClicked("Dry Cleaning".to_string()));
        assert_eq!(c.model().schedule.service, "dry-clean");
        assert_eq!(
            effects,
            vec![Effect::ScrollIntoView {
                target: "schedule".to_string(),
                block: ScrollBlock::Start,
            }]
        );

        let effects = c.dispatch(UiEvent::ServiceCardClicked("Unknown Service".to_string()));
        assert_eq!(c.model().schedule.service, "dry-clean");
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn plan_selection_confirms_then_scrolls_later() {
        let mut c = controller();
        let effects = c.dispatch(UiEvent::PlanSelected("Family Monthly".to_string()));
        assert_eq!(
            toast_text(&c),
            Some((
                "Great choice! You selected the \"Family Monthly\" plan.".to_string(),
                Severity::Success
            ))
        );
        let later = scheduled(&effects, config::PLAN_SCROLL_DELAY_MS);
        assert_eq!(later, UiEvent::ScrollToSchedule);
        assert_eq!(c.dispatch(later).len(), 1);
    }

    #[test]
    fn anchors_and_back_to_top() {
        let mut c = controller();
        assert_eq!(c.dispatch(UiEvent::BackToTop), vec![Effect::ScrollToTop]);
        assert!(c.dispatch(UiEvent::AnchorClicked("#".to_string())).is_empty());
        assert_eq!(
            c.dispatch(UiEvent::AnchorClicked("#contact".to_string())),
            vec![Effect::ScrollIntoView {
                target: "contact".to_string(),
                block: ScrollBlock::Start,
            }]
        );
    }

    #[test]
    fn reveal_is_recorded_once() {
        let mut c = controller();
        c.dispatch(UiEvent::Revealed("step-1".to_string()));
        c.dispatch(UiEvent::Revealed("step-1".to_string()));
        assert!(c.model().revealed.is_revealed("step-1"));
        assert!(!c.model().revealed.is_revealed("step-2"));
    }
}
