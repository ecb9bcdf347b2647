use log::{debug, info, warn};
use std::rc::Rc;

use crate::config::{SummaryConfig, AIRPORT_CHARGE_ATTRIBUTE, CONFIG_ATTRIBUTE};
use crate::dom::{Document, Element, EventKind};
use crate::error::Result;
use crate::models::rates::RateMap;
use crate::models::summary::{BookingSelection, SummaryDisplay};
use crate::services::pricing_service::PricingService;

/// Handles the controller reads from and writes to. Any of them may be
/// missing; the matching read or write is skipped.
pub struct SummaryBindings<E> {
    pub room_type_field: Option<E>,
    pub days_field: Option<E>,
    pub airport_field: Option<E>,
    pub room_type_label: Option<E>,
    pub days_label: Option<E>,
    pub room_rent_label: Option<E>,
    pub airport_label: Option<E>,
    pub total_label: Option<E>,
}

impl<E> Default for SummaryBindings<E> {
    fn default() -> Self {
        Self {
            room_type_field: None,
            days_field: None,
            airport_field: None,
            room_type_label: None,
            days_label: None,
            room_rent_label: None,
            airport_label: None,
            total_label: None,
        }
    }
}

impl<E: Element> SummaryBindings<E> {
    pub fn lookup<D>(document: &D, config: &SummaryConfig) -> Self
    where
        D: Document<Element = E>,
    {
        let ids = &config.ids;
        Self {
            room_type_field: document.element_by_id(&ids.room_type_field),
            days_field: document.element_by_id(&ids.days_field),
            airport_field: document.element_by_id(&ids.airport_field),
            room_type_label: document.element_by_id(&ids.summary_room_type),
            days_label: document.element_by_id(&ids.summary_days),
            room_rent_label: document.element_by_id(&ids.summary_room_rent),
            airport_label: document.element_by_id(&ids.summary_airport),
            total_label: document.element_by_id(&ids.summary_total),
        }
    }

    fn inputs(&self) -> impl Iterator<Item = &E> {
        [&self.room_type_field, &self.days_field, &self.airport_field]
            .into_iter()
            .flatten()
    }
}

/// Keeps the booking summary panel in step with the booking form.
pub struct PriceSummaryController<E> {
    rates: RateMap,
    airport_charge: f64,
    bindings: SummaryBindings<E>,
    config: SummaryConfig,
}

impl<E: Element + 'static> PriceSummaryController<E> {
    pub fn new(
        rates: RateMap,
        airport_charge: f64,
        bindings: SummaryBindings<E>,
        config: SummaryConfig,
    ) -> Self {
        Self {
            rates,
            airport_charge: airport_charge.max(0.0),
            bindings,
            config,
        }
    }

    /// Bind to the booking page, attach listeners and render once.
    ///
    /// Returns `Ok(None)` when the page carries no rate data or no summary
    /// container. Malformed rate data is an error for this widget only.
    pub fn initialize<D>(document: &D, config: SummaryConfig) -> Result<Option<Rc<Self>>>
    where
        D: Document<Element = E>,
    {
        let rates_source = document.element_by_id(&config.ids.rates_data);
        let container = document.element_by_id(&config.ids.summary_container);
        let (Some(rates_source), Some(container)) = (rates_source, container) else {
            debug!("Booking summary not present on this page");
            return Ok(None);
        };

        let rates = RateMap::from_json(&rates_source.text_content())?;
        let airport_charge = read_airport_charge(container.attribute(AIRPORT_CHARGE_ATTRIBUTE));
        let bindings = SummaryBindings::lookup(document, &config);

        let controller = Rc::new(Self::new(rates, airport_charge, bindings, config));
        controller.attach()?;
        controller.recompute();

        info!(
            "Booking summary active with {} room rates, airport charge {}",
            controller.rates.len(),
            controller.airport_charge
        );
        Ok(Some(controller))
    }

    pub fn rates(&self) -> &RateMap {
        &self.rates
    }

    pub fn airport_charge(&self) -> f64 {
        self.airport_charge
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// The `(field, event)` pairs that trigger a recompute.
    pub fn listeners(&self) -> Vec<(&E, EventKind)> {
        self.bindings
            .inputs()
            .map(|field| (field, field.change_event()))
            .collect()
    }

    /// Register `recompute` on every present input. Listeners only hold a
    /// weak handle, so the caller keeps the controller alive; once it is
    /// dropped they do nothing.
    pub fn attach(self: &Rc<Self>) -> Result<()> {
        for (field, kind) in self.listeners() {
            let controller = Rc::downgrade(self);
            field.add_listener(kind, Rc::new(move || {
                if let Some(controller) = controller.upgrade() {
                    controller.recompute();
                }
            }))?;
        }
        Ok(())
    }

    /// Read the form. The nights field is rewritten with the clamped value.
    pub fn read_selection(&self) -> BookingSelection {
        let room_type = self
            .bindings
            .room_type_field
            .as_ref()
            .and_then(|field| field.value())
            .filter(|value| !value.is_empty());
        let room_type_label = self
            .bindings
            .room_type_field
            .as_ref()
            .and_then(|field| field.selected_option_text());

        let raw_days = self.bindings.days_field.as_ref().and_then(|field| field.value());
        let nights = PricingService::parse_nights(
            raw_days.as_deref(),
            self.config.min_nights,
            self.config.max_nights,
        );
        if let Some(field) = &self.bindings.days_field {
            if nights.corrected {
                debug!(
                    "Nights value {:?} corrected to {}",
                    raw_days.as_deref().unwrap_or(""),
                    nights.nights
                );
            }
            field.set_value(&nights.nights.to_string());
        }

        let include_airport_transfer = self
            .bindings
            .airport_field
            .as_ref()
            .map(|field| field.is_checked())
            .unwrap_or(false);

        BookingSelection {
            room_type,
            room_type_label,
            days: nights.nights,
            include_airport_transfer,
        }
    }

    pub fn recompute(&self) -> SummaryDisplay {
        let selection = self.read_selection();
        let display = PricingService::compute_summary(
            &selection,
            &self.rates,
            self.airport_charge,
            &self.config,
        );
        debug!(
            "Recomputed summary: room={:?} nights={} rent={} airport={} total={}",
            selection.room_type, display.days, display.base_rent, display.airport_fee, display.total
        );
        self.render(&display);
        display
    }

    pub fn render(&self, display: &SummaryDisplay) {
        let writes = [
            (&self.bindings.room_type_label, &display.room_type_label),
            (&self.bindings.days_label, &display.days_label),
            (&self.bindings.room_rent_label, &display.room_rent_text),
            (&self.bindings.airport_label, &display.airport_text),
            (&self.bindings.total_label, &display.total_text),
        ];
        for (target, text) in writes {
            if let Some(target) = target {
                target.set_text_content(text);
            }
        }
    }
}

/// Flat charge from the container attribute; anything unreadable is 0.
pub fn read_airport_charge(raw: Option<String>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }

    match raw.parse::<f64>() {
        Ok(charge) if charge.is_finite() && charge >= 0.0 => charge,
        _ => {
            warn!("Ignoring airport charge {:?}; using 0", raw);
            0.0
        }
    }
}

/// Config override from the summary container, or the defaults.
///
/// The container is always looked up under the default id
/// (`bookingSummary`): the override is what would rename it, so a page that
/// moves the container must pass its config to `initialize` directly.
pub fn config_from_page<D: Document>(document: &D) -> SummaryConfig {
    let defaults = SummaryConfig::default();
    let Some(raw) = document
        .element_by_id(&defaults.ids.summary_container)
        .and_then(|container| container.attribute(CONFIG_ATTRIBUTE))
    else {
        return defaults;
    };

    match SummaryConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using default summary config", e);
            defaults
        }
    }
}
