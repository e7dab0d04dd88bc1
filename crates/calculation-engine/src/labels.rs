//! Display labels for calculation rows and detail lines.
//!
//! Held as an injected value on [`crate::CalculationEngine`] rather than
//! process-wide constants, so embedders can re-caption rows without
//! touching builder logic.

/// Label table for the pricing breakdown. `Default` carries the canonical
/// captions used by the review surface.
#[derive(Debug, Clone)]
pub struct Labels {
    // Row labels
    pub billable_weight: String,
    pub mileage: String,
    pub baseline_linehaul_price: String,
    pub baseline_shorthaul_price: String,
    pub origin_price: String,
    pub destination_price: String,
    pub price_escalation_factor: String,
    pub fuel_surcharge_price: String,
    pub sit_fuel_surcharge_price: String,
    pub pack_price: String,
    pub unpack_price: String,
    pub intl_shipping_linehaul_price: String,
    pub intl_pack_price: String,
    pub intl_unpack_price: String,
    pub nts_packing_factor: String,
    pub additional_day_sit_price: String,
    pub sit_delivery_price: String,
    pub sit_pickup_price: String,
    pub days_in_sit: String,
    pub crating_size: String,
    pub crating_price: String,
    pub uncrating_price: String,
    pub standalone_crate: String,
    pub uncapped_request_total: String,
    pub min_size_crate_applied: String,
    pub total_amount_requested: String,

    // Detail-line prefixes
    pub origin_service_area: String,
    pub dest_service_area: String,
    pub requested_pickup: String,
    pub actual_pickup: String,
    pub pickup_date: String,
    pub delivery_date: String,
    pub crating_date: String,
    pub uncrating_date: String,
    pub peak_prefix: String,
    pub contract_year: String,
    pub eia_fuel_price: String,
    pub fsc_multiplier: String,
    pub fsc_price_difference: String,
    pub origin_service_schedule: String,
    pub dest_service_schedule: String,
    pub service_schedule: String,
    pub origin_sit_schedule: String,
    pub dest_sit_schedule: String,
    pub original_weight: String,
    pub estimated_weight: String,
    pub shuttle_weight: String,
    pub zip: String,
    pub description: String,
    pub dimensions: String,
    pub actual_crate_size: String,
    pub external_crate: String,
    pub domestic: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            billable_weight: "Billable weight (cwt)".into(),
            mileage: "Mileage".into(),
            baseline_linehaul_price: "Baseline linehaul price".into(),
            baseline_shorthaul_price: "Baseline shorthaul price".into(),
            origin_price: "Origin price".into(),
            destination_price: "Destination price".into(),
            price_escalation_factor: "Price escalation factor".into(),
            fuel_surcharge_price: "Fuel surcharge price (per mi)".into(),
            sit_fuel_surcharge_price: "SIT fuel surcharge price (per mi)".into(),
            pack_price: "Pack price".into(),
            unpack_price: "Unpack price".into(),
            intl_shipping_linehaul_price: "International shipping & linehaul".into(),
            intl_pack_price: "International pack price".into(),
            intl_unpack_price: "International unpack price".into(),
            nts_packing_factor: "NTS packing factor".into(),
            additional_day_sit_price: "Additional day SIT price".into(),
            sit_delivery_price: "SIT delivery price".into(),
            sit_pickup_price: "SIT pickup price".into(),
            days_in_sit: "Days in SIT".into(),
            crating_size: "Crating size (cu ft)".into(),
            crating_price: "Crating price".into(),
            uncrating_price: "Uncrating price".into(),
            standalone_crate: "Standalone crate".into(),
            uncapped_request_total: "Uncapped request total".into(),
            min_size_crate_applied: "Minimum crate size applied".into(),
            total_amount_requested: "Total amount requested".into(),

            origin_service_area: "Origin service area".into(),
            dest_service_area: "Destination service area".into(),
            requested_pickup: "Requested pickup".into(),
            actual_pickup: "Actual pickup".into(),
            pickup_date: "Pickup date".into(),
            delivery_date: "Delivery date".into(),
            crating_date: "Crating date".into(),
            uncrating_date: "Uncrating date".into(),
            peak_prefix: "Domestic".into(),
            contract_year: "Contract year".into(),
            eia_fuel_price: "EIA fuel price".into(),
            fsc_multiplier: "Fuel surcharge multiplier".into(),
            fsc_price_difference: "FSC price difference in cents".into(),
            origin_service_schedule: "Origin service schedule".into(),
            dest_service_schedule: "Destination service schedule".into(),
            service_schedule: "Service schedule".into(),
            origin_sit_schedule: "Origin SIT schedule".into(),
            dest_sit_schedule: "Destination SIT schedule".into(),
            original_weight: "Original".into(),
            estimated_weight: "Estimated".into(),
            shuttle_weight: "Shuttle weight".into(),
            zip: "ZIP".into(),
            description: "Description".into(),
            dimensions: "Dimensions".into(),
            actual_crate_size: "Actual size".into(),
            external_crate: "External crate".into(),
            domestic: "Domestic".into(),
        }
    }
}
