//! Calculation builders, one per priced concept.
//!
//! Each builder maps the parameter collection to a single [`Calculation`]
//! row. Missing or unparseable parameters degrade to empty strings — a
//! breakdown never fails wholesale because one fact is absent.

use common::{ServiceItemCode, ServiceItemParam, ShipmentType};

use crate::formatters::{
    format_cents, format_date, format_dollar_from_millicents, format_peak_label, format_weight,
    format_weight_cwt_from_lbs, to_dollar_string,
};
use crate::params::{get_bool, get_date, get_int, get_value, get_value_or_empty, ParamKey};
use crate::{Calculation, CalculationEngine};

fn labeled(label: &str, value: &str) -> String {
    format!("{label}: {value}")
}

/// Last three digits of a 5-digit ZIP ("32210" → "210").
fn zip3_suffix(zip: &str) -> &str {
    zip.get(zip.len().saturating_sub(3)..).unwrap_or(zip)
}

impl CalculationEngine {
    // ── shared detail lines ───────────────────────────────────────────

    fn date_or_empty(params: &[ServiceItemParam], key: ParamKey) -> String {
        get_date(params, key).map(format_date).unwrap_or_default()
    }

    fn rate_or_factor(params: &[ServiceItemParam]) -> String {
        get_value_or_empty(params, ParamKey::PriceRateOrFactor)
    }

    /// "Domestic peak" / "Domestic non-peak".
    fn peak_detail(&self, params: &[ServiceItemParam]) -> String {
        format!(
            "{} {}",
            self.labels().peak_prefix,
            format_peak_label(get_bool(params, ParamKey::IsPeak))
        )
    }

    fn service_area_origin_detail(&self, params: &[ServiceItemParam]) -> String {
        labeled(
            &self.labels().origin_service_area,
            &get_value_or_empty(params, ParamKey::ServiceAreaOrigin),
        )
    }

    fn service_area_dest_detail(&self, params: &[ServiceItemParam]) -> String {
        labeled(
            &self.labels().dest_service_area,
            &get_value_or_empty(params, ParamKey::ServiceAreaDest),
        )
    }

    /// Pickup-date detail. NTS-release shipments re-caption the same date
    /// field as "Actual pickup"; nothing else changes.
    fn pickup_date_detail(
        &self,
        params: &[ServiceItemParam],
        shipment_type: Option<ShipmentType>,
    ) -> String {
        let caption = if shipment_type.is_some_and(|s| s.is_nts_release()) {
            &self.labels().actual_pickup
        } else {
            &self.labels().requested_pickup
        };
        labeled(
            caption,
            &Self::date_or_empty(params, ParamKey::RequestedPickupDate),
        )
    }

    fn market_detail(&self, params: &[ServiceItemParam]) -> String {
        let market = get_value(params, ParamKey::MarketOrigin)
            .or_else(|| get_value(params, ParamKey::MarketDest))
            .unwrap_or_default();
        if market.eq_ignore_ascii_case("o") {
            "OCONUS".to_string()
        } else {
            "CONUS".to_string()
        }
    }

    // ── weight ────────────────────────────────────────────────────────

    pub(crate) fn billable_weight(&self, params: &[ServiceItemParam]) -> Calculation {
        let value = get_int(params, ParamKey::WeightBilledActual)
            .map(format_weight_cwt_from_lbs)
            .unwrap_or_default();

        let original = get_int(params, ParamKey::WeightBilledActual)
            .map(format_weight)
            .unwrap_or_default();
        let estimated = get_int(params, ParamKey::WeightEstimated)
            .map(format_weight)
            .unwrap_or_default();

        Calculation::new(
            value,
            self.labels().billable_weight.clone(),
            vec![
                labeled(&self.labels().original_weight, &original),
                labeled(&self.labels().estimated_weight, &estimated),
            ],
        )
    }

    /// Shuttle items bill against the lowest actual weight on record
    /// (reweigh vs. original), whichever of the two exists.
    pub(crate) fn shuttle_billable_weight(&self, params: &[ServiceItemParam]) -> Calculation {
        let value = get_int(params, ParamKey::WeightBilledActual)
            .map(format_weight_cwt_from_lbs)
            .unwrap_or_default();

        let reweigh = get_int(params, ParamKey::WeightReweigh);
        let original = get_int(params, ParamKey::WeightOriginal);
        let lowest = match (reweigh, original) {
            (Some(r), Some(o)) => Some(r.min(o)),
            (Some(r), None) => Some(r),
            (None, Some(o)) => Some(o),
            (None, None) => get_int(params, ParamKey::WeightBilledActual),
        };
        let shuttle = lowest.map(format_weight).unwrap_or_default();
        let estimated = get_int(params, ParamKey::WeightEstimated)
            .map(format_weight)
            .unwrap_or_default();

        Calculation::new(
            value,
            self.labels().billable_weight.clone(),
            vec![
                labeled(&self.labels().shuttle_weight, &shuttle),
                labeled(&self.labels().estimated_weight, &estimated),
            ],
        )
    }

    // ── mileage ───────────────────────────────────────────────────────

    /// ZIP3 mileage: raw distance, ZIP-3 suffixes in the detail.
    pub(crate) fn mileage_zip3(&self, params: &[ServiceItemParam]) -> Calculation {
        let zip = &self.labels().zip;
        let pickup = get_value_or_empty(params, ParamKey::ZipPickupAddress);
        let dest = get_value_or_empty(params, ParamKey::ZipDestAddress);
        let detail = format!(
            "{zip} {} to {zip} {}",
            zip3_suffix(&pickup),
            zip3_suffix(&dest)
        );
        Calculation::new(
            get_value_or_empty(params, ParamKey::DistanceZip3),
            self.labels().mileage.clone(),
            vec![detail],
        )
    }

    /// ZIP5 mileage: raw distance, full ZIPs in the detail.
    pub(crate) fn mileage_zip5(&self, params: &[ServiceItemParam]) -> Calculation {
        let zip = &self.labels().zip;
        let detail = format!(
            "{zip} {} to {zip} {}",
            get_value_or_empty(params, ParamKey::ZipPickupAddress),
            get_value_or_empty(params, ParamKey::ZipDestAddress)
        );
        Calculation::new(
            get_value_or_empty(params, ParamKey::DistanceZip5),
            self.labels().mileage.clone(),
            vec![detail],
        )
    }

    /// Origin-SIT mileage: distance into SIT, original → actual address.
    pub(crate) fn mileage_sit_origin(&self, params: &[ServiceItemParam]) -> Calculation {
        let zip = &self.labels().zip;
        let detail = format!(
            "{zip} {} to {zip} {}",
            get_value_or_empty(params, ParamKey::ZipSITOriginHHGOriginalAddress),
            get_value_or_empty(params, ParamKey::ZipSITOriginHHGActualAddress)
        );
        Calculation::new(
            get_value_or_empty(params, ParamKey::DistanceZipSITOrigin),
            self.labels().mileage.clone(),
            vec![detail],
        )
    }

    /// Destination-SIT mileage: shipment destination → final SIT address.
    pub(crate) fn mileage_sit_dest(&self, params: &[ServiceItemParam]) -> Calculation {
        let zip = &self.labels().zip;
        let detail = format!(
            "{zip} {} to {zip} {}",
            get_value_or_empty(params, ParamKey::ZipDestAddress),
            get_value_or_empty(params, ParamKey::ZipSITDestHHGFinalAddress)
        );
        Calculation::new(
            get_value_or_empty(params, ParamKey::DistanceZipSITDest),
            self.labels().mileage.clone(),
            vec![detail],
        )
    }

    // ── haul prices ───────────────────────────────────────────────────

    pub(crate) fn baseline_linehaul_price(
        &self,
        params: &[ServiceItemParam],
        shipment_type: Option<ShipmentType>,
    ) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().baseline_linehaul_price.clone(),
            vec![
                self.peak_detail(params),
                self.service_area_origin_detail(params),
                self.pickup_date_detail(params, shipment_type),
            ],
        )
    }

    pub(crate) fn baseline_shorthaul_price(
        &self,
        params: &[ServiceItemParam],
        shipment_type: Option<ShipmentType>,
    ) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().baseline_shorthaul_price.clone(),
            vec![
                self.peak_detail(params),
                self.service_area_origin_detail(params),
                self.pickup_date_detail(params, shipment_type),
            ],
        )
    }

    pub(crate) fn intl_shipping_and_linehaul_price(
        &self,
        params: &[ServiceItemParam],
        shipment_type: Option<ShipmentType>,
    ) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().intl_shipping_linehaul_price.clone(),
            vec![
                self.pickup_date_detail(params, shipment_type),
                self.peak_detail(params),
            ],
        )
    }

    // ── origin/destination prices ─────────────────────────────────────
    // No dedicated area-price param exists upstream; the generic rate
    // param is reused for both. Known upstream limitation.

    pub(crate) fn origin_price(
        &self,
        params: &[ServiceItemParam],
        shipment_type: Option<ShipmentType>,
    ) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().origin_price.clone(),
            vec![
                self.service_area_origin_detail(params),
                self.pickup_date_detail(params, shipment_type),
                self.peak_detail(params),
            ],
        )
    }

    pub(crate) fn destination_price(
        &self,
        params: &[ServiceItemParam],
        shipment_type: Option<ShipmentType>,
    ) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().destination_price.clone(),
            vec![
                self.service_area_dest_detail(params),
                self.pickup_date_detail(params, shipment_type),
                self.peak_detail(params),
            ],
        )
    }

    // ── escalation ────────────────────────────────────────────────────

    pub(crate) fn price_escalation_factor(&self, params: &[ServiceItemParam]) -> Calculation {
        Calculation::new(
            get_value_or_empty(params, ParamKey::EscalationCompounded),
            self.labels().price_escalation_factor.clone(),
            vec![labeled(
                &self.labels().contract_year,
                &get_value_or_empty(params, ParamKey::ContractYearName),
            )],
        )
    }

    pub(crate) fn price_escalation_factor_no_contract_year(
        &self,
        params: &[ServiceItemParam],
    ) -> Calculation {
        Calculation::new(
            get_value_or_empty(params, ParamKey::EscalationCompounded),
            self.labels().price_escalation_factor.clone(),
            vec![],
        )
    }

    // ── fuel surcharge ────────────────────────────────────────────────

    /// Weight-based multiplier × mileage, fixed to two decimals. The
    /// distance key depends on the code: SIT fuel surcharges use the SIT
    /// origin/destination distances instead of the ZIP3 distance.
    pub(crate) fn fuel_surcharge_price(
        &self,
        params: &[ServiceItemParam],
        code: ServiceItemCode,
    ) -> Calculation {
        let distance_key = match code {
            ServiceItemCode::DOSFSC => ParamKey::DistanceZipSITOrigin,
            ServiceItemCode::DDSFSC => ParamKey::DistanceZipSITDest,
            _ => ParamKey::DistanceZip3,
        };
        let multiplier =
            crate::params::get_float(params, ParamKey::FSCWeightBasedDistanceMultiplier);
        let distance = crate::params::get_float(params, distance_key);
        let value = match (multiplier, distance) {
            (Some(m), Some(d)) => format!("{:.2}", m * d),
            _ => String::new(),
        };

        let label = match code {
            ServiceItemCode::DOSFSC | ServiceItemCode::DDSFSC => {
                self.labels().sit_fuel_surcharge_price.clone()
            }
            _ => self.labels().fuel_surcharge_price.clone(),
        };

        let eia = get_int(params, ParamKey::EIAFuelPrice)
            .map(|mc| to_dollar_string(format_dollar_from_millicents(mc)))
            .unwrap_or_default();
        let mut details = vec![
            labeled(&self.labels().eia_fuel_price, &eia),
            labeled(
                &self.labels().fsc_multiplier,
                &get_value_or_empty(params, ParamKey::FSCWeightBasedDistanceMultiplier),
            ),
            labeled(
                &self.labels().actual_pickup,
                &Self::date_or_empty(params, ParamKey::ActualPickupDate),
            ),
        ];
        if let Some(diff) = get_value(params, ParamKey::FSCPriceDifferenceInCents) {
            details.push(format!(
                "{}: {diff} \u{00A2}",
                self.labels().fsc_price_difference
            ));
        }

        Calculation::new(value, label, details)
    }

    // ── pack / unpack ─────────────────────────────────────────────────

    pub(crate) fn pack_price(
        &self,
        params: &[ServiceItemParam],
        shipment_type: Option<ShipmentType>,
    ) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().pack_price.clone(),
            vec![
                labeled(
                    &self.labels().origin_service_schedule,
                    &get_value_or_empty(params, ParamKey::ServicesScheduleOrigin),
                ),
                self.pickup_date_detail(params, shipment_type),
                self.peak_detail(params),
            ],
        )
    }

    pub(crate) fn unpack_price(
        &self,
        params: &[ServiceItemParam],
        shipment_type: Option<ShipmentType>,
    ) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().unpack_price.clone(),
            vec![
                labeled(
                    &self.labels().dest_service_schedule,
                    &get_value_or_empty(params, ParamKey::ServicesScheduleDest),
                ),
                self.pickup_date_detail(params, shipment_type),
                self.peak_detail(params),
            ],
        )
    }

    pub(crate) fn intl_pack_price(
        &self,
        params: &[ServiceItemParam],
        shipment_type: Option<ShipmentType>,
    ) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().intl_pack_price.clone(),
            vec![
                self.pickup_date_detail(params, shipment_type),
                self.peak_detail(params),
            ],
        )
    }

    pub(crate) fn intl_unpack_price(
        &self,
        params: &[ServiceItemParam],
        shipment_type: Option<ShipmentType>,
    ) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().intl_unpack_price.clone(),
            vec![
                self.pickup_date_detail(params, shipment_type),
                self.peak_detail(params),
            ],
        )
    }

    pub(crate) fn nts_packing_factor(&self, params: &[ServiceItemParam]) -> Calculation {
        Calculation::new(
            get_value_or_empty(params, ParamKey::NTSPackingFactor),
            self.labels().nts_packing_factor.clone(),
            vec![],
        )
    }

    // ── SIT ───────────────────────────────────────────────────────────

    pub(crate) fn days_in_sit(&self, params: &[ServiceItemParam]) -> Calculation {
        Calculation::new(
            get_value_or_empty(params, ParamKey::NumberDaysSIT),
            self.labels().days_in_sit.clone(),
            vec![],
        )
    }

    pub(crate) fn additional_day_origin_sit_price(
        &self,
        params: &[ServiceItemParam],
        shipment_type: Option<ShipmentType>,
    ) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().additional_day_sit_price.clone(),
            vec![
                self.service_area_origin_detail(params),
                self.pickup_date_detail(params, shipment_type),
                self.peak_detail(params),
            ],
        )
    }

    pub(crate) fn additional_day_destination_sit_price(
        &self,
        params: &[ServiceItemParam],
        shipment_type: Option<ShipmentType>,
    ) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().additional_day_sit_price.clone(),
            vec![
                self.service_area_dest_detail(params),
                self.pickup_date_detail(params, shipment_type),
                self.peak_detail(params),
            ],
        )
    }

    pub(crate) fn pickup_sit_price(
        &self,
        params: &[ServiceItemParam],
        shipment_type: Option<ShipmentType>,
    ) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().sit_pickup_price.clone(),
            vec![
                labeled(
                    &self.labels().origin_sit_schedule,
                    &get_value_or_empty(params, ParamKey::SITScheduleOrigin),
                ),
                self.pickup_date_detail(params, shipment_type),
                self.peak_detail(params),
            ],
        )
    }

    pub(crate) fn sit_delivery_price(
        &self,
        params: &[ServiceItemParam],
        shipment_type: Option<ShipmentType>,
    ) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().sit_delivery_price.clone(),
            vec![
                labeled(
                    &self.labels().dest_sit_schedule,
                    &get_value_or_empty(params, ParamKey::SITScheduleDest),
                ),
                self.pickup_date_detail(params, shipment_type),
                self.peak_detail(params),
            ],
        )
    }

    /// SIT delivery price when the mileage row is suppressed: at or
    /// under 50 miles with differing ZIP3s, mileage does not factor into
    /// the pricing, so the row carries the threshold note instead.
    pub(crate) fn sit_delivery_price_under_threshold(
        &self,
        params: &[ServiceItemParam],
        shipment_type: Option<ShipmentType>,
    ) -> Calculation {
        let mut calc = self.sit_delivery_price(params, shipment_type);
        calc.details.push("<=50 miles".to_string());
        calc
    }

    // ── shuttle ───────────────────────────────────────────────────────

    pub(crate) fn shuttle_origin_price(&self, params: &[ServiceItemParam]) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().origin_price.clone(),
            vec![
                labeled(
                    &self.labels().service_schedule,
                    &get_value_or_empty(params, ParamKey::ServicesScheduleOrigin),
                ),
                labeled(
                    &self.labels().pickup_date,
                    &Self::date_or_empty(params, ParamKey::RequestedPickupDate),
                ),
                self.labels().domestic.clone(),
            ],
        )
    }

    pub(crate) fn shuttle_destination_price(&self, params: &[ServiceItemParam]) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().destination_price.clone(),
            vec![
                labeled(
                    &self.labels().service_schedule,
                    &get_value_or_empty(params, ParamKey::ServicesScheduleDest),
                ),
                labeled(
                    &self.labels().delivery_date,
                    &Self::date_or_empty(params, ParamKey::RequestedPickupDate),
                ),
                self.labels().domestic.clone(),
            ],
        )
    }

    // ── crating ───────────────────────────────────────────────────────

    /// External international crates are priced against a 4 cu ft
    /// minimum. The flag trips when the billed size is pinned at that
    /// minimum and the measured crate is a different size.
    pub(crate) fn external_crate_min_size_applied(params: &[ServiceItemParam]) -> bool {
        const EXTERNAL_CRATE_MIN_CUBIC_FT: &str = "4.00";
        let billed = get_value(params, ParamKey::CubicFeetBilled);
        let crating = get_value(params, ParamKey::CubicFeetCrating);
        get_bool(params, ParamKey::ExternalCrate)
            && crating != billed
            && billed == Some(EXTERNAL_CRATE_MIN_CUBIC_FT)
    }

    pub(crate) fn crating_size(
        &self,
        params: &[ServiceItemParam],
        description: &str,
    ) -> Calculation {
        let length = get_value_or_empty(params, ParamKey::DimensionLength);
        let width = get_value_or_empty(params, ParamKey::DimensionWidth);
        let height = get_value_or_empty(params, ParamKey::DimensionHeight);

        let mut label = self.labels().crating_size.clone();
        let mut details = vec![
            labeled(&self.labels().description, description),
            format!("{}: {length}x{width}x{height} in", self.labels().dimensions),
        ];

        // When the minimum is applied the billed size is not the real
        // crate; re-caption the row and show the measured size.
        if Self::external_crate_min_size_applied(params) {
            label.push_str(" - Minimum");
            details.push(format!(
                "{}: {} cu ft",
                self.labels().actual_crate_size,
                get_value_or_empty(params, ParamKey::CubicFeetCrating)
            ));
        }
        if get_bool(params, ParamKey::ExternalCrate) {
            details.push(self.labels().external_crate.clone());
        }

        Calculation::new(
            get_value_or_empty(params, ParamKey::CubicFeetBilled),
            label,
            details,
        )
    }

    /// Capped amount for a standalone crate, from the cap parameter in
    /// cents.
    pub(crate) fn standalone_crate(&self, params: &[ServiceItemParam]) -> Calculation {
        let value = get_int(params, ParamKey::StandaloneCrateCap)
            .map(|cents| to_dollar_string(format_cents(cents)))
            .unwrap_or_default();
        Calculation::new(value, self.labels().standalone_crate.clone(), vec![])
    }

    /// Pre-cap requested amount. The backend delivers this one already
    /// formatted as decimal dollars, unlike the cents-typed totals.
    pub(crate) fn uncapped_request_total(&self, params: &[ServiceItemParam]) -> Calculation {
        Calculation::new(
            to_dollar_string(get_value_or_empty(params, ParamKey::UncappedRequestTotal)),
            self.labels().uncapped_request_total.clone(),
            vec![],
        )
    }

    /// Marker row flagging that the external-crate minimum priced this
    /// item; carries no value of its own.
    pub(crate) fn min_size_crate_applied(&self) -> Calculation {
        Calculation::new("", self.labels().min_size_crate_applied.clone(), vec![])
    }

    pub(crate) fn crating_price(&self, params: &[ServiceItemParam]) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().crating_price.clone(),
            vec![
                labeled(
                    &self.labels().service_schedule,
                    &get_value_or_empty(params, ParamKey::ServicesScheduleOrigin),
                ),
                labeled(
                    &self.labels().crating_date,
                    &Self::date_or_empty(params, ParamKey::RequestedPickupDate),
                ),
                self.labels().domestic.clone(),
            ],
        )
    }

    pub(crate) fn uncrating_price(&self, params: &[ServiceItemParam]) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().uncrating_price.clone(),
            vec![
                labeled(
                    &self.labels().service_schedule,
                    &get_value_or_empty(params, ParamKey::ServicesScheduleDest),
                ),
                labeled(
                    &self.labels().uncrating_date,
                    &Self::date_or_empty(params, ParamKey::RequestedPickupDate),
                ),
                self.labels().domestic.clone(),
            ],
        )
    }

    pub(crate) fn intl_crating_price(&self, params: &[ServiceItemParam]) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().crating_price.clone(),
            vec![
                labeled(
                    &self.labels().crating_date,
                    &Self::date_or_empty(params, ParamKey::RequestedPickupDate),
                ),
                self.market_detail(params),
            ],
        )
    }

    pub(crate) fn intl_uncrating_price(&self, params: &[ServiceItemParam]) -> Calculation {
        Calculation::new(
            Self::rate_or_factor(params),
            self.labels().uncrating_price.clone(),
            vec![
                labeled(
                    &self.labels().uncrating_date,
                    &Self::date_or_empty(params, ParamKey::RequestedPickupDate),
                ),
                self.market_detail(params),
            ],
        )
    }

    // ── total ─────────────────────────────────────────────────────────

    /// Terminal row. Derived from the item's requested amount (in cents),
    /// never from parameters. The single empty detail keeps row spacing
    /// symmetric in the presenter.
    pub(crate) fn total_amount_requested(&self, total_cents: i64) -> Calculation {
        Calculation::new(
            to_dollar_string(format_cents(total_cents)),
            self.labels().total_amount_requested.clone(),
            vec![String::new()],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> CalculationEngine {
        CalculationEngine::new()
    }

    fn p(pairs: &[(&str, &str)]) -> Vec<ServiceItemParam> {
        pairs
            .iter()
            .map(|(k, v)| ServiceItemParam::new(*k, *v))
            .collect()
    }

    // ── weight ────────────────────────────────────────────────────────

    #[test]
    fn test_billable_weight() {
        let params = p(&[
            ("WeightBilledActual", "8500"),
            ("WeightEstimated", "8000"),
        ]);
        let calc = engine().billable_weight(&params);
        assert_eq!(calc.value, "85 cwt");
        assert_eq!(calc.label, "Billable weight (cwt)");
        assert_eq!(
            calc.details,
            vec!["Original: 8,500 lbs", "Estimated: 8,000 lbs"]
        );
    }

    #[test]
    fn test_billable_weight_tolerates_missing_estimate() {
        let params = p(&[("WeightBilledActual", "8500")]);
        let calc = engine().billable_weight(&params);
        assert_eq!(calc.value, "85 cwt");
        assert_eq!(calc.details[1], "Estimated: ");
    }

    #[test]
    fn test_shuttle_billable_weight_picks_lowest_actual() {
        let params = p(&[
            ("WeightBilledActual", "8500"),
            ("WeightOriginal", "8600"),
            ("WeightReweigh", "8400"),
            ("WeightEstimated", "8000"),
        ]);
        let calc = engine().shuttle_billable_weight(&params);
        assert_eq!(calc.details[0], "Shuttle weight: 8,400 lbs");

        let only_original = p(&[("WeightBilledActual", "8500"), ("WeightOriginal", "8600")]);
        let calc = engine().shuttle_billable_weight(&only_original);
        assert_eq!(calc.details[0], "Shuttle weight: 8,600 lbs");
    }

    // ── mileage ───────────────────────────────────────────────────────

    #[test]
    fn test_mileage_zip3_uses_zip3_suffixes() {
        let params = p(&[
            ("DistanceZip3", "210"),
            ("ZipPickupAddress", "32210"),
            ("ZipDestAddress", "91910"),
        ]);
        let calc = engine().mileage_zip3(&params);
        assert_eq!(calc.value, "210");
        assert_eq!(calc.details, vec!["ZIP 210 to ZIP 910"]);
    }

    #[test]
    fn test_mileage_zip5_uses_full_zips() {
        let params = p(&[
            ("DistanceZip5", "32210"),
            ("ZipPickupAddress", "32210"),
            ("ZipDestAddress", "91910"),
        ]);
        let calc = engine().mileage_zip5(&params);
        assert_eq!(calc.value, "32210");
        assert_eq!(calc.details, vec!["ZIP 32210 to ZIP 91910"]);
    }

    #[test]
    fn test_mileage_sit_variants() {
        let origin = p(&[
            ("DistanceZipSITOrigin", "29"),
            ("ZipSITOriginHHGOriginalAddress", "90210"),
            ("ZipSITOriginHHGActualAddress", "90211"),
        ]);
        let calc = engine().mileage_sit_origin(&origin);
        assert_eq!(calc.value, "29");
        assert_eq!(calc.details, vec!["ZIP 90210 to ZIP 90211"]);

        let dest = p(&[
            ("DistanceZipSITDest", "29"),
            ("ZipDestAddress", "91910"),
            ("ZipSITDestHHGFinalAddress", "94535"),
        ]);
        let calc = engine().mileage_sit_dest(&dest);
        assert_eq!(calc.value, "29");
        assert_eq!(calc.details, vec!["ZIP 91910 to ZIP 94535"]);
    }

    // ── prices and dates ──────────────────────────────────────────────

    #[test]
    fn test_baseline_linehaul_price() {
        let params = p(&[
            ("PriceRateOrFactor", "1.71"),
            ("IsPeak", "false"),
            ("ServiceAreaOrigin", "176"),
            ("RequestedPickupDate", "2020-03-09"),
        ]);
        let calc = engine().baseline_linehaul_price(&params, None);
        assert_eq!(calc.value, "1.71");
        assert_eq!(
            calc.details,
            vec![
                "Domestic non-peak",
                "Origin service area: 176",
                "Requested pickup: 09 Mar 2020",
            ]
        );
    }

    #[test]
    fn test_nts_release_recaptions_pickup_date() {
        let params = p(&[("RequestedPickupDate", "2020-03-09")]);
        let eng = engine();

        let default = eng.origin_price(&params, Some(ShipmentType::Hhg));
        assert_eq!(default.details[1], "Requested pickup: 09 Mar 2020");

        let ntsr = eng.origin_price(&params, Some(ShipmentType::NtsRelease));
        assert_eq!(ntsr.details[1], "Actual pickup: 09 Mar 2020");
    }

    #[test]
    fn test_price_escalation_factor_tolerates_absence() {
        let calc = engine().price_escalation_factor(&[]);
        assert_eq!(calc.value, "");
        assert_eq!(calc.details, vec!["Contract year: "]);

        let with_year = p(&[
            ("EscalationCompounded", "1.033"),
            ("ContractYearName", "Base Period Year 2"),
        ]);
        let calc = engine().price_escalation_factor(&with_year);
        assert_eq!(calc.value, "1.033");
        assert_eq!(calc.details, vec!["Contract year: Base Period Year 2"]);
    }

    // ── fuel surcharge ────────────────────────────────────────────────

    #[test]
    fn test_fuel_surcharge_multiplies_strings_numerically() {
        let params = p(&[
            ("FSCWeightBasedDistanceMultiplier", "0.000417"),
            ("DistanceZip3", "210"),
            ("EIAFuelPrice", "272700"),
            ("ActualPickupDate", "2020-03-11"),
        ]);
        let calc = engine().fuel_surcharge_price(&params, ServiceItemCode::FSC);
        // 0.000417 * 210 = 0.08757 → two decimals
        assert_eq!(calc.value, "0.09");
        assert_eq!(calc.label, "Fuel surcharge price (per mi)");
        assert_eq!(
            calc.details,
            vec![
                "EIA fuel price: $2.73",
                "Fuel surcharge multiplier: 0.000417",
                "Actual pickup: 11 Mar 2020",
            ]
        );
    }

    #[test]
    fn test_fuel_surcharge_sit_variant_uses_sit_distance() {
        let params = p(&[
            ("FSCWeightBasedDistanceMultiplier", "0.000417"),
            ("DistanceZip3", "210"),
            ("DistanceZipSITDest", "29"),
        ]);
        let calc = engine().fuel_surcharge_price(&params, ServiceItemCode::DDSFSC);
        // 0.000417 * 29 = 0.0121 → "0.01"
        assert_eq!(calc.value, "0.01");
        assert_eq!(calc.label, "SIT fuel surcharge price (per mi)");
    }

    #[test]
    fn test_fuel_surcharge_price_difference_detail() {
        let params = p(&[
            ("FSCWeightBasedDistanceMultiplier", "0.000417"),
            ("DistanceZip3", "210"),
            ("FSCPriceDifferenceInCents", "-2.03"),
        ]);
        let calc = engine().fuel_surcharge_price(&params, ServiceItemCode::FSC);
        assert_eq!(
            calc.details.last().unwrap(),
            "FSC price difference in cents: -2.03 \u{00A2}"
        );
    }

    #[test]
    fn test_fuel_surcharge_unparseable_degrades_to_empty() {
        let params = p(&[
            ("FSCWeightBasedDistanceMultiplier", "bogus"),
            ("DistanceZip3", "210"),
        ]);
        let calc = engine().fuel_surcharge_price(&params, ServiceItemCode::FSC);
        assert_eq!(calc.value, "");
    }

    // ── crating ───────────────────────────────────────────────────────

    #[test]
    fn test_crating_size() {
        let params = p(&[
            ("CubicFeetBilled", "4.00"),
            ("DimensionLength", "30"),
            ("DimensionWidth", "20"),
            ("DimensionHeight", "10"),
        ]);
        let calc = engine().crating_size(&params, "Grandfather clock");
        assert_eq!(calc.value, "4.00");
        assert_eq!(calc.label, "Crating size (cu ft)");
        assert_eq!(
            calc.details,
            vec!["Description: Grandfather clock", "Dimensions: 30x20x10 in"]
        );
    }

    #[test]
    fn test_crating_size_external_minimum_applied() {
        let params = p(&[
            ("CubicFeetBilled", "4.00"),
            ("CubicFeetCrating", "2.50"),
            ("ExternalCrate", "true"),
            ("DimensionLength", "30"),
            ("DimensionWidth", "20"),
            ("DimensionHeight", "10"),
        ]);
        let calc = engine().crating_size(&params, "Grandfather clock");
        assert_eq!(calc.value, "4.00");
        assert_eq!(calc.label, "Crating size (cu ft) - Minimum");
        assert_eq!(
            calc.details,
            vec![
                "Description: Grandfather clock",
                "Dimensions: 30x20x10 in",
                "Actual size: 2.50 cu ft",
                "External crate",
            ]
        );
    }

    #[test]
    fn test_crating_size_external_without_minimum() {
        // Billed equals the measured crate: external detail only.
        let params = p(&[
            ("CubicFeetBilled", "6.00"),
            ("CubicFeetCrating", "6.00"),
            ("ExternalCrate", "true"),
        ]);
        let calc = engine().crating_size(&params, "Sculpture");
        assert_eq!(calc.label, "Crating size (cu ft)");
        assert_eq!(calc.details.last().unwrap(), "External crate");
        assert!(!calc.details.iter().any(|d| d.starts_with("Actual size")));
    }

    #[test]
    fn test_standalone_crate_rows() {
        let params = p(&[
            ("StandaloneCrate", "true"),
            ("StandaloneCrateCap", "100000"),
            ("UncappedRequestTotal", "1,234.56"),
        ]);
        let capped = engine().standalone_crate(&params);
        assert_eq!(capped.value, "$1,000.00");
        assert_eq!(capped.label, "Standalone crate");
        assert!(capped.details.is_empty());

        let uncapped = engine().uncapped_request_total(&params);
        assert_eq!(uncapped.value, "$1,234.56");
        assert_eq!(uncapped.label, "Uncapped request total");
    }

    #[test]
    fn test_min_size_crate_applied_marker() {
        let calc = engine().min_size_crate_applied();
        assert_eq!(calc.value, "");
        assert_eq!(calc.label, "Minimum crate size applied");
    }

    #[test]
    fn test_sit_delivery_under_threshold_adds_note() {
        let params = p(&[
            ("PriceRateOrFactor", "1.71"),
            ("SITScheduleDest", "3"),
            ("RequestedPickupDate", "2020-03-09"),
            ("IsPeak", "false"),
        ]);
        let calc = engine().sit_delivery_price_under_threshold(&params, None);
        assert_eq!(calc.label, "SIT delivery price");
        assert_eq!(calc.details.last().unwrap(), "<=50 miles");
    }

    #[test]
    fn test_intl_crating_market_detail() {
        let params = p(&[
            ("PriceRateOrFactor", "23.69"),
            ("RequestedPickupDate", "2020-03-09"),
            ("MarketOrigin", "O"),
        ]);
        let calc = engine().intl_crating_price(&params);
        assert_eq!(calc.details[1], "OCONUS");
    }

    // ── total ─────────────────────────────────────────────────────────

    #[test]
    fn test_total_amount_requested() {
        let calc = engine().total_amount_requested(99999);
        assert_eq!(calc.value, "$999.99");
        assert_eq!(calc.label, "Total amount requested");
        // One empty detail, not an empty list: the presenter depends on it.
        assert_eq!(calc.details, vec![""]);
    }
}
