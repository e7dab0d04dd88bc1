//! Per-code calculation plans.
//!
//! A fixed dispatch from service item code to an ordered builder sequence.
//! Membership and order are wholly a function of `(code, params)`; the
//! total row is always last and always derives from the requested amount
//! argument, never from parameters.

use common::{AdditionalServiceItemData, ServiceItemCode, ServiceItemParam, ShipmentType};
use tracing::debug;

use crate::params::{get_bool, get_float, get_value, ParamKey};
use crate::{Calculation, CalculationEngine};

/// Mileage does not factor into SIT delivery pricing at or under 50
/// miles when the start and end ZIP3s differ, so the row is hidden.
fn sit_delivery_mileage_hidden(params: &[ServiceItemParam]) -> bool {
    const LONGHAUL_MIN_DISTANCE: f64 = 50.0;
    let within = get_float(params, ParamKey::DistanceZipSITDest)
        .is_some_and(|d| d <= LONGHAUL_MIN_DISTANCE);
    let start = get_value(params, ParamKey::ZipSITDestHHGOriginalAddress).and_then(|z| z.get(..3));
    let end = get_value(params, ParamKey::ZipSITDestHHGFinalAddress).and_then(|z| z.get(..3));
    within && start != end
}

impl CalculationEngine {
    /// Build the ordered calculation list for one service item.
    ///
    /// `total_cents` is the item's requested amount in whole cents. Codes
    /// without a plan (move management, counseling, anything unknown)
    /// return an empty list — not an error.
    pub fn make_calculations(
        &self,
        code: ServiceItemCode,
        total_cents: i64,
        params: &[ServiceItemParam],
        additional: Option<&AdditionalServiceItemData>,
        shipment_type: Option<ShipmentType>,
    ) -> Vec<Calculation> {
        use ServiceItemCode::*;

        let st = shipment_type;
        let description = additional.map(|d| d.description.as_str()).unwrap_or("");

        match code {
            DLH => vec![
                self.billable_weight(params),
                self.mileage_zip3(params),
                self.baseline_linehaul_price(params, st),
                self.price_escalation_factor(params),
                self.total_amount_requested(total_cents),
            ],
            DSH => vec![
                self.billable_weight(params),
                self.mileage_zip5(params),
                self.baseline_shorthaul_price(params, st),
                self.price_escalation_factor(params),
                self.total_amount_requested(total_cents),
            ],
            FSC => vec![
                self.billable_weight(params),
                self.mileage_zip3(params),
                self.fuel_surcharge_price(params, code),
                self.total_amount_requested(total_cents),
            ],
            DOSFSC => vec![
                self.billable_weight(params),
                self.mileage_sit_origin(params),
                self.fuel_surcharge_price(params, code),
                self.total_amount_requested(total_cents),
            ],
            DDSFSC => vec![
                self.billable_weight(params),
                self.mileage_sit_dest(params),
                self.fuel_surcharge_price(params, code),
                self.total_amount_requested(total_cents),
            ],
            DOP | DOFSIT => vec![
                self.billable_weight(params),
                self.origin_price(params, st),
                self.price_escalation_factor(params),
                self.total_amount_requested(total_cents),
            ],
            DDP | DDFSIT => vec![
                self.billable_weight(params),
                self.destination_price(params, st),
                self.price_escalation_factor(params),
                self.total_amount_requested(total_cents),
            ],
            DOASIT => vec![
                self.billable_weight(params),
                self.days_in_sit(params),
                self.additional_day_origin_sit_price(params, st),
                self.price_escalation_factor(params),
                self.total_amount_requested(total_cents),
            ],
            DDASIT => vec![
                self.billable_weight(params),
                self.days_in_sit(params),
                self.additional_day_destination_sit_price(params, st),
                self.price_escalation_factor(params),
                self.total_amount_requested(total_cents),
            ],
            DOPSIT => vec![
                self.billable_weight(params),
                self.mileage_sit_origin(params),
                self.pickup_sit_price(params, st),
                self.price_escalation_factor(params),
                self.total_amount_requested(total_cents),
            ],
            DDDSIT => {
                if sit_delivery_mileage_hidden(params) {
                    vec![
                        self.billable_weight(params),
                        self.sit_delivery_price_under_threshold(params, st),
                        self.price_escalation_factor(params),
                        self.total_amount_requested(total_cents),
                    ]
                } else {
                    vec![
                        self.billable_weight(params),
                        self.mileage_sit_dest(params),
                        self.sit_delivery_price(params, st),
                        self.price_escalation_factor(params),
                        self.total_amount_requested(total_cents),
                    ]
                }
            }
            DPK => vec![
                self.billable_weight(params),
                self.pack_price(params, st),
                self.price_escalation_factor(params),
                self.total_amount_requested(total_cents),
            ],
            DNPK => vec![
                self.billable_weight(params),
                self.pack_price(params, st),
                self.nts_packing_factor(params),
                self.price_escalation_factor(params),
                self.total_amount_requested(total_cents),
            ],
            DUPK => vec![
                self.billable_weight(params),
                self.unpack_price(params, st),
                self.price_escalation_factor(params),
                self.total_amount_requested(total_cents),
            ],
            DCRT => {
                let mut plan = vec![
                    self.crating_size(params, description),
                    self.crating_price(params),
                    self.price_escalation_factor_no_contract_year(params),
                ];
                // Standalone crates price against a cap; show both sides.
                if get_bool(params, ParamKey::StandaloneCrate) {
                    plan.push(self.uncapped_request_total(params));
                    plan.push(self.standalone_crate(params));
                }
                plan.push(self.total_amount_requested(total_cents));
                plan
            }
            DUCRT => vec![
                self.crating_size(params, description),
                self.uncrating_price(params),
                self.price_escalation_factor_no_contract_year(params),
                self.total_amount_requested(total_cents),
            ],
            DOSHUT => vec![
                self.shuttle_billable_weight(params),
                self.shuttle_origin_price(params),
                self.price_escalation_factor_no_contract_year(params),
                self.total_amount_requested(total_cents),
            ],
            DDSHUT => vec![
                self.shuttle_billable_weight(params),
                self.shuttle_destination_price(params),
                self.price_escalation_factor_no_contract_year(params),
                self.total_amount_requested(total_cents),
            ],
            ISLH => vec![
                self.billable_weight(params),
                self.intl_shipping_and_linehaul_price(params, st),
                self.price_escalation_factor(params),
                self.total_amount_requested(total_cents),
            ],
            IHPK => vec![
                self.billable_weight(params),
                self.intl_pack_price(params, st),
                self.price_escalation_factor(params),
                self.total_amount_requested(total_cents),
            ],
            IHUPK => vec![
                self.billable_weight(params),
                self.intl_unpack_price(params, st),
                self.price_escalation_factor(params),
                self.total_amount_requested(total_cents),
            ],
            ICRT => {
                let mut plan = vec![
                    self.crating_size(params, description),
                    self.intl_crating_price(params),
                    self.price_escalation_factor_no_contract_year(params),
                ];
                if get_bool(params, ParamKey::StandaloneCrate) {
                    plan.push(self.uncapped_request_total(params));
                    plan.push(self.standalone_crate(params));
                }
                if Self::external_crate_min_size_applied(params) {
                    plan.push(self.min_size_crate_applied());
                }
                plan.push(self.total_amount_requested(total_cents));
                plan
            }
            IUCRT => vec![
                self.crating_size(params, description),
                self.intl_uncrating_price(params),
                self.price_escalation_factor_no_contract_year(params),
                self.total_amount_requested(total_cents),
            ],
            MS | CS | Unknown => {
                debug!(code = code.as_str(), "no calculation plan for code");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dlh_params() -> Vec<ServiceItemParam> {
        vec![
            ServiceItemParam::new("WeightBilledActual", "8500"),
            ServiceItemParam::new("WeightEstimated", "8000"),
            ServiceItemParam::new("DistanceZip3", "210"),
            ServiceItemParam::new("ZipPickupAddress", "32210"),
            ServiceItemParam::new("ZipDestAddress", "91910"),
            ServiceItemParam::new("PriceRateOrFactor", "1.71"),
            ServiceItemParam::new("IsPeak", "false"),
            ServiceItemParam::new("ServiceAreaOrigin", "176"),
            ServiceItemParam::new("RequestedPickupDate", "2020-03-09"),
            ServiceItemParam::new("EscalationCompounded", "1.033"),
            ServiceItemParam::new("ContractYearName", "Base Period Year 2"),
        ]
    }

    #[test]
    fn test_dlh_plan() {
        let engine = CalculationEngine::new();
        let result =
            engine.make_calculations(ServiceItemCode::DLH, 99999, &dlh_params(), None, None);

        let expected = vec![
            Calculation::new(
                "85 cwt",
                "Billable weight (cwt)",
                vec!["Original: 8,500 lbs".into(), "Estimated: 8,000 lbs".into()],
            ),
            Calculation::new("210", "Mileage", vec!["ZIP 210 to ZIP 910".into()]),
            Calculation::new(
                "1.71",
                "Baseline linehaul price",
                vec![
                    "Domestic non-peak".into(),
                    "Origin service area: 176".into(),
                    "Requested pickup: 09 Mar 2020".into(),
                ],
            ),
            Calculation::new(
                "1.033",
                "Price escalation factor",
                vec!["Contract year: Base Period Year 2".into()],
            ),
            Calculation::new("$999.99", "Total amount requested", vec!["".into()]),
        ];
        assert_eq!(result, expected);
    }

    #[test]
    fn test_total_is_always_last_and_from_amount() {
        let engine = CalculationEngine::new();
        for code in CalculationEngine::default_allowed_codes() {
            let result = engine.make_calculations(code, 99999, &dlh_params(), None, None);
            let last = result.last().unwrap();
            assert_eq!(last.label, "Total amount requested", "code {code:?}");
            assert_eq!(last.value, "$999.99", "code {code:?}");
        }
    }

    #[test]
    fn test_fsc_plan_has_no_escalation() {
        let engine = CalculationEngine::new();
        let result =
            engine.make_calculations(ServiceItemCode::FSC, 99999, &dlh_params(), None, None);
        assert_eq!(result.len(), 4);
        assert!(result
            .iter()
            .all(|c| c.label != "Price escalation factor"));
    }

    #[test]
    fn test_unknown_code_returns_empty_plan() {
        let engine = CalculationEngine::new();
        for code in [
            ServiceItemCode::MS,
            ServiceItemCode::CS,
            ServiceItemCode::Unknown,
        ] {
            assert!(engine
                .make_calculations(code, 99999, &dlh_params(), None, None)
                .is_empty());
        }
    }

    #[test]
    fn test_nts_release_only_changes_pickup_caption() {
        let engine = CalculationEngine::new();
        let base = engine.make_calculations(ServiceItemCode::DLH, 99999, &dlh_params(), None, None);
        let ntsr = engine.make_calculations(
            ServiceItemCode::DLH,
            99999,
            &dlh_params(),
            None,
            Some(ShipmentType::NtsRelease),
        );

        assert_eq!(base.len(), ntsr.len());
        for (b, n) in base.iter().zip(ntsr.iter()) {
            if b.label == "Baseline linehaul price" {
                assert_eq!(n.details[2], "Actual pickup: 09 Mar 2020");
                assert_eq!(b.details[2], "Requested pickup: 09 Mar 2020");
                assert_eq!(b.details[..2], n.details[..2]);
            } else {
                assert_eq!(b, n);
            }
        }
    }

    #[test]
    fn test_make_calculations_is_pure() {
        let engine = CalculationEngine::new();
        let a = engine.make_calculations(ServiceItemCode::DLH, 99999, &dlh_params(), None, None);
        let b = engine.make_calculations(ServiceItemCode::DLH, 99999, &dlh_params(), None, None);
        assert_eq!(a, b);
    }

    fn dddsit_params(distance: &str, start_zip: &str, end_zip: &str) -> Vec<ServiceItemParam> {
        vec![
            ServiceItemParam::new("WeightBilledActual", "8500"),
            ServiceItemParam::new("WeightEstimated", "8000"),
            ServiceItemParam::new("DistanceZipSITDest", distance),
            ServiceItemParam::new("ZipSITDestHHGOriginalAddress", start_zip),
            ServiceItemParam::new("ZipSITDestHHGFinalAddress", end_zip),
            ServiceItemParam::new("ZipDestAddress", start_zip),
            ServiceItemParam::new("PriceRateOrFactor", "1.71"),
            ServiceItemParam::new("SITScheduleDest", "3"),
            ServiceItemParam::new("IsPeak", "false"),
            ServiceItemParam::new("RequestedPickupDate", "2020-03-09"),
            ServiceItemParam::new("EscalationCompounded", "1.033"),
        ]
    }

    #[test]
    fn test_dddsit_hides_mileage_under_threshold_with_differing_zip3() {
        let engine = CalculationEngine::new();
        let params = dddsit_params("29", "90210", "91910");
        let result =
            engine.make_calculations(ServiceItemCode::DDDSIT, 99999, &params, None, None);

        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|c| c.label != "Mileage"));
        let delivery = &result[1];
        assert_eq!(delivery.label, "SIT delivery price");
        assert_eq!(delivery.details.last().unwrap(), "<=50 miles");
    }

    #[test]
    fn test_dddsit_shows_mileage_otherwise() {
        let engine = CalculationEngine::new();

        // Same ZIP3 at short distance: mileage still prices.
        let same_zip3 = dddsit_params("29", "91910", "91902");
        let result =
            engine.make_calculations(ServiceItemCode::DDDSIT, 99999, &same_zip3, None, None);
        assert_eq!(result.len(), 5);
        assert_eq!(result[1].label, "Mileage");
        assert!(result.iter().all(|c| c.details.iter().all(|d| d != "<=50 miles")));

        // Differing ZIP3 beyond the threshold: mileage still prices.
        let long_haul = dddsit_params("51", "90210", "91910");
        let result =
            engine.make_calculations(ServiceItemCode::DDDSIT, 99999, &long_haul, None, None);
        assert_eq!(result.len(), 5);
        assert_eq!(result[1].label, "Mileage");
    }

    #[test]
    fn test_dcrt_standalone_rows_precede_total() {
        let engine = CalculationEngine::new();
        let params = vec![
            ServiceItemParam::new("CubicFeetBilled", "4.00"),
            ServiceItemParam::new("PriceRateOrFactor", "23.69"),
            ServiceItemParam::new("ServicesScheduleOrigin", "3"),
            ServiceItemParam::new("RequestedPickupDate", "2020-03-09"),
            ServiceItemParam::new("StandaloneCrate", "true"),
            ServiceItemParam::new("StandaloneCrateCap", "100000"),
            ServiceItemParam::new("UncappedRequestTotal", "1,234.56"),
        ];
        let result =
            engine.make_calculations(ServiceItemCode::DCRT, 99999, &params, None, None);

        let labels: Vec<&str> = result.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Crating size (cu ft)",
                "Crating price",
                "Price escalation factor",
                "Uncapped request total",
                "Standalone crate",
                "Total amount requested",
            ]
        );
        assert_eq!(result[3].value, "$1,234.56");
        assert_eq!(result[4].value, "$1,000.00");
    }

    #[test]
    fn test_icrt_min_size_marker_row() {
        let engine = CalculationEngine::new();
        let params = vec![
            ServiceItemParam::new("CubicFeetBilled", "4.00"),
            ServiceItemParam::new("CubicFeetCrating", "2.50"),
            ServiceItemParam::new("ExternalCrate", "true"),
            ServiceItemParam::new("PriceRateOrFactor", "23.69"),
            ServiceItemParam::new("RequestedPickupDate", "2020-03-09"),
            ServiceItemParam::new("MarketOrigin", "O"),
        ];
        let result =
            engine.make_calculations(ServiceItemCode::ICRT, 99999, &params, None, None);

        assert_eq!(result[0].label, "Crating size (cu ft) - Minimum");
        let marker = result.len() - 2;
        assert_eq!(result[marker].label, "Minimum crate size applied");
        assert_eq!(result[marker].value, "");
        assert_eq!(result.last().unwrap().label, "Total amount requested");
    }

    #[test]
    fn test_dcrt_plan_uses_crating_builders() {
        let engine = CalculationEngine::new();
        let params = vec![
            ServiceItemParam::new("CubicFeetBilled", "4.00"),
            ServiceItemParam::new("DimensionLength", "30"),
            ServiceItemParam::new("DimensionWidth", "20"),
            ServiceItemParam::new("DimensionHeight", "10"),
            ServiceItemParam::new("PriceRateOrFactor", "23.69"),
            ServiceItemParam::new("ServicesScheduleOrigin", "3"),
            ServiceItemParam::new("RequestedPickupDate", "2020-03-09"),
        ];
        let extra = AdditionalServiceItemData {
            description: "Grandfather clock".into(),
        };
        let result = engine.make_calculations(
            ServiceItemCode::DCRT,
            99999,
            &params,
            Some(&extra),
            None,
        );
        assert_eq!(result[0].label, "Crating size (cu ft)");
        assert_eq!(result[0].details[0], "Description: Grandfather clock");
        assert_eq!(result[1].label, "Crating price");
        // Crating plans omit the contract year detail.
        assert_eq!(result[2].label, "Price escalation factor");
        assert!(result[2].details.is_empty());
    }
}
