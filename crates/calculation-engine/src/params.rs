//! Typed access to the service item parameter collection.
//!
//! The backend delivers every parameter value as a string. Each accessor
//! here parses the value once, at the edge, and returns `None` for both a
//! missing key and an unparseable value — builders degrade to empty output
//! instead of letting garbage flow into display.

use chrono::NaiveDate;
use common::ServiceItemParam;

/// Known parameter keys produced by the pricing backend.
///
/// The wire collection may carry keys this engine never reads; lookups are
/// by known key, so extras are simply ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKey {
    WeightBilledActual,
    WeightEstimated,
    WeightOriginal,
    WeightReweigh,
    DistanceZip3,
    DistanceZip5,
    DistanceZipSITOrigin,
    DistanceZipSITDest,
    ZipPickupAddress,
    ZipDestAddress,
    ZipSITOriginHHGOriginalAddress,
    ZipSITOriginHHGActualAddress,
    ZipSITDestHHGOriginalAddress,
    ZipSITDestHHGFinalAddress,
    ServiceAreaOrigin,
    ServiceAreaDest,
    RequestedPickupDate,
    ActualPickupDate,
    IsPeak,
    EscalationCompounded,
    ContractYearName,
    PriceRateOrFactor,
    FSCWeightBasedDistanceMultiplier,
    EIAFuelPrice,
    FSCPriceDifferenceInCents,
    NumberDaysSIT,
    NTSPackingFactor,
    ServicesScheduleOrigin,
    ServicesScheduleDest,
    SITScheduleOrigin,
    SITScheduleDest,
    CubicFeetBilled,
    CubicFeetCrating,
    ExternalCrate,
    StandaloneCrate,
    StandaloneCrateCap,
    UncappedRequestTotal,
    DimensionLength,
    DimensionHeight,
    DimensionWidth,
    MarketOrigin,
    MarketDest,
}

impl ParamKey {
    /// The key string as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamKey::WeightBilledActual => "WeightBilledActual",
            ParamKey::WeightEstimated => "WeightEstimated",
            ParamKey::WeightOriginal => "WeightOriginal",
            ParamKey::WeightReweigh => "WeightReweigh",
            ParamKey::DistanceZip3 => "DistanceZip3",
            ParamKey::DistanceZip5 => "DistanceZip5",
            ParamKey::DistanceZipSITOrigin => "DistanceZipSITOrigin",
            ParamKey::DistanceZipSITDest => "DistanceZipSITDest",
            ParamKey::ZipPickupAddress => "ZipPickupAddress",
            ParamKey::ZipDestAddress => "ZipDestAddress",
            ParamKey::ZipSITOriginHHGOriginalAddress => "ZipSITOriginHHGOriginalAddress",
            ParamKey::ZipSITOriginHHGActualAddress => "ZipSITOriginHHGActualAddress",
            ParamKey::ZipSITDestHHGOriginalAddress => "ZipSITDestHHGOriginalAddress",
            ParamKey::ZipSITDestHHGFinalAddress => "ZipSITDestHHGFinalAddress",
            ParamKey::ServiceAreaOrigin => "ServiceAreaOrigin",
            ParamKey::ServiceAreaDest => "ServiceAreaDest",
            ParamKey::RequestedPickupDate => "RequestedPickupDate",
            ParamKey::ActualPickupDate => "ActualPickupDate",
            ParamKey::IsPeak => "IsPeak",
            ParamKey::EscalationCompounded => "EscalationCompounded",
            ParamKey::ContractYearName => "ContractYearName",
            ParamKey::PriceRateOrFactor => "PriceRateOrFactor",
            ParamKey::FSCWeightBasedDistanceMultiplier => "FSCWeightBasedDistanceMultiplier",
            ParamKey::EIAFuelPrice => "EIAFuelPrice",
            ParamKey::FSCPriceDifferenceInCents => "FSCPriceDifferenceInCents",
            ParamKey::NumberDaysSIT => "NumberDaysSIT",
            ParamKey::NTSPackingFactor => "NTSPackingFactor",
            ParamKey::ServicesScheduleOrigin => "ServicesScheduleOrigin",
            ParamKey::ServicesScheduleDest => "ServicesScheduleDest",
            ParamKey::SITScheduleOrigin => "SITScheduleOrigin",
            ParamKey::SITScheduleDest => "SITScheduleDest",
            ParamKey::CubicFeetBilled => "CubicFeetBilled",
            ParamKey::CubicFeetCrating => "CubicFeetCrating",
            ParamKey::ExternalCrate => "ExternalCrate",
            ParamKey::StandaloneCrate => "StandaloneCrate",
            ParamKey::StandaloneCrateCap => "StandaloneCrateCap",
            ParamKey::UncappedRequestTotal => "UncappedRequestTotal",
            ParamKey::DimensionLength => "DimensionLength",
            ParamKey::DimensionHeight => "DimensionHeight",
            ParamKey::DimensionWidth => "DimensionWidth",
            ParamKey::MarketOrigin => "MarketOrigin",
            ParamKey::MarketDest => "MarketDest",
        }
    }
}

/// Raw lookup. Returns the value of the first record matching `key`,
/// or `None` if absent. Never panics on an empty collection.
pub fn get_value(params: &[ServiceItemParam], key: ParamKey) -> Option<&str> {
    params
        .iter()
        .find(|p| p.key == key.as_str())
        .map(|p| p.value.as_str())
}

/// Like [`get_value`] but yields an owned string, empty when absent.
pub fn get_value_or_empty(params: &[ServiceItemParam], key: ParamKey) -> String {
    get_value(params, key).unwrap_or_default().to_string()
}

/// Integer parameter, `None` when absent or unparseable.
pub fn get_int(params: &[ServiceItemParam], key: ParamKey) -> Option<i64> {
    get_value(params, key)?.trim().parse::<i64>().ok()
}

/// Decimal parameter, `None` when absent or unparseable.
pub fn get_float(params: &[ServiceItemParam], key: ParamKey) -> Option<f64> {
    get_value(params, key)?.trim().parse::<f64>().ok()
}

/// Boolean parameter. The backend sends "TRUE"/"true"; anything else
/// (including absence) reads as false.
pub fn get_bool(params: &[ServiceItemParam], key: ParamKey) -> bool {
    get_value(params, key)
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// ISO-8601 date parameter, `None` when absent or unparseable.
pub fn get_date(params: &[ServiceItemParam], key: ParamKey) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(get_value(params, key)?.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> Vec<ServiceItemParam> {
        vec![
            ServiceItemParam::new("WeightBilledActual", "8500"),
            ServiceItemParam::new("IsPeak", "TRUE"),
            ServiceItemParam::new("RequestedPickupDate", "2020-03-09"),
            ServiceItemParam::new("EscalationCompounded", "1.033"),
            ServiceItemParam::new("ContractYearName", "not-a-number"),
        ]
    }

    #[test]
    fn test_get_value_finds_matching_key() {
        assert_eq!(
            get_value(&params(), ParamKey::WeightBilledActual),
            Some("8500")
        );
    }

    #[test]
    fn test_get_value_missing_key_is_none() {
        assert_eq!(get_value(&params(), ParamKey::DistanceZip3), None);
        assert_eq!(get_value(&[], ParamKey::DistanceZip3), None);
    }

    #[test]
    fn test_typed_accessors() {
        let p = params();
        assert_eq!(get_int(&p, ParamKey::WeightBilledActual), Some(8500));
        assert_eq!(get_float(&p, ParamKey::EscalationCompounded), Some(1.033));
        assert!(get_bool(&p, ParamKey::IsPeak));
        assert!(!get_bool(&p, ParamKey::MarketOrigin));
        assert_eq!(
            get_date(&p, ParamKey::RequestedPickupDate),
            NaiveDate::from_ymd_opt(2020, 3, 9)
        );
    }

    #[test]
    fn test_unparseable_value_degrades_to_none() {
        let p = params();
        assert_eq!(get_int(&p, ParamKey::ContractYearName), None);
        assert_eq!(get_float(&p, ParamKey::ContractYearName), None);
        assert_eq!(get_date(&p, ParamKey::ContractYearName), None);
    }
}
