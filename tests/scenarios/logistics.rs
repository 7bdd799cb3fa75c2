//! A shipment moves by road, rail and sea.

use ghgcalc::{ActivityType, FreightSegment, Metadata, RawInput};

use crate::assert_close;
use crate::common::*;

fn segments() -> Vec<FreightSegment> {
    vec![
        FreightSegment::new(ActivityType::RoadFreight, 300.0, 2000.0),
        FreightSegment::new(ActivityType::RailFreight, 1200.0, 2000.0),
        FreightSegment::new(ActivityType::SeaFreight, 8000.0, 2000.0),
    ]
}

#[test]
fn multimodal_shipment_sums_its_legs() {
    let service = service();
    let shipment = service.calculate_multimodal(ORG, &segments()).unwrap();

    let legs: f64 = segments()
        .iter()
        .map(|segment| {
            let raw = RawInput::new(segment.activity_type, segment.tonne_km(), "tonne-km")
                .with_metadata(
                    Metadata::new()
                        .with("cargoWeight", segment.cargo_weight_kg)
                        .with("distance", segment.distance_km),
                );
            service.calculate(ORG, &raw, None).unwrap().t_co2e
        })
        .sum();

    assert_close!(shipment.t_co2e, legs);
    assert!(shipment.t_co2e > 0.0);
    assert_eq!(shipment.method, "Multimodal Freight Transport");
}

#[test]
fn shipment_with_unpriced_leg_fails() {
    let mut segments = segments();
    segments.push(FreightSegment::new(ActivityType::AirFreight, 900.0, 2000.0));
    assert!(service().calculate_multimodal(ORG, &segments).is_err());
}
