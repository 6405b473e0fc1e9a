use crate::models::{BookingRequest, FitWeights, Vehicle};

/// Calculate the fit score of a vehicle against a booking request
///
/// Scoring formula (lower = closer fit):
/// score = (
///     |payload - payload_needed| * w_payload +
///     |length  - length_needed|  * w_length  +
///     |width   - width_needed|   * w_width   +
///     |height  - height_needed|  * w_height
/// )
///
/// With default weights this is the plain L1 distance, mass and length units
/// summed together.
pub fn calculate_fit_score(
    vehicle: &Vehicle,
    request: &BookingRequest,
    weights: &FitWeights,
) -> f64 {
    let payload_diff = payload_difference(vehicle.payload, request.payload_needed);
    let length_diff = (vehicle.length - request.length_needed).abs();
    let width_diff = (vehicle.width - request.width_needed).abs();
    let height_diff = (vehicle.height - request.height_needed).abs();

    payload_diff * weights.payload
        + length_diff * weights.length
        + width_diff * weights.width
        + height_diff * weights.height
}

/// Absolute payload difference, computed without integer overflow
#[inline]
fn payload_difference(payload: i64, payload_needed: i64) -> f64 {
    payload.abs_diff(payload_needed) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewVehicle;

    fn vehicle(payload: i64, length: f64, width: f64, height: f64) -> Vehicle {
        Vehicle::register(NewVehicle {
            name: "test".to_string(),
            payload,
            length,
            width,
            height,
        })
    }

    fn request(payload: i64, length: f64, width: f64, height: f64) -> BookingRequest {
        BookingRequest {
            payload_needed: payload,
            length_needed: length,
            width_needed: width,
            height_needed: height,
        }
    }

    #[test]
    fn test_exact_fit_scores_zero() {
        let score = calculate_fit_score(
            &vehicle(900, 4.0, 2.0, 2.0),
            &request(900, 4.0, 2.0, 2.0),
            &FitWeights::default(),
        );
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_unweighted_l1_distance() {
        let req = request(900, 4.0, 2.0, 2.0);
        let weights = FitWeights::default();

        assert_eq!(calculate_fit_score(&vehicle(1000, 4.0, 2.0, 2.0), &req, &weights), 100.0);
        assert_eq!(calculate_fit_score(&vehicle(1500, 5.0, 2.0, 2.0), &req, &weights), 601.0);
    }

    #[test]
    fn test_undersized_dimensions_count_as_distance() {
        let score = calculate_fit_score(
            &vehicle(900, 3.0, 1.5, 2.5),
            &request(900, 4.0, 2.0, 2.0),
            &FitWeights::default(),
        );
        assert!((score - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_weights_scale_each_dimension() {
        let weights = FitWeights {
            payload: 0.001,
            length: 1.0,
            width: 0.0,
            height: 0.0,
        };
        let score = calculate_fit_score(
            &vehicle(1500, 5.0, 3.0, 3.0),
            &request(900, 4.0, 2.0, 2.0),
            &weights,
        );
        assert!((score - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_extreme_payloads_do_not_overflow() {
        let score = calculate_fit_score(
            &vehicle(i64::MAX, 1.0, 1.0, 1.0),
            &request(i64::MIN, 1.0, 1.0, 1.0),
            &FitWeights::default(),
        );
        assert!(score.is_finite());
        assert!(score > 0.0);
    }
}
