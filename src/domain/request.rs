//! Estimate request built from the two-step project form.

use serde::Serialize;

use crate::error::{ClientError, ClientResult};

/// Smallest plot the calculator accepts, in square feet.
pub const MIN_AREA_SQFT: f64 = 200.0;

pub const AREA_VALIDATION_MESSAGE: &str = "Please enter a valid area (min 200 sq ft).";
pub const FLOORS_VALIDATION_MESSAGE: &str = "Please select the number of floors.";

/// Raw form values, exactly as typed or selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EstimateForm {
    pub area: String,
    pub floors: String,
    pub project_type: String,
    pub budget: String,
    pub timeline: String,
    pub country: String,
    pub currency: String,
}

/// Body of `POST /api/calculate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateRequest {
    pub area: f64,
    pub floors: u32,
    #[serde(rename = "type")]
    pub project_type: String,
    pub budget: String,
    pub timeline: String,
    pub country: String,
    pub currency: String,
}

/// Area gate for leaving step 1: non-empty, numeric and at least 200 sq ft.
pub fn validate_area(raw: &str) -> ClientResult<f64> {
    let area: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ClientError::validation(AREA_VALIDATION_MESSAGE))?;

    if !area.is_finite() || area < MIN_AREA_SQFT {
        return Err(ClientError::validation(AREA_VALIDATION_MESSAGE));
    }

    Ok(area)
}

impl EstimateForm {
    pub fn validate(&self) -> ClientResult<EstimateRequest> {
        let area = validate_area(&self.area)?;
        let floors = self
            .floors
            .trim()
            .parse()
            .map_err(|_| ClientError::validation(FLOORS_VALIDATION_MESSAGE))?;

        Ok(EstimateRequest {
            area,
            floors,
            project_type: self.project_type.clone(),
            budget: self.budget.clone(),
            timeline: self.timeline.clone(),
            country: self.country.clone(),
            currency: self.currency.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(area: &str) -> EstimateForm {
        EstimateForm {
            area: area.to_string(),
            floors: "2".to_string(),
            project_type: "Commercial".to_string(),
            budget: "Premium".to_string(),
            timeline: "Fast Track".to_string(),
            country: "USA".to_string(),
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn area_below_minimum_is_rejected() {
        for raw in ["", "   ", "199", "199.99", "0", "-500", "abc", "NaN", "inf"] {
            let err = validate_area(raw).unwrap_err();
            assert_eq!(err.public_message(), AREA_VALIDATION_MESSAGE, "input {:?}", raw);
        }
    }

    #[test]
    fn area_at_minimum_is_accepted() {
        assert_eq!(validate_area("200").unwrap(), 200.0);
        assert_eq!(validate_area(" 1500.5 ").unwrap(), 1500.5);
    }

    #[test]
    fn request_serializes_with_wire_keys() {
        let request = form("1200").validate().unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["area"], 1200.0);
        assert_eq!(json["floors"], 2);
        assert_eq!(json["type"], "Commercial");
        assert_eq!(json["budget"], "Premium");
        assert_eq!(json["timeline"], "Fast Track");
        assert_eq!(json["country"], "USA");
        assert_eq!(json["currency"], "USD");
        assert!(json.get("project_type").is_none());
    }

    #[test]
    fn unparseable_floors_fail_validation() {
        let mut bad = form("1200");
        bad.floors = "ground".to_string();
        let err = bad.validate().unwrap_err();
        assert_eq!(err.public_message(), FLOORS_VALIDATION_MESSAGE);
    }
}
