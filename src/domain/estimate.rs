//! Estimate response models.
//!
//! The calculation API is schema-on-read: every field is optional, numbers
//! sometimes arrive as strings, and older cached responses use legacy key
//! names. `RawEstimate` accepts all of that; `Estimate::from_raw` is the one
//! place that turns it into the canonical shape the renderer reads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::ClientResult;
use crate::render::format;

/// A loosely typed scalar (quantities, week counts, workforce notes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Zero, NaN and empty text count as "not provided".
    pub fn is_present(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
        }
    }

    fn zero() -> Self {
        Self::Number(0.0)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format::plain(*n)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

mod lenient {
    use serde::{de::DeserializeOwned, Deserialize, Deserializer};
    use serde_json::Value;

    /// Any value that doesn't fit `T` is treated as absent.
    pub fn value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
    }

    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(raw.as_ref().and_then(number_of))
    }

    /// Array elements that don't fit `T` are dropped; a non-array is empty.
    pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|v| serde_json::from_value(v).ok())
                .collect(),
            _ => Vec::new(),
        })
    }

    pub fn number_of(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().replace(',', "").parse().ok(),
            _ => None,
        }
    }
}

// =============================================================================
// Wire shape
// =============================================================================

/// Estimate response exactly as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEstimate {
    #[serde(default, deserialize_with = "lenient::value")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_estimated_cost: Option<f64>,
    /// Current cost split.
    #[serde(default, deserialize_with = "lenient::value")]
    pub summary_breakdown: Option<RawCostBreakdown>,
    /// Legacy cost split, still present in cached responses.
    #[serde(default, deserialize_with = "lenient::value")]
    pub cost_breakdown: Option<RawCostBreakdown>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub material_cost_breakdown: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub labor_breakdown: Option<RawLaborBreakdown>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub materials: Option<RawMaterials>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub workers_per_day: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub timeline_weeks: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub schedule_phases: Vec<RawPhase>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub risks: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub optimizations: Vec<String>,
    /// Failure message the API sends alongside a non-success status.
    #[serde(default, deserialize_with = "lenient::value")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCostBreakdown {
    #[serde(default, deserialize_with = "lenient::number")]
    pub material: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub labor: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub other: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCrew {
    #[serde(default, deserialize_with = "lenient::number")]
    pub workforce: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub daily_wage: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_cost: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLaborBreakdown {
    #[serde(default, deserialize_with = "lenient::value")]
    pub skilled: Option<RawCrew>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub unskilled: Option<RawCrew>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_days: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_workforce: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_labor_cost: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMaterials {
    #[serde(default, deserialize_with = "lenient::value")]
    pub cement: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub steel: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub sand: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub bricks: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPhase {
    #[serde(default, deserialize_with = "lenient::value")]
    pub phase: Option<String>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub start_week: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub end_week: Option<f64>,
    /// Legacy single week figure.
    #[serde(default, deserialize_with = "lenient::value")]
    pub weeks: Option<Scalar>,
}

// =============================================================================
// Canonical shape
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CostSummary {
    pub total: f64,
    pub material: f64,
    pub labor: f64,
    pub other: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialCost {
    pub item: String,
    pub cost: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Crew {
    pub workforce: f64,
    pub duration: f64,
    pub daily_wage: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LaborBreakdown {
    pub skilled: Crew,
    pub unskilled: Crew,
    pub total_workforce: f64,
    pub total_days: f64,
    pub total_labor_cost: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialQuantities {
    pub cement: Scalar,
    pub steel: Scalar,
    pub sand: Scalar,
    pub bricks: Scalar,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeekSpan {
    Range { start: f64, end: f64 },
    Legacy(Scalar),
    Unspecified,
}

impl WeekSpan {
    pub fn label(&self) -> String {
        match self {
            Self::Range { start, end } if start == end => {
                format!("WEEK {}", format::plain(*start))
            }
            Self::Range { start, end } => {
                format!("WEEKS {} - {}", format::plain(*start), format::plain(*end))
            }
            Self::Legacy(weeks) => format!("WEEK {}", weeks),
            Self::Unspecified => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub weeks: WeekSpan,
    pub name: String,
    pub description: String,
}

/// Canonical estimate. Absent sections stay `None` so the renderer can skip them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Estimate {
    pub summary: Option<String>,
    pub currency: Option<String>,
    pub costs: Option<CostSummary>,
    pub material_costs: Option<Vec<MaterialCost>>,
    pub labor: Option<LaborBreakdown>,
    pub quantities: Option<MaterialQuantities>,
    pub workers_per_day: Option<String>,
    pub timeline_weeks: Option<Scalar>,
    pub phases: Vec<Phase>,
    pub risks: Vec<String>,
    pub optimizations: Vec<String>,
}

impl Estimate {
    pub fn from_json(body: &[u8]) -> ClientResult<Self> {
        let raw: RawEstimate = serde_json::from_slice(body)?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_raw(raw: RawEstimate) -> Self {
        // Current breakdown wins; the legacy one carries its own total
        let costs = match (raw.summary_breakdown, raw.cost_breakdown) {
            (Some(current), _) => Some(CostSummary {
                total: raw.total_estimated_cost.unwrap_or(0.0),
                material: current.material.unwrap_or(0.0),
                labor: current.labor.unwrap_or(0.0),
                other: current.other.unwrap_or(0.0),
            }),
            (None, Some(legacy)) => Some(CostSummary {
                total: legacy.total.unwrap_or(0.0),
                material: legacy.material.unwrap_or(0.0),
                labor: legacy.labor.unwrap_or(0.0),
                other: legacy.other.unwrap_or(0.0),
            }),
            (None, None) => None,
        };

        let material_costs = raw.material_cost_breakdown.map(|items| {
            items
                .into_iter()
                .map(|(item, cost)| MaterialCost {
                    cost: lenient::number_of(&cost).unwrap_or(0.0),
                    item,
                })
                .collect()
        });

        let labor = raw.labor_breakdown.map(|labor| LaborBreakdown {
            skilled: labor.skilled.map(Crew::from).unwrap_or_default(),
            unskilled: labor.unskilled.map(Crew::from).unwrap_or_default(),
            total_workforce: labor.total_workforce.unwrap_or(0.0),
            total_days: labor.total_days.unwrap_or(0.0),
            total_labor_cost: labor.total_labor_cost.unwrap_or(0.0),
        });

        let quantities = raw.materials.map(|m| MaterialQuantities {
            cement: present_or_zero(m.cement),
            steel: present_or_zero(m.steel),
            sand: present_or_zero(m.sand),
            bricks: present_or_zero(m.bricks),
        });

        let phases = raw
            .schedule_phases
            .into_iter()
            .map(|p| {
                let weeks = match (p.start_week, p.end_week, p.weeks) {
                    (Some(start), Some(end), _) if start != 0.0 && end != 0.0 => {
                        WeekSpan::Range { start, end }
                    }
                    (_, _, Some(weeks)) if weeks.is_present() => WeekSpan::Legacy(weeks),
                    _ => WeekSpan::Unspecified,
                };
                Phase {
                    weeks,
                    name: p.phase.unwrap_or_default(),
                    description: p.description.unwrap_or_default(),
                }
            })
            .collect();

        Self {
            summary: raw.summary.filter(|s| !s.is_empty()),
            currency: raw.currency.filter(|c| !c.is_empty()),
            costs,
            material_costs,
            labor,
            quantities,
            workers_per_day: raw
                .workers_per_day
                .filter(Scalar::is_present)
                .map(|w| w.to_string()),
            timeline_weeks: raw.timeline_weeks.filter(Scalar::is_present),
            phases,
            risks: raw.risks,
            optimizations: raw.optimizations,
        }
    }
}

impl From<RawCrew> for Crew {
    fn from(crew: RawCrew) -> Self {
        Self {
            workforce: crew.workforce.unwrap_or(0.0),
            duration: crew.duration.unwrap_or(0.0),
            daily_wage: crew.daily_wage.unwrap_or(0.0),
            total_cost: crew.total_cost.unwrap_or(0.0),
        }
    }
}

fn present_or_zero(value: Option<Scalar>) -> Scalar {
    value.filter(Scalar::is_present).unwrap_or_else(Scalar::zero)
}
