use serde::{Deserialize, Serialize};

use crate::io::svg::SvgDrawOptions;
use crate::linear::Strategy;

/// Configuration of the [`Planner`](crate::plan::Planner)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlanConfig {
    /// Material removed by one saw cut on linear stock
    pub kerf: f32,
    /// Material removed by one saw cut on sheet goods, kept between neighbouring panels
    pub panel_kerf: f32,
    /// Strategies competing for every linear stock group, earlier entries win ties
    pub strategies: Vec<Strategy>,
    /// Fail before packing if a panel exceeds the sheet, instead of exhausting the sheet budget
    pub reject_oversized_panels: bool,
    /// Plan independent stock groups on the rayon thread pool
    pub parallel: bool,
    /// Optional SVG drawing options
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            kerf: 0.0,
            panel_kerf: 0.0,
            strategies: Strategy::ALL.to_vec(),
            reject_oversized_panels: true,
            parallel: true,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: PlanConfig = serde_json::from_str(r#"{ "kerf": 0.125 }"#).unwrap();
        assert_eq!(config.kerf, 0.125);
        assert_eq!(config.strategies, [Strategy::LengthFirst, Strategy::MinWaste]);
        assert!(config.reject_oversized_panels);
    }

    #[test]
    fn strategies_use_screaming_case() {
        let config: PlanConfig =
            serde_json::from_str(r#"{ "strategies": ["MIN_WASTE"] }"#).unwrap();
        assert_eq!(config.strategies, [Strategy::MinWaste]);
    }
}
