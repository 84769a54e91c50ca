//! 表示単位と寸法フォーマット
//!
//! 元データ（メートル）は変更せず、表示時にのみ換算する。

use crate::types::SpatialData;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 表示単位
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    #[default]
    #[serde(alias = "m")]
    Meter,
    #[serde(alias = "cm")]
    Centimeter,
    #[serde(alias = "in")]
    Inch,
    #[serde(alias = "ft")]
    Foot,
}

impl DisplayUnit {
    pub const ALL: [DisplayUnit; 4] = [
        DisplayUnit::Meter,
        DisplayUnit::Centimeter,
        DisplayUnit::Inch,
        DisplayUnit::Foot,
    ];

    /// 1メートルあたりの値
    pub fn factor(&self) -> f64 {
        match self {
            DisplayUnit::Meter => 1.0,
            DisplayUnit::Centimeter => 100.0,
            DisplayUnit::Inch => 39.37,
            DisplayUnit::Foot => 3.28,
        }
    }

    pub fn from_meters(&self, meters: f64) -> f64 {
        meters * self.factor()
    }

    pub fn to_meters(&self, value: f64) -> f64 {
        value / self.factor()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            DisplayUnit::Meter => "m",
            DisplayUnit::Centimeter => "cm",
            DisplayUnit::Inch => "in",
            DisplayUnit::Foot => "ft",
        }
    }

    pub fn area_symbol(&self) -> &'static str {
        match self {
            DisplayUnit::Meter => "m²",
            DisplayUnit::Centimeter => "cm²",
            DisplayUnit::Inch => "in²",
            DisplayUnit::Foot => "ft²",
        }
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for DisplayUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(DisplayUnit::Meter),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Ok(DisplayUnit::Centimeter)
            }
            "in" | "inch" | "inches" => Ok(DisplayUnit::Inch),
            "ft" | "foot" | "feet" => Ok(DisplayUnit::Foot),
            _ => Err(format!("Unknown unit: {}. Use m, cm, in, or ft", s)),
        }
    }
}

/// メートル値を指定単位で "3.20 cm" 形式に整形
pub fn format_length(meters: f64, unit: DisplayUnit) -> String {
    format!("{:.2} {}", unit.from_meters(meters), unit.symbol())
}

/// 寸法パネル用に整形済みの値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementSummary {
    pub unit: DisplayUnit,
    pub width: String,
    pub height: String,
    pub length: String,
    pub area: String,
}

impl MeasurementSummary {
    /// メートル表示ではサービスが返した床面積をそのまま使い、
    /// それ以外の単位では換算後の幅×奥行きを床面積とする。
    pub fn new(spatial: &SpatialData, unit: DisplayUnit) -> Self {
        let area_value = match unit {
            DisplayUnit::Meter => spatial.area,
            _ => unit.from_meters(spatial.width) * unit.from_meters(spatial.length),
        };

        Self {
            unit,
            width: format_length(spatial.width, unit),
            height: format_length(spatial.height, unit),
            length: format_length(spatial.length, unit),
            area: format!("{:.2} {}", area_value, unit.area_symbol()),
        }
    }
}
