//! マーケティングページの掲載データ
//!
//! トップページの各セクションに表示する固定データ。
//! デモ解析タブの値もここで持ち、差分や精度はデータから算出する。

/// ヒーロー下の実績値
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_HIGHLIGHTS: [&str; 3] = [
    "Document Verification",
    "3D Area Estimation",
    "Quality Detection",
];

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "96.5%", label: "Detection Accuracy" },
    Stat { value: "60%", label: "Faster Analysis" },
    Stat { value: "100%", label: "Objective Results" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Accent,
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "📄",
        title: "Document Verification",
        description: "ML-assisted OCR and NER extract and cross-validate ownership documents, detecting fraud and ensuring legal compliance automatically.",
        accent: Accent::Primary,
    },
    Feature {
        icon: "🧊",
        title: "3D Area Estimation",
        description: "Structure-from-Motion and Multi-View Stereo create 3D models from photos to calculate precise floor area without manual measurement.",
        accent: Accent::Accent,
    },
    Feature {
        icon: "🔍",
        title: "Quality Detection",
        description: "YOLO and Faster R-CNN identify defects like cracks and water damage, outputting structured data with confidence scores for each issue.",
        accent: Accent::Primary,
    },
    Feature {
        icon: "🧠",
        title: "Predictive Analytics",
        description: "Multimodal neural networks fuse image, tabular, and geolocation data to predict property value, lifespan, and risk scores accurately.",
        accent: Accent::Accent,
    },
    Feature {
        icon: "🛡️",
        title: "Anti-Spoofing Protocol",
        description: "EXIF metadata verification ensures images are authentic. GPS coordinates and timestamps are cross-referenced with the property's registered address.",
        accent: Accent::Primary,
    },
    Feature {
        icon: "⚡",
        title: "Real-time Processing",
        description: "Microservice architecture enables independent scaling of ML services, delivering fast results without bottlenecks.",
        accent: Accent::Accent,
    },
];

pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 4] = [
    Step {
        icon: "📤",
        title: "Upload Data",
        description: "Submit property images, documents, and basic information through our secure interface.",
    },
    Step {
        icon: "⚙️",
        title: "AI Processing",
        description: "Our multimodal AI processes data through verification, reconstruction, and analysis modules.",
    },
    Step {
        icon: "📑",
        title: "Verification",
        description: "Cross-validate ownership, calculate floor area, and detect defects automatically.",
    },
    Step {
        icon: "📈",
        title: "Get Insights",
        description: "Receive comprehensive reports with value predictions and risk assessments.",
    },
];

pub const CTA_BADGES: [(&str, &str); 3] = [
    ("No credit card", "required"),
    ("5 free", "property analyses"),
    ("Enterprise", "ready"),
];

/// デモ解析のタブ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DemoTab {
    #[default]
    Overview,
    Area,
    Quality,
    Predictions,
}

impl DemoTab {
    pub const ALL: [DemoTab; 4] = [
        DemoTab::Overview,
        DemoTab::Area,
        DemoTab::Quality,
        DemoTab::Predictions,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DemoTab::Overview => "overview",
            DemoTab::Area => "area",
            DemoTab::Quality => "quality",
            DemoTab::Predictions => "predictions",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DemoTab::Overview => "Overview",
            DemoTab::Area => "Area",
            DemoTab::Quality => "Quality",
            DemoTab::Predictions => "Predictions",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DemoTab::Overview => "📄",
            DemoTab::Area => "📏",
            DemoTab::Quality => "📷",
            DemoTab::Predictions => "📈",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

pub struct Defect {
    pub name: &'static str,
    pub severity: Severity,
    pub confidence: f64,
}

pub struct Amenity {
    pub name: &'static str,
    pub confidence: f64,
}

/// 推定床面積と申告床面積（平方フィート）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaComparison {
    pub estimated_sqft: f64,
    pub claimed_sqft: f64,
}

impl AreaComparison {
    /// 申告値に対する推定値の差（%、正なら推定が大きい）
    pub fn deviation_percent(&self) -> f64 {
        if self.claimed_sqft == 0.0 {
            return 0.0;
        }
        (self.estimated_sqft - self.claimed_sqft) / self.claimed_sqft * 100.0
    }

    pub fn accuracy_percent(&self) -> f64 {
        (100.0 - self.deviation_percent().abs()).max(0.0)
    }

    pub fn summary(&self) -> String {
        let deviation = self.deviation_percent();
        let direction = if deviation >= 0.0 { "larger" } else { "smaller" };
        format!(
            "The estimated area is {:.1}% {} than claimed.",
            deviation.abs(),
            direction
        )
    }
}

pub struct Prediction {
    pub label: &'static str,
    pub value: &'static str,
}

/// デモ用の物件解析
pub struct PropertyShowcase {
    pub verification: [(&'static str, &'static str); 3],
    pub area: AreaComparison,
    pub method: &'static str,
    pub quality_score: u8,
    pub defects: [Defect; 2],
    pub amenities: [Amenity; 3],
    pub estimated_value: &'static str,
    pub price_per_sqft: &'static str,
    pub lifespan: &'static str,
    pub risk: &'static str,
}

pub const DEMO_PROPERTY: PropertyShowcase = PropertyShowcase {
    verification: [
        ("Owner Name", "Match Confirmed"),
        ("Address", "Verified"),
        ("Documents", "Authentic"),
    ],
    area: AreaComparison {
        estimated_sqft: 1247.0,
        claimed_sqft: 1200.0,
    },
    method: "3D Reconstruction",
    quality_score: 87,
    defects: [
        Defect { name: "Minor wall crack", severity: Severity::Low, confidence: 0.92 },
        Defect { name: "Paint fading", severity: Severity::Low, confidence: 0.88 },
    ],
    amenities: [
        Amenity { name: "Hardwood flooring", confidence: 0.95 },
        Amenity { name: "Granite countertops", confidence: 0.91 },
        Amenity { name: "Modern fixtures", confidence: 0.89 },
    ],
    estimated_value: "₹85.2L",
    price_per_sqft: "₹6,832",
    lifespan: "40+ years",
    risk: "Low",
};

impl PropertyShowcase {
    pub fn predictions(&self) -> [Prediction; 4] {
        [
            Prediction { label: "Estimated Value", value: self.estimated_value },
            Prediction { label: "Price per sq ft", value: self.price_per_sqft },
            Prediction { label: "Est. Lifespan", value: self.lifespan },
            Prediction { label: "Risk Assessment", value: self.risk },
        ]
    }
}

/// "1,247 sq ft" 形式
pub fn format_sqft(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if whole < 0 { "-" } else { "" };
    format!("{}{} sq ft", sign, grouped)
}

/// 0.92 → "92%"
pub fn confidence_percent(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}
