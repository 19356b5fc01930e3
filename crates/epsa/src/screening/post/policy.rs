use serde::{Deserialize, Serialize};

const LOW_MAX_POINTS: i32 = 40;
const MODERATE_MAX_POINTS: i32 = 80;
const HIGH_MAX_POINTS: i32 = 120;

const SCREENING_RESOURCE: &str = "American Cancer Society: prostate cancer early detection";
const RISK_RESOURCE: &str = "Prostate Cancer Foundation: understanding your risk";

const PIRADS_4_STEPS: [&str; 2] = [
    "A PI-RADS 4 lesion is likely clinically significant; \
     discuss MRI-targeted biopsy with a urologist",
    "Arrange urology follow-up within 2 to 4 weeks",
];
const PIRADS_5_STEPS: [&str; 3] = [
    "A PI-RADS 5 lesion is highly suspicious for clinically significant cancer",
    "Urgent urology referral for MRI-targeted biopsy is recommended",
    "Ask about staging imaging if the biopsy confirms cancer",
];

/// Refined risk category after PSA and MRI results are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostRiskCategory {
    Low,
    Moderate,
    High,
    VeryHigh,
    /// Fixed by a PI-RADS 4 lesion, regardless of points.
    VeryHighPirads4,
    /// Fixed by a PI-RADS 5 lesion, regardless of points.
    VeryHighPirads5,
}

impl PostRiskCategory {
    pub fn from_points(total_points: i32) -> Self {
        if total_points <= LOW_MAX_POINTS {
            Self::Low
        } else if total_points <= MODERATE_MAX_POINTS {
            Self::Moderate
        } else if total_points <= HIGH_MAX_POINTS {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low-Risk",
            Self::Moderate => "Moderate-Risk",
            Self::High => "High-Risk",
            Self::VeryHigh | Self::VeryHighPirads4 | Self::VeryHighPirads5 => "Very High-Risk",
        }
    }

    pub const fn risk_percent_range(self) -> &'static str {
        match self {
            Self::Low => "0–10%",
            Self::Moderate => "10–20%",
            Self::High => "20–40%",
            Self::VeryHigh => "40–70%",
            Self::VeryHighPirads4 => "52% (43–61%)",
            Self::VeryHighPirads5 => "89% (76–97%)",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "green",
            Self::Moderate => "yellow",
            Self::High | Self::VeryHighPirads4 => "orange",
            Self::VeryHigh | Self::VeryHighPirads5 => "red",
        }
    }

    pub const fn is_override(self) -> bool {
        matches!(self, Self::VeryHighPirads4 | Self::VeryHighPirads5)
    }

    pub fn next_steps(self) -> Vec<String> {
        let steps: &[&str] = match self {
            Self::Low => &[
                "Keep a healthy weight, stay active, and eat plenty of vegetables",
                "Continue routine PSA screening as recommended by your doctor",
            ],
            Self::Moderate => &[
                "Exercise regularly, limit red and processed meat, and avoid smoking",
                "Repeat PSA in 6 to 12 months and ask your doctor whether an MRI is appropriate",
            ],
            Self::High => &[
                "Review lifestyle risk factors with your care team",
                "Schedule a urology consultation to discuss MRI and possible biopsy",
            ],
            Self::VeryHigh => &[
                "Healthy habits support treatment outcomes but should not delay evaluation",
                "Seek a prompt urology referral; MRI-targeted biopsy is strongly recommended",
            ],
            Self::VeryHighPirads4 => return PIRADS_4_STEPS.map(String::from).to_vec(),
            Self::VeryHighPirads5 => return PIRADS_5_STEPS.map(String::from).to_vec(),
        };

        steps
            .iter()
            .map(|step| step.to_string())
            .chain(
                [SCREENING_RESOURCE, RISK_RESOURCE]
                    .iter()
                    .map(|resource| format!("Learn more: {resource}")),
            )
            .collect()
    }
}
