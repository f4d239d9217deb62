use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A named category of non-clocking time credited towards the working day,
/// e.g. 7h of annual leave or 3h of training.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum,
)]
pub enum ActivityKind {
    Work,
    AnnualLeave,
    SpecialLeave,
    MedicalAppointment,
    Sick,
    Training,
    GlobalNonWorkingDay,
    PersonalNonWorkingDay,
    PreEmployment,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Work => "Work",
            ActivityKind::AnnualLeave => "Annual leave",
            ActivityKind::SpecialLeave => "Special leave",
            ActivityKind::MedicalAppointment => "Medical appointment",
            ActivityKind::Sick => "Sick",
            ActivityKind::Training => "Training",
            ActivityKind::GlobalNonWorkingDay => "All-staff non-working day",
            ActivityKind::PersonalNonWorkingDay => "Personal non-working day",
            ActivityKind::PreEmployment => "Before employment start date",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|a| a.label() == label)
    }

    pub fn all() -> &'static [ActivityKind] {
        &[
            ActivityKind::Work,
            ActivityKind::AnnualLeave,
            ActivityKind::SpecialLeave,
            ActivityKind::MedicalAppointment,
            ActivityKind::Sick,
            ActivityKind::Training,
            ActivityKind::GlobalNonWorkingDay,
            ActivityKind::PersonalNonWorkingDay,
            ActivityKind::PreEmployment,
        ]
    }
}
