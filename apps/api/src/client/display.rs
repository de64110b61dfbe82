/// Known job categories. Anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Internship,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
    Destructive,
}

impl JobType {
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some("Full-time") => JobType::FullTime,
            Some("Part-time") => JobType::PartTime,
            Some("Contract") => JobType::Contract,
            Some("Freelance") => JobType::Freelance,
            Some("Internship") => JobType::Internship,
            _ => JobType::Other,
        }
    }

    pub fn badge_variant(self) -> BadgeVariant {
        match self {
            JobType::PartTime => BadgeVariant::Secondary,
            JobType::Contract => BadgeVariant::Outline,
            JobType::Freelance => BadgeVariant::Destructive,
            JobType::FullTime | JobType::Internship | JobType::Other => BadgeVariant::Default,
        }
    }
}
