//! Static page content.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkStatus {
    Active,
    /// Percent complete; rendered clamped to 0..=100.
    Progress(u8),
}

impl WorkStatus {
    pub fn label(&self) -> String {
        match self {
            Self::Active => "Active project".to_string(),
            Self::Progress(pct) => format!("{}% complete", (*pct).min(100)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub name: &'static str,
    pub description: &'static str,
    pub status: WorkStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub badge: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub name: &'static str,
    pub role: &'static str,
    pub city: &'static str,
    pub bio: &'static str,
    pub email_href: &'static str,
    pub current_work: Vec<WorkItem>,
    pub projects: Vec<Project>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            name: "Lucas Jansen",
            role: "Frontend developer",
            city: "Amsterdam",
            bio: "Currently, I'm expanding Revasi to the rest of Indonesia and working on freelance projects on the side.",
            email_href: "/about",
            current_work: vec![
                WorkItem {
                    name: "Revasi",
                    description: "Fine dining reservations management platform",
                    status: WorkStatus::Active,
                },
                WorkItem {
                    name: "Let's eat",
                    description: "Not sure what to eat? Let's eat will help you decide.",
                    status: WorkStatus::Progress(25),
                },
            ],
            projects: vec![
                Project {
                    name: "Revasi",
                    description: "Design & Development Agency",
                    badge: Some("Booking now"),
                },
                Project {
                    name: "Let's eat",
                    description: "Premium Framer templates boutique",
                    badge: None,
                },
                Project {
                    name: "Pohe",
                    description: "Website inspiration from the Dark Side",
                    badge: None,
                },
                Project {
                    name: "Moneynow",
                    description: "Make a living with Framer templates",
                    badge: None,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels() {
        assert_eq!(WorkStatus::Active.label(), "Active project");
        assert_eq!(WorkStatus::Progress(25).label(), "25% complete");
        assert_eq!(WorkStatus::Progress(250).label(), "100% complete");
    }

    #[test]
    fn default_content_lists_four_projects() {
        let content = SiteContent::default();
        let names: Vec<_> = content.projects.iter().map(|p| p.name).collect();

        assert_eq!(names, ["Revasi", "Let's eat", "Pohe", "Moneynow"]);
        assert_eq!(content.current_work.len(), 2);
    }
}
