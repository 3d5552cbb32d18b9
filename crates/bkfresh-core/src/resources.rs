use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// A food-assistance resource (benefit program, pantry map, safety tip).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub description: String,
    /// External link; resources without one are informational only.
    pub link: Option<String>,
    pub icon: String,
    /// Call-to-action category such as `"Apply"` or `"Safety Tip"`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Resource {
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.link.is_some()
    }

    #[must_use]
    pub fn action_label(&self) -> String {
        if self.is_linked() {
            format!("{} →", self.kind)
        } else {
            self.kind.clone()
        }
    }
}

#[must_use]
pub fn builtin_resources() -> &'static [Resource] {
    &RESOURCES
}

fn resource(title: &str, description: &str, link: Option<&str>, icon: &str, kind: &str) -> Resource {
    Resource {
        title: title.to_string(),
        description: description.to_string(),
        link: link.map(str::to_string),
        icon: icon.to_string(),
        kind: kind.to_string(),
    }
}

static RESOURCES: LazyLock<Vec<Resource>> = LazyLock::new(|| {
    vec![
        resource(
            "Apply for SNAP/EBT Benefits",
            "Get help paying for groceries — apply online through ACCESS HRA",
            Some("https://a069-access.nyc.gov/accesshra/"),
            "💳",
            "Apply",
        ),
        resource(
            "SNAP Center - Brooklyn",
            "243 Schermerhorn St, Brooklyn, NY 11201 • (718) 722-4004",
            None,
            "🏢",
            "Visit",
        ),
        resource(
            "Food Help NYC Map",
            "Find food pantries and community kitchens near you",
            Some("https://foodhelp.nyc.gov/"),
            "🗺️",
            "Find Food",
        ),
        resource(
            "Summer EBT for Kids",
            "Free grocery benefits for school-age children during summer break",
            Some("https://www.ny.gov/services/apply-snap"),
            "☀️",
            "Learn More",
        ),
        resource(
            "Protect Your EBT Card",
            "Freeze your card using ebtEDGE. Only unfreeze when shopping.",
            None,
            "🔒",
            "Safety Tip",
        ),
    ]
});
