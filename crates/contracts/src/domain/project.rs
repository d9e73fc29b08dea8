use serde::{Deserialize, Serialize};

/// Portfolio project shown in the gallery and the detail modal.
///
/// Field names serialize in camelCase so the records match the published
/// site data verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Thumbnail shown on the project card.
    pub image: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Absent for personal (non-client) projects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    pub category: ProjectCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    /// Ordered gallery images; defines the fullscreen viewer order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Optional demo clip, rendered after all gallery images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Crud,
    Trending,
    Specialized,
    All,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Crud => "crud",
            ProjectCategory::Trending => "trending",
            ProjectCategory::Specialized => "specialized",
            ProjectCategory::All => "all",
        }
    }
}

impl Project {
    /// Number of entries in the gallery strip: every image plus the
    /// trailing video when present.
    pub fn gallery_len(&self) -> usize {
        self.images.len() + usize::from(self.video.is_some())
    }

    pub fn has_gallery(&self) -> bool {
        self.gallery_len() > 0
    }

    /// Client label, or the given caption for personal projects.
    pub fn client_or<'a>(&'a self, personal: &'a str) -> &'a str {
        self.client.as_deref().unwrap_or(personal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(images: usize, video: bool) -> Project {
        Project {
            id: "p1".to_string(),
            title: "Demo".to_string(),
            description: String::new(),
            image: "/thumb.png".to_string(),
            technologies: vec![],
            demo_url: None,
            github_url: None,
            client: None,
            category: ProjectCategory::Specialized,
            full_description: None,
            images: (0..images).map(|i| format!("/img{i}.png")).collect(),
            video: video.then(|| "/demo.mp4".to_string()),
        }
    }

    #[test]
    fn gallery_len_counts_images_and_video() {
        assert_eq!(sample(0, false).gallery_len(), 0);
        assert_eq!(sample(3, false).gallery_len(), 3);
        assert_eq!(sample(0, true).gallery_len(), 1);
        assert_eq!(sample(7, true).gallery_len(), 8);
        assert!(!sample(0, false).has_gallery());
        assert!(sample(0, true).has_gallery());
    }

    #[test]
    fn client_falls_back_to_personal_label() {
        let mut p = sample(0, false);
        assert_eq!(p.client_or("Proyecto personal"), "Proyecto personal");
        p.client = Some("Educadia".to_string());
        assert_eq!(p.client_or("Proyecto personal"), "Educadia");
    }

    #[test]
    fn serializes_camel_case_and_omits_absent_fields() {
        let value = serde_json::to_value(sample(1, false)).unwrap();
        assert!(value.get("fullDescription").is_none());
        assert!(value.get("video").is_none());
        assert_eq!(value["category"], "specialized");
        assert_eq!(value["images"][0], "/img0.png");
    }
}
