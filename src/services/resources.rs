// Resource library
// Seeded list of downloadable guides and recorded workshops.

use crate::models::resource::{Resource, ResourceKind};

pub struct ResourceLibrary {
    resources: Vec<Resource>,
}

impl ResourceLibrary {
    pub fn seeded() -> Self {
        let entries = [
            (
                "University Application Guide 2025",
                "Complete guide to applying to top universities",
                ResourceKind::Guide,
                "PDF, 2.4 MB",
                "Updated Mar 2024",
                "https://counselpoint.example/resources/university-application-guide.pdf",
            ),
            (
                "Interview Preparation Handbook",
                "Tips and strategies for university interviews",
                ResourceKind::Guide,
                "PDF, 1.8 MB",
                "Updated Feb 2024",
                "https://counselpoint.example/resources/interview-preparation.pdf",
            ),
            (
                "Career Planning Workshop",
                "Recording of our latest career planning session",
                ResourceKind::Video,
                "45 mins",
                "Mar 15, 2024",
                "https://counselpoint.example/videos/career-planning-workshop",
            ),
            (
                "Study Skills Masterclass",
                "Learn effective study techniques",
                ResourceKind::Video,
                "60 mins",
                "Mar 10, 2024",
                "https://counselpoint.example/videos/study-skills-masterclass",
            ),
        ];

        let resources = entries
            .into_iter()
            .map(|(title, description, kind, detail, updated, url)| Resource {
                title: title.to_string(),
                description: description.to_string(),
                kind,
                detail: detail.to_string(),
                updated: updated.to_string(),
                url: url.to_string(),
            })
            .collect();

        Self { resources }
    }

    pub fn all(&self) -> &[Resource] {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn of_kind(&self, kind: ResourceKind) -> impl Iterator<Item = &Resource> {
        self.resources
            .iter()
            .filter(move |resource| resource.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_library_splits_by_kind() {
        let library = ResourceLibrary::seeded();
        assert_eq!(library.len(), 4);
        assert_eq!(library.of_kind(ResourceKind::Guide).count(), 2);
        assert_eq!(library.of_kind(ResourceKind::Video).count(), 2);
    }
}
