// Counsellor directory
// Seeded, immutable directory used for selection and name resolution.

use crate::models::counselor::Counselor;

pub struct CounselorDirectory {
    counselors: Vec<Counselor>,
}

impl CounselorDirectory {
    pub fn seeded() -> Self {
        let entries = [
            (
                1,
                "Dr. Sarah Chen",
                "Senior Academic Counsellor",
                "University Admissions, Career Planning",
                "Mon-Fri, 9 AM - 5 PM",
                "sarah.chen@nushigh.edu.sg",
                "+65 6123 4567",
            ),
            (
                2,
                "Mr. David Tan",
                "Career Guidance Counsellor",
                "Industry Insights, Interview Preparation",
                "Tue-Thu, 10 AM - 6 PM",
                "david.tan@nushigh.edu.sg",
                "+65 6123 4568",
            ),
            (
                3,
                "Ms. Rachel Wong",
                "Student Development Counsellor",
                "Personal Growth, Mental Wellness",
                "Mon-Fri, 8:30 AM - 4:30 PM",
                "rachel.wong@nushigh.edu.sg",
                "+65 6123 4569",
            ),
            (
                4,
                "Dr. Priya Nair",
                "Scholarship Advisor",
                "Scholarships, Financial Aid",
                "Mon-Wed, 9 AM - 3 PM",
                "priya.nair@nushigh.edu.sg",
                "+65 6123 4570",
            ),
            (
                5,
                "Mr. Marcus Lee",
                "Wellness Counsellor",
                "Stress Management, Peer Relations",
                "Wed-Fri, 10 AM - 5 PM",
                "marcus.lee@nushigh.edu.sg",
                "+65 6123 4571",
            ),
        ];

        let counselors = entries
            .into_iter()
            .map(
                |(id, name, role, specialization, availability, email, phone)| Counselor {
                    id,
                    name: name.to_string(),
                    role: role.to_string(),
                    specialization: specialization.to_string(),
                    availability: availability.to_string(),
                    email: email.to_string(),
                    phone: phone.to_string(),
                },
            )
            .collect();

        Self { counselors }
    }

    pub fn all(&self) -> &[Counselor] {
        &self.counselors
    }

    pub fn len(&self) -> usize {
        self.counselors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counselors.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Counselor> {
        self.counselors.iter().find(|counselor| counselor.id == id)
    }

    pub fn resolve_name(&self, id: i64) -> Option<&str> {
        self.get(id).map(|counselor| counselor.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_directory_has_five_counsellors() {
        let directory = CounselorDirectory::seeded();
        assert_eq!(directory.len(), 5);
        assert_eq!(directory.resolve_name(1), Some("Dr. Sarah Chen"));
        assert_eq!(directory.resolve_name(42), None);
    }
}
