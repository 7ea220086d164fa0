// Forum store
// In-memory discussion CRUD. Nothing here is persisted.

use chrono::{Duration, Local};

use crate::models::forum::{slugify, Discussion, ForumCategory, Reply};

#[derive(Default)]
pub struct ForumStore {
    discussions: Vec<Discussion>,
}

impl ForumStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let now = Local::now();
        let mut store = Self::new();

        store.discussions.push(Discussion {
            id: 1,
            slug: "tips-for-university-applications".to_string(),
            title: "Tips for University Applications".to_string(),
            author: "Sarah L.".to_string(),
            category: ForumCategory::Academic,
            content: "Hi everyone, I'm preparing my university applications and would like to \
                      share some tips I've learned along the way. First, start early! \
                      Applications can take much longer than you expect. Second, get multiple \
                      people to review your personal statement. Third, research each university \
                      thoroughly to tailor your application. Hope this helps!"
                .to_string(),
            posted_at: now - Duration::hours(2),
            likes: 23,
            replies: vec![
                Reply {
                    id: 1,
                    author: "Michael P.".to_string(),
                    content: "Thanks for sharing these tips! Starting early really helped me too."
                        .to_string(),
                    posted_at: now - Duration::hours(1),
                    likes: 5,
                },
                Reply {
                    id: 2,
                    author: "Jessica T.".to_string(),
                    content: "Do you have any tips specifically for personal statements?"
                        .to_string(),
                    posted_at: now - Duration::minutes(30),
                    likes: 2,
                },
            ],
        });

        store.discussions.push(Discussion {
            id: 2,
            slug: "study-group-for-ib-physics".to_string(),
            title: "Study Group for IB Physics".to_string(),
            author: "David W.".to_string(),
            category: ForumCategory::StudyGroups,
            content: "Looking to form a study group for IB Physics. We can meet twice a week to \
                      review concepts, solve problems together, and prepare for the exams. Let \
                      me know if you're interested!"
                .to_string(),
            posted_at: now - Duration::hours(5),
            likes: 12,
            replies: vec![Reply {
                id: 1,
                author: "Emma L.".to_string(),
                content: "I'd be interested in joining! I'm struggling with mechanics.".to_string(),
                posted_at: now - Duration::hours(4),
                likes: 3,
            }],
        });

        store.discussions.push(Discussion {
            id: 3,
            slug: "career-fair-experience-sharing".to_string(),
            title: "Career Fair Experience Sharing".to_string(),
            author: "Rachel T.".to_string(),
            category: ForumCategory::Career,
            content: "Just attended the annual career fair and wanted to share my experience. \
                      The event was well-organized with representatives from over 50 companies. \
                      Bring plenty of resumes and practice your elevator pitch beforehand."
                .to_string(),
            posted_at: now - Duration::days(1),
            likes: 45,
            replies: vec![Reply {
                id: 1,
                author: "John D.".to_string(),
                content: "Did you get any internship opportunities from the fair?".to_string(),
                posted_at: now - Duration::hours(20),
                likes: 4,
            }],
        });

        store
    }

    pub fn all(&self) -> &[Discussion] {
        &self.discussions
    }

    pub fn by_slug(&self, slug: &str) -> Option<&Discussion> {
        self.discussions
            .iter()
            .find(|discussion| discussion.slug == slug)
    }

    pub fn reply_count(&self) -> usize {
        self.discussions
            .iter()
            .map(|discussion| discussion.replies.len())
            .sum()
    }

    /// Create a discussion; the slug is derived from the title and the id is
    /// one past the current maximum.
    pub fn create(
        &mut self,
        title: &str,
        content: &str,
        category: ForumCategory,
        author: &str,
    ) -> &Discussion {
        let id = self
            .discussions
            .iter()
            .map(|discussion| discussion.id)
            .max()
            .map_or(1, |max| max + 1);
        let discussion = Discussion {
            id,
            slug: slugify(title),
            title: title.to_string(),
            author: author.to_string(),
            category,
            content: content.to_string(),
            posted_at: Local::now(),
            likes: 0,
            replies: Vec::new(),
        };
        self.discussions.insert(0, discussion);
        &self.discussions[0]
    }

    pub fn add_reply(&mut self, slug: &str, author: &str, content: &str) -> bool {
        let Some(discussion) = self
            .discussions
            .iter_mut()
            .find(|discussion| discussion.slug == slug)
        else {
            return false;
        };
        let id = discussion
            .replies
            .iter()
            .map(|reply| reply.id)
            .max()
            .map_or(1, |max| max + 1);
        discussion.replies.push(Reply {
            id,
            author: author.to_string(),
            content: content.to_string(),
            posted_at: Local::now(),
            likes: 0,
        });
        true
    }
}
