// Viewport classification
// Explicit responsive breakpoints; the week window shows 1, 3, or 7 days
// depending on the class.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Medium,
    Wide,
}

impl ViewportClass {
    const MEDIUM_MIN_WIDTH: f32 = 640.0;
    const WIDE_MIN_WIDTH: f32 = 1024.0;

    pub fn classify(width: f32) -> Self {
        if width >= Self::WIDE_MIN_WIDTH {
            Self::Wide
        } else if width >= Self::MEDIUM_MIN_WIDTH {
            Self::Medium
        } else {
            Self::Narrow
        }
    }

    pub fn visible_day_count(&self) -> usize {
        match self {
            Self::Narrow => 1,
            Self::Medium => 3,
            Self::Wide => 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(320.0 => ViewportClass::Narrow)]
    #[test_case(639.9 => ViewportClass::Narrow)]
    #[test_case(640.0 => ViewportClass::Medium)]
    #[test_case(1023.9 => ViewportClass::Medium)]
    #[test_case(1024.0 => ViewportClass::Wide)]
    #[test_case(1920.0 => ViewportClass::Wide)]
    fn classify_by_width(width: f32) -> ViewportClass {
        ViewportClass::classify(width)
    }

    #[test]
    fn day_counts() {
        assert_eq!(ViewportClass::Narrow.visible_day_count(), 1);
        assert_eq!(ViewportClass::Medium.visible_day_count(), 3);
        assert_eq!(ViewportClass::Wide.visible_day_count(), 7);
    }
}
