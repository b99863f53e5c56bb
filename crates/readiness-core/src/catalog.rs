//! The built-in graphic design readiness catalog.
//!
//! Category ids double as the partition keys for the axis profile, so
//! custom catalogs that want a full profile should reuse them.

use std::sync::OnceLock;

use crate::model::{Catalog, Category, Framework, Interpretation, Question, QuestionKind};

pub const INTEREST: &str = "interest";
pub const PERSONALITY: &str = "personality";
pub const COGNITIVE: &str = "cognitive";
pub const MOTIVATION: &str = "motivation";
pub const TECHNICAL: &str = "technical";

impl Catalog {
    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(build)
    }
}

fn question(
    id: &str,
    text: &str,
    kind: QuestionKind,
    options: &[&str],
    framework: Option<Framework>,
    weight: Option<f64>,
) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        kind,
        options: options.iter().map(|o| o.to_string()).collect(),
        framework,
        weight,
    }
}

fn rating(id: &str, text: &str, options: &[&str], weight: Option<f64>) -> Question {
    question(id, text, QuestionKind::RatingScale, options, None, weight)
}

fn choice(id: &str, text: &str, options: &[&str], weight: Option<f64>) -> Question {
    question(id, text, QuestionKind::SingleChoice, options, None, weight)
}

fn interpretation(high: &str, medium: &str, low: &str) -> Interpretation {
    Interpretation {
        high: high.to_string(),
        medium: medium.to_string(),
        low: low.to_string(),
    }
}

fn build() -> Catalog {
    Catalog {
        id: "graphic-design".into(),
        title: "Graphic Design Readiness Assessment".into(),
        description: "Discover whether graphic design is the right career path for you."
            .into(),
        categories: vec![interest(), personality(), cognitive(), motivation(), technical()],
    }
}

fn interest() -> Category {
    Category {
        id: INTEREST.into(),
        title: "Interest & Passion Assessment".into(),
        description: "How naturally drawn are you to design and visual elements?".into(),
        time_estimate_minutes: 5,
        interpretation: interpretation(
            "You show strong natural interest in design elements and visual communication",
            "You have moderate interest in design with room to grow",
            "Design interest appears limited - consider exploring related fields",
        ),
        questions: vec![
            rating(
                "int_1",
                "How often do you notice design elements in products, apps, or websites?",
                &["Never", "Rarely", "Sometimes", "Often", "Always"],
                Some(1.2),
            ),
            rating(
                "int_2",
                "When you see poor design (confusing layouts, bad color choices), how does it affect you?",
                &[
                    "Doesn't bother me",
                    "Slightly annoying",
                    "Moderately frustrating",
                    "Very bothersome",
                    "Extremely frustrating",
                ],
                Some(1.0),
            ),
            rating(
                "int_3",
                "How curious are you about learning how visual things are made?",
                &[
                    "Not curious",
                    "Slightly curious",
                    "Moderately curious",
                    "Very curious",
                    "Extremely curious",
                ],
                Some(1.1),
            ),
            choice(
                "int_4",
                "Do you follow design trends on social media or design websites?",
                &[
                    "Never",
                    "Occasionally browse",
                    "Sometimes save examples",
                    "Regularly follow design accounts",
                    "Actively engage with design content",
                ],
                None,
            ),
            rating(
                "int_5",
                "When creating presentations or documents, how much time do you spend on visual appearance?",
                &[
                    "Minimal - content only",
                    "Basic formatting",
                    "Moderate attention to visuals",
                    "Significant time on design",
                    "Extensive focus on visual appeal",
                ],
                None,
            ),
        ],
    }
}

fn personality() -> Category {
    let big5 = Some(Framework::Big5);
    Category {
        id: PERSONALITY.into(),
        title: "Personality & Work Style".into(),
        description: "Understanding your personality traits that align with design careers."
            .into(),
        time_estimate_minutes: 6,
        interpretation: interpretation(
            "Your personality traits align well with successful designers",
            "Good personality fit with some areas for development",
            "Some personality traits may challenge design work - consider support strategies",
        ),
        questions: vec![
            question(
                "pers_1",
                "How do you typically respond to creative criticism or feedback?",
                QuestionKind::SingleChoice,
                &[
                    "I get defensive and take it personally",
                    "I listen but often disagree internally",
                    "I consider feedback but trust my own judgment",
                    "I actively seek feedback and iterate based on it",
                    "I thrive on feedback and see it as collaboration",
                ],
                big5,
                Some(1.3),
            ),
            question(
                "pers_2",
                "When working on a project, which scenario energizes you most?",
                QuestionKind::SingleChoice,
                &[
                    "Working alone with complete creative control",
                    "Collaborating with one trusted partner",
                    "Working in a small creative team",
                    "Leading a larger team through the creative process",
                    "Being part of a large collaborative effort",
                ],
                big5,
                None,
            ),
            question(
                "pers_3",
                "How comfortable are you with ambiguous creative briefs or open-ended projects?",
                QuestionKind::RatingScale,
                &[
                    "Very uncomfortable",
                    "Somewhat uncomfortable",
                    "Neutral",
                    "Somewhat comfortable",
                    "Very comfortable",
                ],
                big5,
                None,
            ),
            question(
                "pers_4",
                "When you have multiple creative ideas, what's your typical approach?",
                QuestionKind::SingleChoice,
                &[
                    "I stick with my first good idea",
                    "I develop 2-3 options and pick the best",
                    "I explore many possibilities before deciding",
                    "I create multiple versions and get feedback",
                    "I iterate constantly, even after 'finishing'",
                ],
                big5,
                None,
            ),
            question(
                "pers_5",
                "How detail-oriented are you in your work?",
                QuestionKind::RatingScale,
                &[
                    "Focus on big picture only",
                    "Some attention to details",
                    "Balance of both",
                    "Very detail-focused",
                    "Perfectionist with details",
                ],
                big5,
                Some(1.2),
            ),
        ],
    }
}

fn cognitive() -> Category {
    Category {
        id: COGNITIVE.into(),
        title: "Cognitive Style & Aptitude".into(),
        description: "Testing your visual-spatial reasoning and design thinking abilities."
            .into(),
        time_estimate_minutes: 8,
        interpretation: interpretation(
            "Excellent visual-spatial abilities and design thinking skills",
            "Good cognitive abilities with potential for development",
            "May need extra practice with visual-spatial reasoning",
        ),
        questions: vec![
            choice(
                "cog_1",
                "When you look at this pattern: ●○●○●○, what comes next?",
                &["●", "○", "●●", "○○", "The pattern restarts"],
                None,
            ),
            choice(
                "cog_2",
                "If you rotate a triangle 90° clockwise, which direction does the point that was facing up now face?",
                &["Up", "Right", "Down", "Left", "It depends on the triangle"],
                None,
            ),
            choice(
                "cog_3",
                "Which learning style best describes you?",
                &[
                    "I learn best by reading instructions",
                    "I prefer listening to explanations",
                    "I need to see visual examples and diagrams",
                    "I learn by doing and experimenting",
                    "I combine multiple approaches",
                ],
                None,
            ),
            choice(
                "cog_4",
                "When solving problems, which approach do you prefer?",
                &[
                    "Step-by-step logical analysis",
                    "Intuitive, big-picture thinking",
                    "Trial and error experimentation",
                    "Research similar solutions first",
                    "Brainstorm multiple approaches",
                ],
                None,
            ),
            rating(
                "cog_5",
                "How well can you visualize 3D objects in your mind?",
                &["Very difficult", "Somewhat difficult", "Average", "Pretty good", "Excellent"],
                Some(1.2),
            ),
        ],
    }
}

fn motivation() -> Category {
    Category {
        id: MOTIVATION.into(),
        title: "Motivation & Goals".into(),
        description:
            "Understanding what drives your interest in design and your learning persistence."
                .into(),
        time_estimate_minutes: 5,
        interpretation: interpretation(
            "Strong motivation and persistence for creative work",
            "Good motivation with opportunity to strengthen persistence",
            "Consider what would increase your motivation for design work",
        ),
        questions: vec![
            question(
                "mot_1",
                "What primarily motivates your interest in graphic design?",
                QuestionKind::SingleChoice,
                &[
                    "Creative self-expression and artistic fulfillment",
                    "Career opportunities and job security",
                    "Flexible work options and freelancing",
                    "Making visual impact and solving problems",
                    "Building a portfolio and personal brand",
                ],
                Some(Framework::GrowthMindset),
                None,
            ),
            question(
                "mot_2",
                "When learning something challenging, how long do you typically persist?",
                QuestionKind::SingleChoice,
                &[
                    "I give up quickly if it's too hard",
                    "I try a few times then move on",
                    "I persist for days or weeks",
                    "I keep trying for months if needed",
                    "I persist until I master it, no matter how long",
                ],
                Some(Framework::Grit),
                Some(1.3),
            ),
            question(
                "mot_3",
                "How do you view creative 'failures' or designs that don't work?",
                QuestionKind::SingleChoice,
                &[
                    "As proof I'm not good at this",
                    "As frustrating setbacks",
                    "As normal parts of the process",
                    "As valuable learning opportunities",
                    "As stepping stones to better solutions",
                ],
                Some(Framework::GrowthMindset),
                Some(1.2),
            ),
            choice(
                "mot_4",
                "What's your ideal work environment for creative tasks?",
                &[
                    "Quiet, private space with minimal distractions",
                    "Coffee shop or casual environment with background noise",
                    "Collaborative workspace with other creatives",
                    "Home office with personal control over environment",
                    "Varies depending on the project and my mood",
                ],
                None,
            ),
        ],
    }
}

fn technical() -> Category {
    Category {
        id: TECHNICAL.into(),
        title: "Technical Knowledge & Skills".into(),
        description: "Assessing your current understanding of design principles and tools."
            .into(),
        time_estimate_minutes: 6,
        interpretation: interpretation(
            "Strong foundation in design principles and tools",
            "Good basic knowledge with room for technical growth",
            "Would benefit from fundamental design education",
        ),
        questions: vec![
            choice(
                "tech_1",
                "Which of these is a fundamental principle of good design?",
                &[
                    "Using as many colors as possible",
                    "Creating visual hierarchy through contrast",
                    "Making text as small as possible to fit more content",
                    "Using different fonts for each element",
                    "Centering everything on the page",
                ],
                None,
            ),
            choice(
                "tech_2",
                "What does 'white space' (or negative space) refer to in design?",
                &[
                    "Space that must be colored white",
                    "Mistakes or empty areas that need to be filled",
                    "Empty space around and between design elements",
                    "The background color of a design",
                    "Space reserved for text only",
                ],
                None,
            ),
            choice(
                "tech_3",
                "Which tool would be BEST for creating a company logo?",
                &[
                    "Microsoft PowerPoint",
                    "Adobe Photoshop",
                    "Adobe Illustrator",
                    "Canva",
                    "Microsoft Paint",
                ],
                None,
            ),
            choice(
                "tech_4",
                "What's the difference between RGB and CMYK color modes?",
                &[
                    "RGB is for print, CMYK is for screens",
                    "RGB is for screens, CMYK is for print",
                    "They're the same thing with different names",
                    "RGB has more colors, CMYK has fewer",
                    "CMYK is newer and better than RGB",
                ],
                None,
            ),
            choice(
                "tech_5",
                "How familiar are you with design software?",
                &[
                    "I've never used any design software",
                    "I've tried basic tools like Canva or PowerPoint",
                    "I have some experience with Adobe or similar tools",
                    "I'm comfortable with multiple design programs",
                    "I'm proficient in professional design software",
                ],
                Some(1.1),
            ),
        ],
    }
}
