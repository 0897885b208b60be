//! Starter profile presets.
//!
//! Provides the roster a new user starts from before adding their own agents.

use super::model::{AgentProfile, AgentRole, LearningPreferences};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Returns the starter learning agents.
///
/// - **Dr. Sarah Chen**: facilitator, collaborative and project-based learning
/// - **Alex Rivera**: student, computer science and digital art
/// - **Prof. James Wilson**: teacher, STEM education
/// - **Dr. Maya Patel**: learning specialist, adaptive learning
pub fn get_default_presets() -> Vec<AgentProfile> {
    vec![
        AgentProfile {
            id: "facilitator-1".to_string(),
            name: "Dr. Sarah Chen".to_string(),
            role: AgentRole::Facilitator,
            interests: tags(&[
                "Collaborative Learning",
                "Educational Technology",
                "Project-Based Learning",
            ]),
            strengths: tags(&["Group Facilitation", "Curriculum Design", "Active Listening"]),
            preferences: LearningPreferences {
                learning_style: "Experiential".to_string(),
                communication_style: "Inclusive and Supportive".to_string(),
                expertise: tags(&["Educational Psychology", "Learning Design"]),
            },
            avatar: Some(
                "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=400&h=400&fit=crop"
                    .to_string(),
            ),
        },
        AgentProfile {
            id: "student-1".to_string(),
            name: "Alex Rivera".to_string(),
            role: AgentRole::Student,
            interests: tags(&["Computer Science", "Art", "Music Production"]),
            strengths: tags(&[
                "Creative Problem Solving",
                "Digital Skills",
                "Visual Learning",
            ]),
            preferences: LearningPreferences {
                learning_style: "Visual-Spatial".to_string(),
                communication_style: "Direct and Creative".to_string(),
                expertise: tags(&["Programming", "Digital Art"]),
            },
            avatar: Some(
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop"
                    .to_string(),
            ),
        },
        AgentProfile {
            id: "teacher-1".to_string(),
            name: "Prof. James Wilson".to_string(),
            role: AgentRole::Teacher,
            interests: tags(&[
                "STEM Education",
                "Interactive Learning",
                "Research Methods",
            ]),
            strengths: tags(&[
                "Subject Expertise",
                "Student Engagement",
                "Assessment Design",
            ]),
            preferences: LearningPreferences {
                learning_style: "Analytical".to_string(),
                communication_style: "Structured and Clear".to_string(),
                expertise: tags(&["Mathematics", "Physics"]),
            },
            avatar: Some(
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop"
                    .to_string(),
            ),
        },
        AgentProfile {
            id: "learning-specialist-1".to_string(),
            name: "Dr. Maya Patel".to_string(),
            role: AgentRole::LearningSpecialist,
            interests: tags(&[
                "Adaptive Learning",
                "Cognitive Development",
                "Educational Psychology",
            ]),
            strengths: tags(&[
                "Learning Strategy Design",
                "Individual Assessment",
                "Support Planning",
            ]),
            preferences: LearningPreferences {
                learning_style: "Multi-modal".to_string(),
                communication_style: "Adaptive and Patient".to_string(),
                expertise: tags(&["Special Education", "Learning Technologies"]),
            },
            avatar: Some(
                "https://images.unsplash.com/photo-1551836022-d5d88e9218df?w=400&h=400&fit=crop"
                    .to_string(),
            ),
        },
    ]
}
