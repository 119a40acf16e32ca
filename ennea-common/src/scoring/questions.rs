//! Static question table
//!
//! Answers are positionally aligned to this table. Reordering or editing
//! entries changes scoring results.

use serde::Serialize;

use super::category::Category;

/// A single Likert-scale statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u8,
    pub text: &'static str,
    pub category: Category,
}

/// Questions per category
pub const QUESTIONS_PER_CATEGORY: usize = 5;

/// Total number of questions (and expected answers)
pub const QUESTION_COUNT: usize = 45;

const fn q(id: u8, category: Category, text: &'static str) -> Question {
    Question { id, text, category }
}

use Category::*;

/// The 45-question table, ordered by id
pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    q(1, Perfectionist, "I have high standards and expect things to be done correctly."),
    q(2, Perfectionist, "I often notice what's wrong or could be improved in situations."),
    q(3, Perfectionist, "I feel frustrated when things are disorganized or inefficient."),
    q(4, Perfectionist, "I believe there's usually one right way to do things."),
    q(5, Perfectionist, "I'm often critical of myself and others."),
    q(6, Helper, "I enjoy helping others and making them feel good."),
    q(7, Helper, "I often put others' needs before my own."),
    q(8, Helper, "I like to be needed and appreciated by others."),
    q(9, Helper, "I have difficulty saying no when people ask for help."),
    q(10, Helper, "I'm good at reading people's emotions and needs."),
    q(11, Achiever, "I'm very goal-oriented and driven to succeed."),
    q(12, Achiever, "I care about how others perceive me and my accomplishments."),
    q(13, Achiever, "I'm competitive and like to be the best at what I do."),
    q(14, Achiever, "I'm efficient and good at getting things done quickly."),
    q(15, Achiever, "I sometimes sacrifice personal relationships for success."),
    q(16, Individualist, "I often feel different or unique compared to others."),
    q(17, Individualist, "I'm drawn to beauty, art, and authentic experiences."),
    q(18, Individualist, "My emotions tend to be intense and changeable."),
    q(19, Individualist, "I sometimes feel like something important is missing in my life."),
    q(20, Individualist, "I value being authentic and true to myself."),
    q(21, Investigator, "I prefer to observe and understand before taking action."),
    q(22, Investigator, "I need plenty of alone time to recharge and think."),
    q(23, Investigator, "I'm curious and enjoy learning about complex topics."),
    q(24, Investigator, "I tend to be private and don't share personal information easily."),
    q(25, Investigator, "I sometimes feel overwhelmed by others' emotional demands."),
    q(26, Loyalist, "I tend to worry about potential problems and risks."),
    q(27, Loyalist, "I value security, loyalty, and reliable relationships."),
    q(28, Loyalist, "I often seek guidance and support from trusted authorities."),
    q(29, Loyalist, "I can be suspicious of others' motives sometimes."),
    q(30, Loyalist, "I'm committed and responsible in my relationships and work."),
    q(31, Enthusiast, "I love exploring new ideas, experiences, and possibilities."),
    q(32, Enthusiast, "I tend to be optimistic and focus on positive outcomes."),
    q(33, Enthusiast, "I get bored easily and like to keep my options open."),
    q(34, Enthusiast, "I have many interests and projects going at once."),
    q(35, Enthusiast, "I sometimes avoid dealing with negative emotions or situations."),
    q(36, Challenger, "I'm direct and assertive in my communication style."),
    q(37, Challenger, "I like to be in control and make decisions."),
    q(38, Challenger, "I stand up for myself and others who are being treated unfairly."),
    q(39, Challenger, "I'm comfortable with conflict and confrontation."),
    q(40, Challenger, "I have strong opinions and am not afraid to express them."),
    q(41, Peacemaker, "I prefer harmony and try to avoid conflict."),
    q(42, Peacemaker, "I'm easygoing and can see multiple perspectives on issues."),
    q(43, Peacemaker, "I sometimes have difficulty making decisions or taking action."),
    q(44, Peacemaker, "I tend to go along with others to keep the peace."),
    q(45, Peacemaker, "I'm a good mediator and can help others resolve conflicts."),
];

/// All questions in table order
pub fn all() -> &'static [Question] {
    &QUESTIONS
}

/// Questions belonging to one category, in table order
pub fn for_category(category: Category) -> impl Iterator<Item = &'static Question> {
    QUESTIONS.iter().filter(move |q| q.category == category)
}
