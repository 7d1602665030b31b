//! Rotating display quotes shown beside the form. Cosmetic only.

pub(crate) const QUOTES: &[&str] = &[
    "The beautiful thing about learning is that no one can take it away from you.",
    "Education is not the filling of a pail, but the lighting of a fire.",
    "An investment in knowledge pays the best interest.",
    "The expert in anything was once a beginner.",
    "Learning never exhausts the mind.",
];
