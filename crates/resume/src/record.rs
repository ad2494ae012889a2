//! The résumé data model.
//!
//! A `ResumeRecord` is a fixed, immutable value: it is constructed once (see
//! [`ResumeRecord::builtin`](crate::builtin)) and read for the lifetime of
//! the process. No field is mutated after construction.

/// Name and contact fields shown on the floating header billboard.
#[derive(Debug, Clone)]
pub struct Header {
    pub name: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    /// LinkedIn path fragment, e.g. `/jane-doe-1234`.
    pub linkedin: String,
}

/// Hard and soft skill lists, each kept in authoring order.
#[derive(Debug, Clone)]
pub struct Skills {
    pub hard: Vec<String>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    /// Grade and year information, rendered verbatim in parentheses.
    pub details: String,
}

#[derive(Debug, Clone)]
pub struct TrainingEntry {
    pub role: String,
    pub company: String,
    /// Date range; stored with or without surrounding parentheses.
    pub date: String,
    /// Bullet points under the header line. May be empty.
    pub description: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ProjectEntry {
    pub name: String,
    pub domain: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
}

/// The complete résumé: a header plus the named content sections.
#[derive(Debug, Clone)]
pub struct ResumeRecord {
    pub header: Header,
    pub summary: String,
    pub skills: Skills,
    pub education: Vec<EducationEntry>,
    pub training: Vec<TrainingEntry>,
    pub projects: Vec<ProjectEntry>,
    pub achievements: Vec<String>,
    pub hobbies: Vec<String>,
}
