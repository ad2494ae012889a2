//! The hand-authored résumé record the gallery is built from.

use crate::record::{
    EducationEntry, Header, ProjectEntry, ResumeRecord, Skills, TrainingEntry,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ResumeRecord {
    /// Returns the builtin record. All content is a compile-time-known
    /// constant; there is no file or network load.
    pub fn builtin() -> Self {
        Self {
            header: Header {
                name: "BRIJESH KASAUDHAN".to_string(),
                location: "Ghaziabad, India".to_string(),
                email: "brijeshkasaudhan8715@gmail.com".to_string(),
                phone: "(+91) 7518295593".to_string(),
                linkedin: "/brijesh-kasaudhan-4b2668257".to_string(),
            },
            summary: "I am Brijesh Kasaudhan, a fresher in the IT/ITES industry with a \
                      strong foundation in Computer Science from IMS Engineering College. \
                      I have hands-on experience as a Developer intern at Salesforce and \
                      skills in Java, HTML, CSS, JavaScript, Python, and SQL."
                .to_string(),
            skills: Skills {
                hard: strings(&[
                    "JAVA, C, C++",
                    "HTML, CSS, JavaScript, NodeJS, React",
                    "Python, Django, Flask",
                    "SQL, Mongodb",
                ]),
                soft: strings(&[
                    "Teamwork",
                    "Positive Thinker",
                    "Leadership",
                    "Quick Learner",
                ]),
            },
            education: vec![
                EducationEntry {
                    degree: "Computer Science | B.Tech".to_string(),
                    institution: "IMS Engineering College Ghaziabad".to_string(),
                    details: "CGPA: 8.09 | (2022-2026)".to_string(),
                },
                EducationEntry {
                    degree: "XII (CBSE)".to_string(),
                    institution: "Air Force School A F S Gorakhpur U.P.".to_string(),
                    details: "90.16% | 2021".to_string(),
                },
                EducationEntry {
                    degree: "X (CBSE)".to_string(),
                    institution: "Sacred Heart Sch Mauza Nichlaul Maharajganj U.P.".to_string(),
                    details: "90.67% | 2019".to_string(),
                },
            ],
            training: vec![
                TrainingEntry {
                    role: "Django Developer Trainee".to_string(),
                    company: "Hire3x - Online".to_string(),
                    date: "(May 2025)".to_string(),
                    description: vec![],
                },
                TrainingEntry {
                    role: "AI & Data Analytics Intern".to_string(),
                    company: "AICTE, Shell India, Edunet Foundation - Virtual".to_string(),
                    date: "(April 28-May 28, 2025)".to_string(),
                    description: strings(&[
                        "Completed a 4-week internship focused on applying AI and data \
                         analytics in sustainable development.",
                        "Worked on case studies related to environmental data, predictive \
                         modeling, and decision-making in green tech.",
                        "Learned tools and techniques for data collection, visualization \
                         and machine learning.",
                    ]),
                },
                TrainingEntry {
                    role: "AI Foundations Intern".to_string(),
                    company: "Microsoft Initiative | AICTE | Edunet Foundation - Virtual"
                        .to_string(),
                    date: "(April 10 - May 10, 2025)".to_string(),
                    description: strings(&[
                        "Interned in a virtual program on the foundations of Artificial \
                         Intelligence.",
                        "Studied supervised/unsupervised learning, neural networks, and \
                         ethical use of Al.",
                        "Completed mini-projects on Python-based Al models and real-world \
                         Al use cases.",
                    ]),
                },
                TrainingEntry {
                    role: "Developer Intern".to_string(),
                    company: "Salesforce".to_string(),
                    date: "(October - November 2023)".to_string(),
                    description: strings(&[
                        "Completed Salesforce Developer Virtual Internship and earned the \
                         Developer Super Set Badge.",
                        "Covered key Trailhead modules including: Salesforce Fundamentals, \
                         Organizational Setup, Process Automation, Apex, Testing & \
                         Debugging.",
                    ]),
                },
            ],
            projects: vec![ProjectEntry {
                name: "Smart Parking Management".to_string(),
                domain: "Web Application".to_string(),
                description: "A web application that uses real-time data to show available \
                              parking slots nearby, helping reduce traffic congestion and \
                              carbon emissions."
                    .to_string(),
                responsibilities: strings(&["Designed UI/UX.", "Razorpay integration."]),
                skills: strings(&["Html", "Css", "JavaScript", "Bootstrap"]),
            }],
            achievements: strings(&[
                "Al odyssey | Live Al at IIT Kharagpur | Internship trip Winner (March 2025)",
                "Nptel certificate on Data Science for Engineers (October 2024)",
                "Nptel certificate on Introduction To IOT (May 2024)",
                "Nptel certificate on Developing Soft skills and Personality (October 2023)",
                "Certification Al India 2.0 | Guvi (August 2023)",
                "Python certificate | Guvi (August 2023)",
            ]),
            hobbies: strings(&["Cycling", "Reading"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_record_is_well_formed() {
        let record = ResumeRecord::builtin();

        assert!(!record.header.name.is_empty());
        assert!(!record.summary.is_empty());
        assert!(!record.skills.hard.is_empty());
        assert!(!record.skills.soft.is_empty());
        assert_eq!(record.education.len(), 3);
        assert_eq!(record.training.len(), 4);
        assert_eq!(record.projects.len(), 1);
        assert_eq!(record.achievements.len(), 6);
        assert_eq!(record.hobbies.len(), 2);
    }

    #[test]
    fn builtin_dates_carry_their_own_parentheses() {
        let record = ResumeRecord::builtin();

        for entry in &record.training {
            assert!(entry.date.starts_with('('), "date: {}", entry.date);
            assert!(entry.date.ends_with(')'), "date: {}", entry.date);
        }
    }
}
