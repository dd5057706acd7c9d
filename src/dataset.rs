//! In-memory mock dataset for the school equipment hierarchy.
//!
//! The hierarchy is schools → grades → classes → equipment lists. Everything
//! is built once at startup and never mutated, so handlers only ever hold a
//! shared read reference. Unknown keys at the school/grade/class level
//! surface as `None`; equipment lookups always resolve via the reserved
//! `"default"` entry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Reserved equipment key used when no exact (school, grade, class)
/// combination is configured.
pub const DEFAULT_EQUIPMENT_KEY: &str = "default";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct School {
    pub id: String,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Grade {
    pub id: String,
    pub name: String,
    pub school_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Class {
    pub id: String,
    pub name: String,
    pub school_id: String,
    pub grade_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub quantity: u32,
}

/// Static dataset container.
///
/// Grade ids are only unique within their school and class ids within their
/// grade, so the collections are keyed by composite tuples rather than the
/// bare id.
pub struct Dataset {
    schools: Vec<School>,
    grades: HashMap<String, Vec<Grade>>,
    classes: HashMap<(String, String), Vec<Class>>,
    equipment: HashMap<String, Vec<Equipment>>,
}

/// Equipment lists are addressed by the joined `"school-grade-class"` form.
fn composite_key(school_id: &str, grade_id: &str, class_id: &str) -> String {
    format!("{}-{}-{}", school_id, grade_id, class_id)
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new()
    }
}

impl Dataset {
    pub fn new() -> Self {
        let schools = vec![
            School {
                id: "1".to_string(),
                name: "Northside High School".to_string(),
                address: "12 Elm Street".to_string(),
            },
            School {
                id: "2".to_string(),
                name: "Riverdale Secondary".to_string(),
                address: "400 Harbor Road".to_string(),
            },
            School {
                id: "3".to_string(),
                name: "Lakeview Academy".to_string(),
                address: "77 Crescent Avenue".to_string(),
            },
        ];

        let mut grades = HashMap::new();
        grades.insert(
            "1".to_string(),
            vec![
                Grade {
                    id: "9".to_string(),
                    name: "Grade 9".to_string(),
                    school_id: "1".to_string(),
                },
                Grade {
                    id: "10".to_string(),
                    name: "Grade 10".to_string(),
                    school_id: "1".to_string(),
                },
                Grade {
                    id: "11".to_string(),
                    name: "Grade 11".to_string(),
                    school_id: "1".to_string(),
                },
            ],
        );
        grades.insert(
            "2".to_string(),
            vec![
                Grade {
                    id: "9".to_string(),
                    name: "Grade 9".to_string(),
                    school_id: "2".to_string(),
                },
                Grade {
                    id: "10".to_string(),
                    name: "Grade 10".to_string(),
                    school_id: "2".to_string(),
                },
            ],
        );
        grades.insert(
            "3".to_string(),
            vec![Grade {
                id: "9".to_string(),
                name: "Grade 9".to_string(),
                school_id: "3".to_string(),
            }],
        );

        let mut classes = HashMap::new();
        classes.insert(
            ("1".to_string(), "9".to_string()),
            vec![
                Class {
                    id: "1".to_string(),
                    name: "9A".to_string(),
                    school_id: "1".to_string(),
                    grade_id: "9".to_string(),
                },
                Class {
                    id: "2".to_string(),
                    name: "9B".to_string(),
                    school_id: "1".to_string(),
                    grade_id: "9".to_string(),
                },
            ],
        );
        classes.insert(
            ("1".to_string(), "10".to_string()),
            vec![Class {
                id: "1".to_string(),
                name: "10A".to_string(),
                school_id: "1".to_string(),
                grade_id: "10".to_string(),
            }],
        );
        classes.insert(
            ("2".to_string(), "9".to_string()),
            vec![Class {
                id: "1".to_string(),
                name: "9 Blue".to_string(),
                school_id: "2".to_string(),
                grade_id: "9".to_string(),
            }],
        );

        let mut equipment = HashMap::new();
        equipment.insert(
            composite_key("1", "9", "1"),
            vec![
                Equipment {
                    id: "eq-101".to_string(),
                    name: "Bunsen burner".to_string(),
                    quantity: 12,
                },
                Equipment {
                    id: "eq-102".to_string(),
                    name: "Microscope".to_string(),
                    quantity: 6,
                },
                Equipment {
                    id: "eq-103".to_string(),
                    name: "Safety goggles".to_string(),
                    quantity: 30,
                },
            ],
        );
        equipment.insert(
            DEFAULT_EQUIPMENT_KEY.to_string(),
            vec![
                Equipment {
                    id: "eq-001".to_string(),
                    name: "Whiteboard marker".to_string(),
                    quantity: 10,
                },
                Equipment {
                    id: "eq-002".to_string(),
                    name: "Projector".to_string(),
                    quantity: 1,
                },
            ],
        );

        Self {
            schools,
            grades,
            classes,
            equipment,
        }
    }

    /// All schools in the dataset's fixed order. Never empty.
    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    /// Grades owned by `school_id`, or `None` for an unknown school.
    pub fn grades_by_school(&self, school_id: &str) -> Option<&[Grade]> {
        self.grades.get(school_id).map(Vec::as_slice)
    }

    /// Classes under the (school, grade) pair, or `None` when nothing matches.
    pub fn classes_by_grade(&self, school_id: &str, grade_id: &str) -> Option<&[Class]> {
        self.classes
            .get(&(school_id.to_string(), grade_id.to_string()))
            .map(Vec::as_slice)
    }

    /// Equipment list for the exact (school, grade, class) triple, falling
    /// back to the `"default"` list when no exact entry exists. Total: this
    /// never returns an absent result.
    pub fn equipment_list(&self, school_id: &str, grade_id: &str, class_id: &str) -> &[Equipment] {
        let key = composite_key(school_id, grade_id, class_id);
        self.equipment
            .get(&key)
            .or_else(|| self.equipment.get(DEFAULT_EQUIPMENT_KEY))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schools_never_empty() {
        let data = Dataset::new();
        assert!(!data.schools().is_empty());
    }

    #[test]
    fn grades_for_valid_school() {
        let data = Dataset::new();
        let grades = data.grades_by_school("1").expect("school 1 exists");
        assert!(!grades.is_empty());
        assert!(grades.iter().all(|g| g.school_id == "1"));
    }

    #[test]
    fn grades_for_unknown_school_are_absent() {
        let data = Dataset::new();
        assert!(data.grades_by_school("999").is_none());
    }

    #[test]
    fn classes_for_valid_pair() {
        let data = Dataset::new();
        let classes = data.classes_by_grade("1", "9").expect("1/9 exists");
        assert!(!classes.is_empty());
    }

    #[test]
    fn classes_for_unknown_school_are_absent() {
        let data = Dataset::new();
        assert!(data.classes_by_grade("999", "9").is_none());
    }

    #[test]
    fn equipment_exact_match() {
        let data = Dataset::new();
        let list = data.equipment_list("1", "9", "1");
        assert!(!list.is_empty());
        // The explicitly configured list, not the default one.
        assert!(list.iter().any(|e| e.id == "eq-101"));
    }

    #[test]
    fn equipment_falls_back_to_default() {
        let data = Dataset::new();
        let list = data.equipment_list("123", "456", "789");
        assert!(!list.is_empty());
        assert_eq!(list, data.equipment.get(DEFAULT_EQUIPMENT_KEY).unwrap().as_slice());
    }

    #[test]
    fn equipment_unconfigured_class_in_known_school_uses_default() {
        let data = Dataset::new();
        // Class 2 of grade 9 has no explicit entry.
        let list = data.equipment_list("1", "9", "2");
        assert!(!list.is_empty());
        assert!(list.iter().any(|e| e.id == "eq-001"));
    }
}
