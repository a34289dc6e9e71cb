//! Built-in sample records used to seed a gradebook at startup

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::models::Gradebook;
use crate::{debug, warn};

/// One sample student: name and `(subject, grades)` pairs
pub type SampleRecord = (&'static str, &'static [(&'static str, &'static [f64])]);

/// Five students with three grades in each default subject
pub const SAMPLE_STUDENTS: [SampleRecord; 5] = [
    (
        "Botho Mmutle",
        &[
            ("Mathematics", &[85.0, 90.0, 88.0]),
            ("English", &[92.0, 88.0, 95.0]),
            ("Science", &[78.0, 85.0, 82.0]),
        ],
    ),
    (
        "Katlo Bonno",
        &[
            ("Mathematics", &[72.0, 68.0, 75.0]),
            ("English", &[65.0, 70.0, 68.0]),
            ("Science", &[80.0, 78.0, 82.0]),
        ],
    ),
    (
        "Dabe Dabe",
        &[
            ("Mathematics", &[95.0, 92.0, 98.0]),
            ("English", &[88.0, 85.0, 90.0]),
            ("Science", &[92.0, 95.0, 90.0]),
        ],
    ),
    (
        "Aone Baithei",
        &[
            ("Mathematics", &[60.0, 65.0, 62.0]),
            ("English", &[55.0, 58.0, 60.0]),
            ("Science", &[65.0, 62.0, 68.0]),
        ],
    ),
    (
        "Grace Nabi",
        &[
            ("Mathematics", &[45.0, 50.0, 48.0]),
            ("English", &[52.0, 48.0, 50.0]),
            ("Science", &[55.0, 52.0, 58.0]),
        ],
    ),
];

/// Add the sample students to a gradebook.
///
/// Records the gradebook rejects (duplicate names, subjects it does not have)
/// are logged as warnings and skipped.
///
/// # Returns
/// Number of students added
pub fn load_sample_data(gradebook: &mut Gradebook) -> usize {
    let mut added = 0;

    for (name, subjects) in SAMPLE_STUDENTS {
        if let Err(e) = gradebook.add_student(name) {
            warn!("Skipping sample student: {e}");
            continue;
        }
        added += 1;

        for (subject, grades) in subjects {
            for grade in *grades {
                if let Err(e) = gradebook.add_grade(name, subject, *grade) {
                    warn!("Skipping sample grade for {name}: {e}");
                    break;
                }
            }
        }
    }

    debug!(
        "Loaded {added} sample students ({} grades)",
        gradebook.total_grade_count()
    );
    added
}

/// Build the gradebook a CLI session starts with
///
/// Uses the configured subjects, and seeds the sample students when
/// `gradebook.sample_data` is set.
///
/// # Errors
/// Returns `InvalidInput` if the configured subject list is unusable
pub fn startup_gradebook(config: &Config) -> Result<Gradebook> {
    let mut gradebook = Gradebook::with_subjects(&config.subjects())?;
    if config.gradebook.sample_data {
        load_sample_data(&mut gradebook);
    }
    Ok(gradebook)
}
